//! Mock implementations for testing
//!
//! These mocks let the chat client run without a forwarding server.

use super::client::{ClientError, ForwardClient};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Semaphore;

// ============================================================================
// Mock Forward Client
// ============================================================================

/// Mock forwarder that returns queued results
///
/// A gated mock holds every call until [`MockForwardClient::release`] is
/// called, which keeps the client Pending for as long as a test needs.
pub struct MockForwardClient {
    responses: Mutex<VecDeque<Result<String, ClientError>>>,
    prompts: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
}

impl MockForwardClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new()
        }
    }

    pub fn with_reply(self, reply: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(reply.to_string()));
        self
    }

    pub fn with_error(self, error: ClientError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Let one held call complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Prompts received so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForwardClient for MockForwardClient {
    async fn forward(&self, prompt: &str) -> Result<String, ClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Malformed("No mock response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{create_router, AppState};
    use crate::forwarder::{format_date, PromptForwarder};
    use crate::llm::testing::MockLlmService;
    use crate::llm::LlmError;
    use crate::widget::{
        ChatClient, HttpForwardClient, Message, Role, Status, SubmitOutcome, FALLBACK_MESSAGE,
    };
    use chrono::Local;
    use futures::StreamExt;
    use std::sync::Arc;

    async fn spawn_relay(llm: Arc<MockLlmService>) -> String {
        let app = create_router(AppState::new(PromptForwarder::new(llm)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/chat")
    }

    #[tokio::test]
    async fn test_mock_forward_client() {
        let mock = MockForwardClient::new().with_reply("hello");
        assert_eq!(mock.forward("a").await.unwrap(), "hello");
        assert!(mock.forward("b").await.is_err());
        assert_eq!(mock.prompts(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let mock = Arc::new(MockForwardClient::new().with_reply("Hi there!"));
        let client = ChatClient::new(mock.clone());

        assert_eq!(client.submit("Hello").await, SubmitOutcome::Completed);

        let state = client.current_state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(
            state.messages(),
            &[Message::user("Hello"), Message::bot("Hi there!")]
        );
        assert_eq!(mock.prompts(), vec!["Hello"]);
    }

    #[tokio::test]
    async fn test_failure_shows_fallback() {
        let mock = Arc::new(MockForwardClient::new().with_error(ClientError::Status {
            status: 502,
            message: "quota exceeded".to_string(),
        }));
        let client = ChatClient::new(mock);

        assert_eq!(client.submit("Hello").await, SubmitOutcome::Completed);

        let state = client.current_state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1], Message::bot(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let mock = Arc::new(MockForwardClient::new());
        let client = ChatClient::new(mock.clone());
        let rx = client.subscribe();

        assert_eq!(client.submit("").await, SubmitOutcome::EmptyPrompt);
        assert_eq!(client.submit("   ").await, SubmitOutcome::EmptyPrompt);

        assert!(client.current_state().messages().is_empty());
        assert!(mock.prompts().is_empty());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_submit_while_pending_is_ignored() {
        let mock = Arc::new(MockForwardClient::gated().with_reply("first reply"));
        let client = ChatClient::new(mock.clone());
        let mut rx = client.subscribe();

        let first = tokio::spawn({
            let client = client.clone();
            async move { client.submit("first").await }
        });

        rx.wait_for(|s| s.status().is_pending()).await.unwrap();
        assert!(!client.set_input("typing"));
        assert_eq!(client.submit("second").await, SubmitOutcome::Busy);
        assert_eq!(client.current_state().messages(), &[Message::user("first")]);

        mock.release();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Completed);

        let state = client.current_state();
        assert_eq!(
            state.messages(),
            &[Message::user("first"), Message::bot("first reply")]
        );
        assert_eq!(mock.prompts(), vec!["first"]);
    }

    #[tokio::test]
    async fn test_pending_spans_whole_request() {
        let mock = Arc::new(MockForwardClient::gated().with_reply("done"));
        let client = ChatClient::new(mock.clone());
        let mut rx = client.subscribe();

        let task = tokio::spawn({
            let client = client.clone();
            async move { client.submit("question").await }
        });

        rx.wait_for(|s| s.status().is_pending()).await.unwrap();
        // Wait for the call to reach the forwarder; still Pending while it is held
        while mock.prompts().is_empty() {
            tokio::task::yield_now().await;
        }
        assert_eq!(client.current_state().status(), Status::Pending);

        mock.release();
        task.await.unwrap();
        assert_eq!(client.current_state().status(), Status::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submit_still_completes() {
        let mock = Arc::new(MockForwardClient::gated().with_reply("late"));
        let client = ChatClient::new(mock.clone());
        let mut rx = client.subscribe();

        let task = tokio::spawn({
            let client = client.clone();
            async move { client.submit("question").await }
        });
        rx.wait_for(|s| s.status().is_pending()).await.unwrap();
        task.abort();
        let _ = task.await;

        mock.release();
        let state = rx.wait_for(|s| s.status().is_idle()).await.unwrap().clone();
        assert_eq!(state.last_message(), Some(&Message::bot("late")));
    }

    struct PanickingForwardClient;

    #[async_trait]
    impl ForwardClient for PanickingForwardClient {
        async fn forward(&self, _prompt: &str) -> Result<String, ClientError> {
            panic!("forwarder blew up");
        }
    }

    #[tokio::test]
    async fn test_panicking_forwarder_shows_fallback() {
        let client = ChatClient::new(PanickingForwardClient);

        assert_eq!(client.submit("Hello").await, SubmitOutcome::Completed);

        let state = client.current_state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(
            state.messages(),
            &[Message::user("Hello"), Message::bot(FALLBACK_MESSAGE)]
        );

        // Not stuck: the next submit is accepted
        assert_eq!(client.submit("Again").await, SubmitOutcome::Completed);
        assert_eq!(client.current_state().messages().len(), 4);
    }

    #[tokio::test]
    async fn test_input_buffer_submit() {
        let mock = Arc::new(MockForwardClient::new().with_reply("pong"));
        let client = ChatClient::new(mock.clone());

        assert_eq!(client.submit_input().await, SubmitOutcome::EmptyPrompt);

        assert!(client.set_input("ping"));
        assert_eq!(client.current_state().input(), "ping");
        assert_eq!(client.submit_input().await, SubmitOutcome::Completed);

        let state = client.current_state();
        assert_eq!(state.input(), "");
        assert_eq!(state.messages(), &[Message::user("ping"), Message::bot("pong")]);
    }

    #[tokio::test]
    async fn test_updates_stream_observes_transitions() {
        let mock = Arc::new(MockForwardClient::gated().with_reply("4"));
        let client = ChatClient::new(mock.clone());
        let mut updates = client.updates();

        let initial = updates.next().await.unwrap();
        assert!(initial.messages().is_empty());

        let task = tokio::spawn({
            let client = client.clone();
            async move { client.submit("2+2").await }
        });

        let pending = updates.next().await.unwrap();
        assert_eq!(pending.status(), Status::Pending);
        assert_eq!(pending.messages(), &[Message::user("2+2")]);

        mock.release();
        task.await.unwrap();

        let done = updates.next().await.unwrap();
        assert_eq!(done.status(), Status::Idle);
        assert_eq!(done.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_conversation_order_over_several_exchanges() {
        let mock = Arc::new(
            MockForwardClient::new()
                .with_reply("one")
                .with_error(ClientError::Malformed("bad json".to_string()))
                .with_reply("three"),
        );
        let client = ChatClient::new(mock);

        client.submit("1").await;
        client.submit("2").await;
        client.submit("3").await;

        let roles: Vec<Role> = client
            .current_state()
            .messages()
            .iter()
            .map(Message::role)
            .collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Bot, Role::User, Role::Bot, Role::User, Role::Bot]
        );
        assert_eq!(client.current_state().messages()[3].text(), FALLBACK_MESSAGE);
    }

    /// Client -> HTTP endpoint -> forwarder -> stub provider
    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let llm = Arc::new(MockLlmService::new().with_reply("4"));
        let endpoint = spawn_relay(llm.clone()).await;
        let client = ChatClient::new(HttpForwardClient::new(endpoint));

        let before = Local::now().date_naive();
        assert_eq!(client.submit("What is 2+2?").await, SubmitOutcome::Completed);
        let after = Local::now().date_naive();

        let state = client.current_state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(
            state.messages(),
            &[Message::user("What is 2+2?"), Message::bot("4")]
        );

        let requests = llm.recorded_requests();
        assert_eq!(requests.len(), 1);
        let expected =
            [before, after].map(|d| format!("Today is {}.\n\nWhat is 2+2?", format_date(d)));
        assert!(expected.contains(&requests[0].prompt), "{}", requests[0].prompt);
    }

    #[tokio::test]
    async fn test_end_to_end_provider_failure() {
        let llm = Arc::new(MockLlmService::new().with_error(LlmError::auth("API key not valid")));
        let endpoint = spawn_relay(llm).await;
        let client = ChatClient::new(HttpForwardClient::new(endpoint));

        client.submit("Hello").await;

        let state = client.current_state();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.last_message(), Some(&Message::bot(FALLBACK_MESSAGE)));
    }

    #[tokio::test]
    async fn test_in_process_forwarder() {
        let llm = Arc::new(MockLlmService::new().with_reply("in process"));
        let client = ChatClient::new(PromptForwarder::new(llm));

        client.submit("Hello").await;
        assert_eq!(
            client.current_state().last_message(),
            Some(&Message::bot("in process"))
        );
    }
}
