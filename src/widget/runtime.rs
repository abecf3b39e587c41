//! Chat client runtime
//!
//! Owns the conversation state, feeds events through [`transition`] and
//! executes the resulting effects. State changes are published on a watch
//! channel so any display surface can follow along.

use super::client::ForwardClient;
use super::state::ConversationState;
use super::transition::{transition, TransitionError};
use super::{Effect, Event};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// What happened to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange ran to completion and a bot message was appended
    Completed,
    /// Blank input, nothing changed
    EmptyPrompt,
    /// Another request is in flight, nothing changed
    Busy,
}

struct Inner<C> {
    forwarder: C,
    state_tx: watch::Sender<ConversationState>,
}

/// Conversation state machine bound to a forwarder
///
/// Cloning yields another handle onto the same conversation.
pub struct ChatClient<C> {
    inner: Arc<Inner<C>>,
}

impl<C> Clone for ChatClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ForwardClient + 'static> ChatClient<C> {
    pub fn new(forwarder: C) -> Self {
        let (state_tx, _) = watch::channel(ConversationState::new());
        Self {
            inner: Arc::new(Inner {
                forwarder,
                state_tx,
            }),
        }
    }

    /// Snapshot of the current state
    pub fn current_state(&self) -> ConversationState {
        self.inner.state_tx.borrow().clone()
    }

    /// Receiver that is notified after every transition
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.inner.state_tx.subscribe()
    }

    /// Stream of state snapshots, starting with the current one
    pub fn updates(&self) -> WatchStream<ConversationState> {
        WatchStream::new(self.subscribe())
    }

    /// Replace the input buffer. Returns false while a request is pending.
    pub fn set_input(&self, text: impl Into<String>) -> bool {
        self.inner
            .apply(Event::InputChanged { text: text.into() })
            .is_ok()
    }

    /// Submit whatever is in the input buffer
    pub async fn submit_input(&self) -> SubmitOutcome {
        let text = self.inner.state_tx.borrow().input().to_string();
        self.submit(text).await
    }

    /// Submit a prompt and wait for the exchange to finish
    ///
    /// The forward call runs on its own task: dropping this future does not
    /// cancel it, and the conversation still returns to Idle when it ends.
    pub async fn submit(&self, text: impl Into<String>) -> SubmitOutcome {
        let effects = match self.inner.apply(Event::Submit { text: text.into() }) {
            Ok(effects) => effects,
            Err(TransitionError::EmptyPrompt) => return SubmitOutcome::EmptyPrompt,
            Err(_) => return SubmitOutcome::Busy,
        };

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            for effect in effects {
                Inner::execute(&inner, effect).await;
            }
        });
        if let Err(e) = task.await {
            tracing::error!(error = %e, "Effect task failed");
        }

        SubmitOutcome::Completed
    }
}

impl<C: ForwardClient + 'static> Inner<C> {
    /// Run one event through the transition function, publishing the new
    /// state if it was accepted. Check and update happen under one lock.
    fn apply(&self, event: Event) -> Result<Vec<Effect>, TransitionError> {
        let mut outcome = Ok(Vec::new());
        self.state_tx.send_if_modified(|state| match transition(state, event) {
            Ok(result) => {
                *state = result.new_state;
                outcome = Ok(result.effects);
                true
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }

    /// Execute one effect. A panic inside the forwarder counts as a failed
    /// forward.
    async fn execute(this: &Arc<Self>, effect: Effect) {
        match effect {
            Effect::Forward { prompt } => {
                let call = tokio::spawn({
                    let this = Arc::clone(this);
                    async move { this.forwarder.forward(&prompt).await }
                });
                let event = match call.await {
                    Ok(Ok(reply)) => Event::ForwardSucceeded { reply },
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "Forward failed, showing fallback message");
                        Event::ForwardFailed {
                            error: e.to_string(),
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Forward task aborted, showing fallback message");
                        Event::ForwardFailed {
                            error: e.to_string(),
                        }
                    }
                };
                if let Err(e) = this.apply(event) {
                    tracing::error!(error = %e, "Forward result rejected");
                }
            }
        }
    }
}
