//! Transport between the chat client and the prompt forwarder

use crate::api::{ErrorResponse, ForwardRequest, ForwardResponse};
use crate::forwarder::{ForwardError, PromptForwarder};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Ways a forward call can fail. All of them end up as the same fallback
/// message in the conversation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Forwarder returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error(transparent)]
    Forward(#[from] ForwardError),
}

/// Sends one prompt and returns the reply text
#[async_trait]
pub trait ForwardClient: Send + Sync {
    async fn forward(&self, prompt: &str) -> Result<String, ClientError>;
}

#[async_trait]
impl<T: ForwardClient + ?Sized> ForwardClient for Arc<T> {
    async fn forward(&self, prompt: &str) -> Result<String, ClientError> {
        (**self).forward(prompt).await
    }
}

/// Calls the forwarding endpoint over HTTP
pub struct HttpForwardClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpForwardClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ForwardClient for HttpForwardClient {
    async fn forward(&self, prompt: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ForwardRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body).map_or(body, |e| e.error);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ForwardResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Malformed(e.to_string()))?;
        Ok(parsed.reply)
    }
}

/// In-process forwarding, for hosts that embed the forwarder directly
#[async_trait]
impl ForwardClient for PromptForwarder {
    async fn forward(&self, prompt: &str) -> Result<String, ClientError> {
        Ok(PromptForwarder::forward(self, prompt).await?)
    }
}
