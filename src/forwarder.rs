//! Prompt forwarder
//!
//! Decorates a raw prompt with today's date and relays it to the generation
//! provider with a fixed sampling configuration and no history. Holds no
//! per-request state, so one instance serves every request.

mod prompt;

pub use prompt::{decorate_prompt, format_date};

use crate::llm::{GenerationConfig, LlmError, LlmRequest, LlmService};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use thiserror::Error;

/// Errors from a single forward call
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error(transparent)]
    Provider(#[from] LlmError),
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct PromptForwarder {
    llm: Arc<dyn LlmService>,
    context: String,
    today: fn() -> NaiveDate,
}

impl PromptForwarder {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self {
            llm,
            context: String::new(),
            today: local_today,
        }
    }

    /// Auxiliary text inserted between the date line and the question
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Override the date source
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }

    /// The text that would be sent to the provider for `prompt`
    pub fn decorated(&self, prompt: &str) -> String {
        decorate_prompt(&format_date((self.today)()), &self.context, prompt)
    }

    /// Forward one prompt and return the provider's text verbatim
    pub async fn forward(&self, prompt: &str) -> Result<String, ForwardError> {
        if prompt.trim().is_empty() {
            return Err(ForwardError::EmptyPrompt);
        }

        let request = LlmRequest::single_turn(self.decorated(prompt), GenerationConfig::FIXED);
        tracing::debug!(
            model = %self.llm.model_id(),
            prompt_len = prompt.len(),
            has_context = !self.context.is_empty(),
            "Forwarding prompt"
        );

        let response = self.llm.complete(&request).await?;
        Ok(response.text)
    }
}
