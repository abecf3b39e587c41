//! HTTP API for the prompt forwarder

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::forwarder::PromptForwarder;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<PromptForwarder>,
}

impl AppState {
    pub fn new(forwarder: PromptForwarder) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
        }
    }
}
