//! Pure state transition function
//!
//! Given the same state and event this always yields the same result and
//! performs no I/O. The runtime executes the returned effects.

use super::state::{ConversationState, Message, Status};
use super::{Effect, Event};
use thiserror::Error;

/// Shown in place of a reply whenever forwarding fails, whatever the cause
pub const FALLBACK_MESSAGE: &str = "Oops! Something went wrong. Try again later.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConversationState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ConversationState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Events the current state does not accept. None of these change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Prompt is empty")]
    EmptyPrompt,
    #[error("A request is already in flight")]
    Busy,
    #[error("Input is disabled while a request is in flight")]
    InputDisabled,
    #[error("No request is in flight")]
    NotPending,
}

pub fn transition(
    state: &ConversationState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state.status, event) {
        // ============================================================
        // Input buffer
        // ============================================================
        (Status::Idle, Event::InputChanged { text }) => {
            let mut next = state.clone();
            next.input = text;
            Ok(TransitionResult::new(next))
        }

        (Status::Pending, Event::InputChanged { .. }) => Err(TransitionError::InputDisabled),

        // ============================================================
        // Submission
        // ============================================================
        (Status::Pending, Event::Submit { .. }) => Err(TransitionError::Busy),

        (Status::Idle, Event::Submit { text }) if text.trim().is_empty() => {
            Err(TransitionError::EmptyPrompt)
        }

        // Idle + Submit -> Pending, the raw text is both shown and forwarded
        (Status::Idle, Event::Submit { text }) => {
            let mut next = state.clone();
            next.messages.push(Message::user(text.clone()));
            next.input.clear();
            next.status = Status::Pending;
            Ok(TransitionResult::new(next).with_effect(Effect::Forward { prompt: text }))
        }

        // ============================================================
        // Forwarder results
        // ============================================================
        (Status::Pending, Event::ForwardSucceeded { reply }) => {
            let mut next = state.clone();
            next.messages.push(Message::bot(reply));
            next.status = Status::Idle;
            Ok(TransitionResult::new(next))
        }

        (Status::Pending, Event::ForwardFailed { .. }) => {
            let mut next = state.clone();
            next.messages.push(Message::bot(FALLBACK_MESSAGE));
            next.status = Status::Idle;
            Ok(TransitionResult::new(next))
        }

        (Status::Idle, Event::ForwardSucceeded { .. } | Event::ForwardFailed { .. }) => {
            Err(TransitionError::NotPending)
        }
    }
}
