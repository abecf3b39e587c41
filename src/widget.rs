//! Chat client state machine
//!
//! Implements the Elm Architecture pattern: a pure transition function over
//! [`ConversationState`] plus a runtime that executes effects against a
//! [`ForwardClient`]. Nothing here knows how the conversation is rendered.

mod client;
mod effect;
mod event;
mod runtime;
mod state;
mod transition;

#[cfg(test)]
pub mod testing;

pub use client::{ClientError, ForwardClient, HttpForwardClient};
pub use effect::Effect;
pub use event::Event;
pub use runtime::{ChatClient, SubmitOutcome};
pub use state::{ConversationState, Message, Role, Status};
pub use transition::{transition, TransitionError, TransitionResult, FALLBACK_MESSAGE};
