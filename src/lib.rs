//! chat-relay - a minimal chat widget backed by a hosted language model
//!
//! Two halves: a stateless [`forwarder`] served over HTTP by [`api`], which
//! decorates prompts with the date and relays them to Gemini, and a
//! rendering-agnostic [`widget`] state machine that talks to it.

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod api;
pub mod config;
pub mod forwarder;
pub mod llm;
pub mod logging;
pub mod upload;
pub mod widget;
