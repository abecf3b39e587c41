//! Events that can occur in a conversation

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User events
    InputChanged { text: String },
    Submit { text: String },

    // Forwarder events
    ForwardSucceeded { reply: String },
    ForwardFailed { error: String },
}
