//! Conversation state types

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One entry in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Whether a forward request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Pending,
}

impl Status {
    pub fn is_idle(self) -> bool {
        self == Status::Idle
    }

    pub fn is_pending(self) -> bool {
        self == Status::Pending
    }
}

/// Everything a display surface needs to render the widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub(super) messages: Vec<Message>,
    pub(super) status: Status,
    pub(super) input: String,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in conversation order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current contents of the input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
