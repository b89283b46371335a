use crate::types::Message;

/// The displayed state of a conversation.
///
/// Only the conversation controller mutates this; everything else sees it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    messages: Vec<Message>,
    is_loading: bool,
    error: Option<String>,
}

impl SessionState {
    /// The state at application start: no messages, loading until startup resolves.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// The conversation thread in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns true while a remote call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The user-facing error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub(crate) fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
