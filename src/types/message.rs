use std::fmt;

use time::OffsetDateTime;

/// Who authored a message in the conversation thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// The local developer.
    User,

    /// The remote assistant.
    Assistant,
}

impl Role {
    /// The label shown above messages from this role.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "Developer",
            Role::Assistant => "Architect AI",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Opaque, unique identifier of a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(String);

impl MessageId {
    /// Builds an identifier from a creation time and a per-conversation sequence number.
    ///
    /// The sequence number must be strictly increasing for a given conversation; the
    /// timestamp prefix keeps identifiers from separate runs apart.
    pub fn new(created_at: OffsetDateTime, sequence: u64) -> Self {
        let millis = created_at.unix_timestamp_nanos() / 1_000_000;
        Self(format!("msg-{millis}-{sequence}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry in the conversation thread.
///
/// Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    role: Role,
    text: String,
    created_at: OffsetDateTime,
}

impl Message {
    /// Create a new message.
    pub fn new(
        id: MessageId,
        role: Role,
        text: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            created_at,
        }
    }

    /// The unique identifier of this message.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// The author of this message.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The raw message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the message was created.
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Returns true if the remote assistant wrote this message.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// The current wall-clock time, in the local offset when it can be determined.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn message_id_format() {
        let id = MessageId::new(datetime!(2024-01-02 03:04:05.678 UTC), 7);
        assert_eq!(id.as_str(), "msg-1704164645678-7");
        assert_eq!(id.to_string(), "msg-1704164645678-7");
    }

    #[test]
    fn message_ids_differ_by_sequence() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        assert_ne!(MessageId::new(at, 1), MessageId::new(at, 2));
    }

    #[test]
    fn message_accessors() {
        let at = datetime!(2024-01-02 03:04:05 UTC);
        let message = Message::new(MessageId::new(at, 0), Role::Assistant, "hello", at);
        assert_eq!(message.role(), Role::Assistant);
        assert_eq!(message.text(), "hello");
        assert_eq!(message.created_at(), at);
        assert!(message.is_assistant());
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.display_name(), "Developer");
        assert_eq!(Role::Assistant.display_name(), "Architect AI");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
