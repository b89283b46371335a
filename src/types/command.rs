use std::fmt;

/// Canned phrases the remote assistant treats as directives.
///
/// The payloads are opaque to this crate: they are sent as ordinary chat messages, byte for
/// byte, and only the system instruction on the remote side gives them meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BotCommand {
    /// Ask for an XML restore point of the project.
    SaveState,

    /// Ask for a one-click installer script.
    Build,

    /// Ask for README documentation.
    Textbook,

    /// Skip the assistant's negotiation loop; appended to other input.
    FastTrack,
}

impl BotCommand {
    /// All commands, in sidebar order.
    pub const ALL: [BotCommand; 4] = [
        BotCommand::SaveState,
        BotCommand::Build,
        BotCommand::Textbook,
        BotCommand::FastTrack,
    ];

    /// The exact text sent to the remote assistant.
    pub fn payload(self) -> &'static str {
        match self {
            BotCommand::SaveState => "Save State",
            BotCommand::Build => "Собери проект",
            BotCommand::Textbook => "Textbook",
            BotCommand::FastTrack => "Yes, Code it.",
        }
    }

    /// A short human label for menus and help output.
    pub fn label(self) -> &'static str {
        match self {
            BotCommand::SaveState => "CheckPoint",
            BotCommand::Build => "Build Project",
            BotCommand::Textbook => "Textbook",
            BotCommand::FastTrack => "Fast Track Protocol",
        }
    }
}

impl fmt::Display for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload())
    }
}
