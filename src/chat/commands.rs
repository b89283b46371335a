//! Slash command parsing for the chat application.
//!
//! Input that starts with `/` controls the terminal session or stands in for one of the
//! canned directives.  Everything else is sent to the assistant as-is.

use crate::types::BotCommand;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Send a canned directive to the assistant.
    Directive(BotCommand),

    /// Append the fast-track phrase to the pending input.
    ///
    /// With an argument, the argument becomes the pending input first.
    FastTrack(Option<String>),

    /// Print the system instruction driving the assistant.
    Prompt,

    /// Display session status (model, message count, errors).
    Status,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command, or `None` if it should be sent to
/// the assistant.
///
/// # Examples
///
/// ```
/// # use architect::chat::{ChatCommand, parse_command};
/// # use architect::types::BotCommand;
/// assert_eq!(parse_command("/build"), Some(ChatCommand::Directive(BotCommand::Build)));
/// assert!(parse_command("Build me a CRM").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    let rest = input.strip_prefix('/')?;
    let mut parts = rest.splitn(2, char::is_whitespace);
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "checkpoint" | "save" => no_argument(
            argument,
            ChatCommand::Directive(BotCommand::SaveState),
            "/checkpoint",
        ),
        "build" => no_argument(argument, ChatCommand::Directive(BotCommand::Build), "/build"),
        "textbook" | "docs" => no_argument(
            argument,
            ChatCommand::Directive(BotCommand::Textbook),
            "/textbook",
        ),
        "fast" | "fasttrack" => ChatCommand::FastTrack(argument.map(|s| s.to_string())),
        "prompt" | "system" => ChatCommand::Prompt,
        "status" | "stats" => ChatCommand::Status,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

fn no_argument(argument: Option<&str>, command: ChatCommand, name: &str) -> ChatCommand {
    match argument {
        None => command,
        Some(_) => ChatCommand::Invalid(format!("{} takes no argument", name)),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /checkpoint            Ask for an XML restore point ("Save State")
  /build                 Ask for a one-click installer ("Собери проект")
  /textbook              Ask for README documentation ("Textbook")
  /fast [text]           Append "Yes, Code it." to the input, then edit and send it
  /prompt                Show the system instruction
  /status                Show session status
  /help                  Show this help message
  /quit                  Exit the chat"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_directives() {
        assert_eq!(
            parse_command("/checkpoint"),
            Some(ChatCommand::Directive(BotCommand::SaveState))
        );
        assert_eq!(
            parse_command("/BUILD"),
            Some(ChatCommand::Directive(BotCommand::Build))
        );
        assert_eq!(
            parse_command("/textbook"),
            Some(ChatCommand::Directive(BotCommand::Textbook))
        );
        assert!(matches!(
            parse_command("/build now"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("no argument")
        ));
    }

    #[test]
    fn parse_fast_track() {
        assert_eq!(parse_command("/fast"), Some(ChatCommand::FastTrack(None)));
        assert_eq!(
            parse_command("/fast   Build a CRM "),
            Some(ChatCommand::FastTrack(Some("Build a CRM".to_string())))
        );
    }

    #[test]
    fn parse_info_commands() {
        assert_eq!(parse_command("/prompt"), Some(ChatCommand::Prompt));
        assert_eq!(parse_command("/status"), Some(ChatCommand::Status));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse_command("/model gemini-2.5-pro"),
            Some(ChatCommand::Invalid("Unknown command: /model".to_string()))
        );
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Save State"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
    }

    #[test]
    fn help_mentions_every_command() {
        let help = help_text();
        for command in [
            "/checkpoint",
            "/build",
            "/textbook",
            "/fast",
            "/prompt",
            "/status",
            "/help",
            "/quit",
        ] {
            assert!(help.contains(command), "{command} missing from help");
        }
    }
}
