//! Terminal rendering for the conversation.
//!
//! [`PlainTextRenderer`] prints each message as a header line followed by its
//! [`markup`](crate::markup) blocks, with optional ANSI styling.  It implements
//! [`SessionObserver`], so installing it on a controller prints every message as it is
//! appended, keeping the newest message at the bottom of the terminal.

use std::io::{self, Stdout, Write};

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::chat::SessionObserver;
use crate::markup::{self, Block};
use crate::types::{Message, Role};

/// ANSI escape code for dim text (used for timestamps and the thinking indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for bold text (used for role headers).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the assistant and code headers).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (used for code bodies).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// Printed while a remote call is outstanding.
pub const THINKING_INDICATOR: &str = "ARCHITECT IS THINKING...";

const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer<W: Write + Send = Stdout> {
    out: W,
    use_color: bool,
}

impl PlainTextRenderer<Stdout> {
    /// Creates a new PlainTextRenderer on stdout with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer on stdout with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self::with_writer(io::stdout(), use_color)
    }
}

impl Default for PlainTextRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> PlainTextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn with_writer(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints a message: a header with author and time, then its blocks.
    pub fn print_message(&mut self, message: &Message) {
        let header = self.header(message);
        self.write(&header);
        for block in markup::blocks(message.text()) {
            self.print_block(block);
        }
        self.write("\n");
        self.flush();
    }

    /// Prints an error banner.
    pub fn print_error(&mut self, error: &str) {
        let banner = self.styled(ANSI_RED, &format!("ERROR: {error}"));
        self.write(&format!("{banner}\n"));
        self.flush();
    }

    /// Prints an informational line.
    pub fn print_info(&mut self, info: &str) {
        self.write(&format!("{info}\n"));
        self.flush();
    }

    /// Prints the thinking indicator.
    pub fn print_thinking(&mut self) {
        let indicator = self.styled(ANSI_DIM, THINKING_INDICATOR);
        self.write(&format!("{indicator}\n"));
        self.flush();
    }

    fn header(&self, message: &Message) -> String {
        let name = message.role().display_name();
        let name = match message.role() {
            Role::Assistant if self.use_color => {
                format!("{ANSI_BOLD}{ANSI_CYAN}{name}{ANSI_RESET}")
            }
            _ => self.styled(ANSI_BOLD, name),
        };
        let time = self.styled(ANSI_DIM, &format!("[{}]", timestamp(message.created_at())));
        format!("{time} {name}\n")
    }

    fn print_block(&mut self, block: Block<'_>) {
        match block {
            Block::Paragraph { content } => self.write(content),
            Block::Code { language, content } => {
                let rule = self.styled(ANSI_CYAN, &format!("--- {language} ---"));
                self.write(&format!("\n{rule}\n"));
                let body = self.styled(ANSI_YELLOW, content);
                self.write(&body);
                if !content.ends_with('\n') {
                    self.write("\n");
                }
                let rule = self.styled(ANSI_CYAN, "---");
                self.write(&format!("{rule}\n"));
            }
        }
    }

    fn styled(&self, style: &str, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    fn write(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }
}

impl<W: Write + Send> SessionObserver for PlainTextRenderer<W> {
    fn message_appended(&mut self, message: &Message) {
        self.print_message(message);
    }

    fn loading_changed(&mut self, is_loading: bool) {
        if is_loading {
            self.print_thinking();
        }
    }

    fn error_raised(&mut self, error: &str) {
        self.print_error(error);
    }
}

fn timestamp(at: OffsetDateTime) -> String {
    at.format(TIME_FORMAT)
        .unwrap_or_else(|_| format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second()))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::types::MessageId;

    fn message(role: Role, text: &str) -> Message {
        let at = datetime!(2024-05-06 07:08:09 UTC);
        Message::new(MessageId::new(at, 1), role, text, at)
    }

    fn rendered(message: &Message, use_color: bool) -> String {
        let mut renderer = PlainTextRenderer::with_writer(Vec::new(), use_color);
        renderer.print_message(message);
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn renderer_default_has_color() {
        let renderer = PlainTextRenderer::new();
        assert!(renderer.use_color);
    }

    #[test]
    fn renderer_without_color() {
        let renderer = PlainTextRenderer::with_color(false);
        assert!(!renderer.use_color);
    }

    #[test]
    fn plain_message() {
        let output = rendered(&message(Role::User, "Build a CRM"), false);
        assert_eq!(output, "[07:08:09] Developer\nBuild a CRM\n");
    }

    #[test]
    fn code_blocks_are_framed() {
        let output = rendered(
            &message(Role::Assistant, "Install:\n```sh\npip install x\n```\nDone."),
            false,
        );
        assert_eq!(
            output,
            "[07:08:09] Architect AI\nInstall:\n\n--- sh ---\npip install x\n---\n\nDone.\n"
        );
    }

    #[test]
    fn color_wraps_styles() {
        let output = rendered(&message(Role::Assistant, "```x=1```"), true);
        assert!(output.contains(&format!("{ANSI_CYAN}--- text ---{ANSI_RESET}")));
        assert!(output.contains(&format!("{ANSI_YELLOW}x=1{ANSI_RESET}\n")));
    }

    #[test]
    fn info_lines_are_unstyled() {
        let mut renderer = PlainTextRenderer::with_writer(Vec::new(), true);
        renderer.print_info("      Messages: 3");
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "      Messages: 3\n");
    }

    #[test]
    fn observer_prints_indicator_and_errors() {
        let mut renderer = PlainTextRenderer::with_writer(Vec::new(), false);
        renderer.loading_changed(true);
        renderer.loading_changed(false);
        renderer.error_raised("Transmission failed.");
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "ARCHITECT IS THINKING...\nERROR: Transmission failed.\n");
    }
}
