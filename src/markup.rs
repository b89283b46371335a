//! Splitting assistant replies into prose and fenced code.
//!
//! [`blocks`] scans the text once, left to right, and yields [`Block`]s that borrow from it.
//! Nothing is cached and the input is never modified, so scanning the same text again yields
//! the same blocks.
//!
//! ```rust
//! use architect::markup::{Block, render};
//!
//! let blocks = render("Run this:\n```sh\nmake\n```");
//! assert_eq!(
//!     blocks,
//!     vec![
//!         Block::Paragraph { content: "Run this:\n" },
//!         Block::Code { language: "sh", content: "make\n" },
//!     ]
//! );
//! ```

/// The fence marker.
const FENCE: &str = "```";

/// Language reported for fenced content without a usable language tag.
pub const TEXT_LANGUAGE: &str = "text";

/// One displayable piece of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Prose between (or instead of) code fences, verbatim.
    Paragraph {
        /// The text of the paragraph.
        content: &'a str,
    },
    /// The inside of a fenced region.
    Code {
        /// The language tag, or [`TEXT_LANGUAGE`].
        language: &'a str,
        /// The fenced text with the delimiters and language line removed.
        content: &'a str,
    },
}

impl<'a> Block<'a> {
    /// The text carried by this block.
    pub fn content(&self) -> &'a str {
        match *self {
            Block::Paragraph { content } | Block::Code { content, .. } => content,
        }
    }

    /// The language of a code block; `None` for paragraphs.
    pub fn language(&self) -> Option<&'a str> {
        match *self {
            Block::Paragraph { .. } => None,
            Block::Code { language, .. } => Some(language),
        }
    }

    /// Returns true for code blocks.
    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code { .. })
    }
}

/// Iterator over the [`Block`]s of a text.  See [`blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(open) = self.rest.find(FENCE) else {
            return Some(self.take_literal());
        };
        let body_start = open + FENCE.len();
        let Some(close) = self.rest[body_start..].find(FENCE) else {
            // An opening fence that is never closed is plain text, marker and all.
            return Some(self.take_literal());
        };
        if open > 0 {
            let content = &self.rest[..open];
            self.rest = &self.rest[open..];
            return Some(Block::Paragraph { content });
        }
        let fenced = &self.rest[body_start..body_start + close];
        self.rest = &self.rest[body_start + close + FENCE.len()..];
        Some(code_block(fenced))
    }
}

impl<'a> Blocks<'a> {
    fn take_literal(&mut self) -> Block<'a> {
        let content = self.rest;
        self.rest = "";
        Block::Paragraph { content }
    }
}

fn code_block(fenced: &str) -> Block<'_> {
    if let Some((first_line, body)) = fenced.split_once('\n') {
        let tag = first_line.trim();
        if !tag.is_empty() && !tag.contains(char::is_whitespace) {
            return Block::Code {
                language: tag,
                content: body,
            };
        }
    }
    Block::Code {
        language: TEXT_LANGUAGE,
        content: fenced,
    }
}

/// Lazily splits `text` into blocks.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks { rest: text }
}

/// Splits `text` into blocks, in order.
///
/// Empty text yields no blocks; text without fences yields a single paragraph equal to it.
pub fn render(text: &str) -> Vec<Block<'_>> {
    blocks(text).collect()
}
