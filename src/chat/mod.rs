//! Chat application module for conversations with the Architect.
//!
//! # Architecture
//!
//! - [`controller`]: the conversation state machine over [`crate::types::SessionState`]
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: slash command parsing for the REPL

mod commands;
mod config;
mod controller;

pub use crate::render::PlainTextRenderer;
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_LOG_FILE, DEFAULT_SYSTEM_INSTRUCTION};
pub use controller::{
    CONNECTION_FAILED, Controller, SessionObserver, SubmitOutcome, TRANSMISSION_FAILED,
};
