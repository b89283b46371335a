//! A terminal chat client for the Architect mentor persona on Gemini.
//!
//! The library is layered leaves first: [`types`] holds the conversation model and wire
//! types, [`client`] speaks HTTP to the `generateContent` endpoint, [`remote`] owns the one
//! remote session, [`markup`] splits replies into prose and code, and
//! [`chat::Controller`] drives the displayed conversation.  The `architect-chat` binary is
//! a thin REPL over these.

// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod markup;
pub mod observability;
pub mod remote;
pub mod render;
pub mod types;

#[cfg(test)]
mod testing;

// Re-exports
pub use client::Gemini;
pub use error::{Error, ErrorKind, Result};
pub use observability::register_biometrics;
pub use remote::{ChatTransport, HandleState, RemoteSession, RemoteSessionClient, SessionConfig};
pub use types::*;
