// Public modules
pub mod command;
pub mod content;
pub mod generate_content;
pub mod message;
pub mod model;
pub mod session_state;

// Re-exports
pub use command::BotCommand;
pub use content::{Content, ContentRole, Part};
pub use generate_content::{
    Candidate, GenerateContentRequest, GenerateContentResponse, GenerationConfig, PromptFeedback,
    UsageMetadata,
};
pub use message::{Message, MessageId, Role};
pub use model::{KnownModel, Model};
pub use session_state::SessionState;
