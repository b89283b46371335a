//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved configuration that
//! the binary builds its client, session and renderer from.

use std::fs;
use std::path::PathBuf;

use arrrg_derive::CommandLine;

use crate::error::{Error, Result};
use crate::remote::{DEFAULT_TEMPERATURE, SessionConfig};
use crate::types::Model;

/// The behavioral prompt shipped with the application.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = include_str!("system_instruction.md");

/// Where diagnostics go unless `--log-file` says otherwise.
pub const DEFAULT_LOG_FILE: &str = "architect.log";

/// Command-line arguments for the architect-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-3-pro-preview)", "MODEL")]
    pub model: Option<String>,

    /// File holding a replacement system instruction.
    #[arrrg(optional, "Read the system instruction from FILE", "FILE")]
    pub system_file: Option<String>,

    /// Override for the API base URL.
    #[arrrg(optional, "API base URL (default: Gemini v1beta)", "URL")]
    pub base_url: Option<String>,

    /// Diagnostic log destination.
    #[arrrg(optional, "Write diagnostics to FILE (default: architect.log)", "FILE")]
    pub log_file: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// The system instruction forwarded when the session is created.
    pub system_instruction: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// API base URL; `None` uses the public endpoint.
    pub base_url: Option<String>,

    /// Where diagnostics are written.
    pub log_file: PathBuf,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-3-pro-preview
    /// - System instruction: the bundled Architect prompt
    /// - Temperature: 0.7
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::default(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            use_color: true,
            base_url: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Resolves command-line arguments, reading the system instruction file if one was given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the system instruction file cannot be read or is
    /// empty.
    pub fn from_args(args: ChatArgs) -> Result<Self> {
        let mut config = ChatConfig::new();
        if let Some(model) = args.model {
            let model = model.parse::<Model>().unwrap_or(Model::Custom(model));
            config = config.with_model(model);
        }
        if let Some(path) = args.system_file {
            let instruction = fs::read_to_string(&path).map_err(|err| {
                Error::configuration(format!("cannot read system instruction {path}: {err}"))
            })?;
            if instruction.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "system instruction {path} is empty"
                )));
            }
            config = config.with_system_instruction(instruction);
        }
        if let Some(base_url) = args.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(log_file) = args.log_file {
            config = config.with_log_file(PathBuf::from(log_file));
        }
        if args.no_color {
            config = config.without_color();
        }
        Ok(config)
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the diagnostic log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// The remote session configuration derived from this config.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            model: self.model.clone(),
            system_instruction: self.system_instruction.clone(),
            temperature: self.temperature,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.model, Model::Known(KnownModel::Gemini3ProPreview));
        assert_eq!(config.temperature, 0.7);
        assert!(config.use_color);
        assert!(config.base_url.is_none());
        assert_eq!(config.log_file, PathBuf::from("architect.log"));
        assert!(config.system_instruction.starts_with("### ROLE & OBJECTIVE"));
    }

    #[test]
    fn bundled_instruction_describes_commands() {
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("Save State"));
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("Собери проект"));
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("Textbook"));
        assert!(DEFAULT_SYSTEM_INSTRUCTION.contains("```xml"));
    }

    #[test]
    fn config_from_args_defaults() {
        let config = ChatConfig::from_args(ChatArgs::default()).unwrap();
        assert_eq!(config, ChatConfig::new());
    }

    #[test]
    fn config_from_args_custom() {
        let path = std::env::temp_dir().join(format!(
            "architect-config-test-{}.md",
            std::process::id()
        ));
        fs::write(&path, "Be brief.").unwrap();
        let args = ChatArgs {
            model: Some("gemini-2.5-flash".to_string()),
            system_file: Some(path.display().to_string()),
            base_url: Some("http://localhost:8080/v1beta".to_string()),
            log_file: Some("/tmp/chat.log".to_string()),
            no_color: true,
        };
        let config = ChatConfig::from_args(args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.model, Model::Known(KnownModel::Gemini25Flash));
        assert_eq!(config.system_instruction, "Be brief.");
        assert_eq!(
            config.base_url.as_deref(),
            Some("http://localhost:8080/v1beta")
        );
        assert_eq!(config.log_file, PathBuf::from("/tmp/chat.log"));
        assert!(!config.use_color);
    }

    #[test]
    fn missing_system_file_is_configuration_error() {
        let args = ChatArgs {
            system_file: Some("/nonexistent/architect/prompt.md".to_string()),
            ..ChatArgs::default()
        };
        let err = ChatConfig::from_args(args).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_model(Model::Custom("tuned-model".to_string()))
            .with_system_instruction("Test prompt")
            .with_temperature(0.25)
            .without_color()
            .with_base_url("http://localhost:1234/")
            .with_log_file(PathBuf::from("debug.log"));

        assert_eq!(config.model, Model::Custom("tuned-model".to_string()));
        assert_eq!(config.system_instruction, "Test prompt");
        assert_eq!(config.temperature, 0.25);
        assert!(!config.use_color);

        let session = config.session_config();
        assert_eq!(session.model, config.model);
        assert_eq!(session.system_instruction, "Test prompt");
        assert_eq!(session.temperature, 0.25);
    }
}
