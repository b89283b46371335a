//! The remote conversation session.
//!
//! [`RemoteSessionClient`] owns the single [`RemoteSession`] handle for the lifetime of the
//! process.  The handle is created lazily by [`RemoteSessionClient::initialize`], which also
//! elicits the assistant's opening message, and every [`RemoteSessionClient::send`] extends the
//! history kept in the handle.  No call is ever retried.

use crate::error::{Error, Result};
use crate::observability::{
    SESSION_INITIALIZATIONS, SESSION_REUSED, SESSION_SEND_ERRORS, SESSION_SENDS,
};
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Model,
};

/// Synthetic first turn that asks the assistant to introduce itself.
pub const START_SIGNAL: &str = "SYSTEM_START_SIGNAL: Initialize the session.";

/// Greeting used when the assistant's opening reply is empty.
pub const GREETING_FALLBACK: &str = "Architect Online. System status: Unknown.";

/// Sampling temperature: coherent but not deterministic.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// The network boundary of a remote session.
///
/// [`crate::Gemini`] is the production implementation.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fails with a configuration error when no credential is available.
    fn check_credentials(&self) -> Result<()>;

    /// Performs one generation call.
    async fn generate_content(
        &self,
        model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

/// Everything fixed at session creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The model to talk to.
    pub model: Model,
    /// The behavioral prompt, forwarded verbatim.
    pub system_instruction: String,
    /// The sampling temperature.
    pub temperature: f32,
}

impl SessionConfig {
    /// Creates a config with the default temperature.
    pub fn new(model: Model, system_instruction: impl Into<String>) -> Self {
        Self {
            model,
            system_instruction: system_instruction.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// The remote session handle: the conversation as the remote API sees it.
#[derive(Debug, Clone)]
pub struct RemoteSession {
    model: Model,
    system_instruction: Content,
    generation_config: GenerationConfig,
    history: Vec<Content>,
    greeting: String,
}

impl RemoteSession {
    fn new(config: &SessionConfig) -> Self {
        Self {
            model: config.model.clone(),
            system_instruction: Content::instruction(config.system_instruction.clone()),
            generation_config: GenerationConfig::with_temperature(config.temperature),
            history: Vec::new(),
            greeting: String::new(),
        }
    }

    /// The model this session talks to.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The opening message produced at initialization.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Every completed turn, user and model alternating, starting with the start signal.
    ///
    /// A turn whose reply came back empty is not kept, so no model turn here is ever empty.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Sends `text` as the next user turn.
    ///
    /// The history only grows when the call succeeds with a non-empty reply.
    async fn send_message<T: ChatTransport + ?Sized>(
        &mut self,
        transport: &T,
        text: &str,
    ) -> Result<String> {
        let mut contents = self.history.clone();
        contents.push(Content::user(text));
        let request = GenerateContentRequest {
            system_instruction: Some(self.system_instruction.clone()),
            contents,
            generation_config: Some(self.generation_config.clone()),
        };

        SESSION_SENDS.click();
        let response = match transport.generate_content(&self.model, &request).await {
            Ok(response) => response,
            Err(err) => {
                SESSION_SEND_ERRORS.click();
                return Err(err);
            }
        };
        if let Some(reason) = response.block_reason() {
            tracing::warn!(reason, "prompt was blocked by the remote service");
        }
        let reply = response.text();
        if reply.is_empty() {
            tracing::debug!("empty reply; turn left out of the history");
            return Ok(reply);
        }

        self.history = request.contents;
        self.history.push(Content::model(reply.clone()));
        Ok(reply)
    }
}

/// Whether the remote session handle exists yet.
#[derive(Debug, Clone, Copy)]
pub enum HandleState<'a> {
    /// No handle; the next send will initialize first.
    NotInitialized,
    /// The handle is ready for use.
    Ready(&'a RemoteSession),
}

impl HandleState<'_> {
    /// Returns true if the handle exists.
    pub fn is_ready(&self) -> bool {
        matches!(self, HandleState::Ready(_))
    }
}

/// Owner of the single remote session.
pub struct RemoteSessionClient<T: ChatTransport> {
    transport: T,
    config: SessionConfig,
    handle: Option<RemoteSession>,
}

impl<T: ChatTransport> RemoteSessionClient<T> {
    /// Creates a client that has not yet contacted the remote service.
    pub fn new(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            config,
            handle: None,
        }
    }

    /// The configuration every new handle is created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reports whether a handle exists.
    pub fn state(&self) -> HandleState<'_> {
        match &self.handle {
            Some(handle) => HandleState::Ready(handle),
            None => HandleState::NotInitialized,
        }
    }

    /// Drops the handle; the next call re-initializes.
    pub fn reset(&mut self) {
        self.handle = None;
    }

    /// Creates the handle and returns the assistant's opening message.
    ///
    /// Calling this again without [`Self::reset`] reuses the existing handle and returns its
    /// greeting without contacting the remote service.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no credential is available and a remote error if the
    /// start signal fails.  In both cases no handle is kept.
    pub async fn initialize(&mut self) -> Result<String> {
        if let HandleState::Ready(handle) = self.state() {
            SESSION_REUSED.click();
            return Ok(handle.greeting().to_string());
        }

        self.transport.check_credentials()?;
        SESSION_INITIALIZATIONS.click();
        let mut session = RemoteSession::new(&self.config);
        let reply = session.send_message(&self.transport, START_SIGNAL).await?;
        session.greeting = if reply.is_empty() {
            session.history.push(Content::user(START_SIGNAL));
            session.history.push(Content::model(GREETING_FALLBACK));
            GREETING_FALLBACK.to_string()
        } else {
            reply
        };
        let greeting = session.greeting.clone();
        self.handle = Some(session);
        Ok(greeting)
    }

    /// Sends `text` and returns the assistant's reply, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank text, the initialization error if the handle had
    /// to be created and could not be, a session error if initialization left no handle, and
    /// a remote error if the call fails.
    pub async fn send(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::validation(
                "message text must not be empty",
                Some("text".to_string()),
            ));
        }
        if !self.state().is_ready() {
            let greeting = self.initialize().await?;
            tracing::debug!(greeting_len = greeting.len(), "session initialized on first send");
        }
        let Some(handle) = self.handle.as_mut() else {
            return Err(Error::session("failed to initialize chat session"));
        };
        handle.send_message(&self.transport, text).await
    }
}
