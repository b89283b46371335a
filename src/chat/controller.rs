//! The conversation state machine.
//!
//! [`Controller`] is the only writer of [`SessionState`] and the only component that talks to
//! both the remote session and the displayed conversation.  Remote failures stop here: they
//! are logged with their detail and replaced by a fixed, user-facing message.

use crate::error::{Error, ErrorKind};
use crate::observability::{CONTROLLER_FAILURES, CONTROLLER_REJECTED, CONTROLLER_SUBMISSIONS};
use crate::remote::{ChatTransport, RemoteSessionClient};
use crate::types::{BotCommand, Message, MessageId, Role, SessionState, message};

/// Shown when the session could not be started.
pub const CONNECTION_FAILED: &str = "Failed to connect to Architect Core. Verify network/API Key.";

/// Shown when a message could not be delivered.
pub const TRANSMISSION_FAILED: &str = "Transmission failed.";

/// Receives every visible change to the session state, in order.
///
/// All methods default to doing nothing.
pub trait SessionObserver: Send {
    /// Called after `message` was appended to the thread.
    fn message_appended(&mut self, message: &Message) {
        _ = message;
    }

    /// Called whenever the loading flag changes.
    fn loading_changed(&mut self, is_loading: bool) {
        _ = is_loading;
    }

    /// Called when the error banner is set.
    fn error_raised(&mut self, error: &str) {
        _ = error;
    }
}

/// What became of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text, or a request already in flight.  Nothing changed.
    Rejected,
    /// The reply was appended.
    Delivered,
    /// The remote call failed; the error banner is set.
    Failed(ErrorKind),
}

/// Drives a conversation over one remote session.
pub struct Controller<T: ChatTransport> {
    client: RemoteSessionClient<T>,
    state: SessionState,
    input: String,
    next_sequence: u64,
    observer: Option<Box<dyn SessionObserver>>,
    started: bool,
}

impl<T: ChatTransport> Controller<T> {
    /// Creates a controller in the initial, loading state.
    pub fn new(client: RemoteSessionClient<T>) -> Self {
        Self {
            client,
            state: SessionState::new(),
            input: String::new(),
            next_sequence: 0,
            observer: None,
            started: false,
        }
    }

    /// Installs the observer that is told about every state change.
    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = Some(observer);
    }

    /// The displayed conversation.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The remote session client.
    pub fn client(&self) -> &RemoteSessionClient<T> {
        &self.client
    }

    /// Starts the session and appends the assistant's greeting.
    ///
    /// Only the first call does anything.  A failure sets [`CONNECTION_FAILED`] and is not
    /// retried; the next submission will try to initialize again.
    pub async fn startup(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        match self.client.initialize().await {
            Ok(greeting) => {
                self.append(Role::Assistant, greeting);
                self.set_loading(false);
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = ?err.kind(), "session startup failed");
                CONTROLLER_FAILURES.click();
                self.set_loading(false);
                self.raise(CONNECTION_FAILED);
            }
        }
    }

    /// Sends `text` to the assistant and appends the exchange.
    ///
    /// The text is trimmed before it is recorded and sent.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() || self.state.is_loading() {
            CONTROLLER_REJECTED.click();
            return SubmitOutcome::Rejected;
        }
        CONTROLLER_SUBMISSIONS.click();
        self.begin_submission(text);
        let result = self.client.send(text).await;
        self.finish_submission(result)
    }

    fn begin_submission(&mut self, text: &str) {
        self.append(Role::User, text.to_string());
        self.set_loading(true);
        self.input.clear();
    }

    fn finish_submission(&mut self, result: Result<String, Error>) -> SubmitOutcome {
        match result {
            Ok(reply) => {
                self.append(Role::Assistant, reply);
                self.state.clear_error();
                self.set_loading(false);
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(error = %err, kind = ?err.kind(), "message submission failed");
                CONTROLLER_FAILURES.click();
                self.set_loading(false);
                self.raise(TRANSMISSION_FAILED);
                SubmitOutcome::Failed(err.kind())
            }
        }
    }

    /// Replaces the pending input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The pending input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submits the pending input.
    pub async fn submit_input(&mut self) -> SubmitOutcome {
        let text = self.input.clone();
        self.submit(&text).await
    }

    /// Appends the fast-track phrase to the pending input, separated by a single space.
    pub fn append_fast_track(&mut self) {
        if !self.input.is_empty() && !self.input.ends_with(' ') {
            self.input.push(' ');
        }
        self.input.push_str(BotCommand::FastTrack.payload());
    }

    /// Submits `command`'s payload verbatim.
    pub async fn send_command(&mut self, command: BotCommand) -> SubmitOutcome {
        self.submit(command.payload()).await
    }

    fn append(&mut self, role: Role, text: String) {
        let created_at = message::now();
        let id = MessageId::new(created_at, self.next_sequence);
        self.next_sequence += 1;
        self.state.push(Message::new(id, role, text, created_at));
        if let (Some(observer), Some(message)) = (self.observer.as_mut(), self.state.last_message())
        {
            observer.message_appended(message);
        }
    }

    fn set_loading(&mut self, is_loading: bool) {
        if self.state.is_loading() == is_loading {
            return;
        }
        self.state.set_loading(is_loading);
        if let Some(observer) = self.observer.as_mut() {
            observer.loading_changed(is_loading);
        }
    }

    fn raise(&mut self, error: &str) {
        self.state.set_error(error);
        if let Some(observer) = self.observer.as_mut() {
            observer.error_raised(error);
        }
    }
}
