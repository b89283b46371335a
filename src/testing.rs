use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::remote::ChatTransport;
use crate::types::{GenerateContentRequest, GenerateContentResponse, Model};

/// A transport that answers from a script and records every request it sees.
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<GenerateContentResponse>>>,
    requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    has_credentials: bool,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
            has_credentials: true,
        }
    }

    pub(crate) fn reply(self, text: &str) -> Self {
        self.push(Ok(GenerateContentResponse::from_text(text)))
    }

    pub(crate) fn fail(self, err: Error) -> Self {
        self.push(Err(err))
    }

    pub(crate) fn without_credentials(mut self) -> Self {
        self.has_credentials = false;
        self
    }

    /// Shared view of the recorded requests; stays valid after the transport is moved.
    pub(crate) fn requests(&self) -> Arc<Mutex<Vec<GenerateContentRequest>>> {
        Arc::clone(&self.requests)
    }

    fn push(self, reply: Result<GenerateContentResponse>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

#[async_trait::async_trait]
impl ChatTransport for ScriptedTransport {
    fn check_credentials(&self) -> Result<()> {
        if self.has_credentials {
            Ok(())
        } else {
            Err(Error::configuration("no credentials in script"))
        }
    }

    async fn generate_content(
        &self,
        _model: &Model,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::connection("script exhausted", None)))
    }
}
