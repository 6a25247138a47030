use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ContentRequest, GenerationClient};

#[derive(Clone)]
enum Reply {
    Text(String),
    Upstream { message: String, status: Option<u16> },
}

/// Records every call and answers with a fixed reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    calls: Arc<Mutex<Vec<ContentRequest>>>,
    reply: Reply,
}

impl FakeGenerationClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { calls: Arc::new(Mutex::new(vec![])), reply: Reply::Text(text.into()) }
    }

    pub fn failing(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(vec![])),
            reply: Reply::Upstream { message: message.into(), status },
        }
    }

    pub fn calls(&self) -> Vec<ContentRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate_content(&self, request: &ContentRequest) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Upstream { message, status } => Err(AppError::upstream(message.clone(), *status)),
        }
    }
}
