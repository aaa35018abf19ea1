//! Scripted client used by tests in place of a live Ollama server.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::models::ChatRequest;

use super::{ChatClient, CompletionError};

#[derive(Debug, Clone, Default)]
pub struct DummyClient {
    models: Vec<String>,
    replies: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl DummyClient {
    pub fn with_replies(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Default::default()
        }
    }

    pub fn with_models(models: Vec<&str>) -> Self {
        Self {
            models: models.into_iter().map(String::from).collect(),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatClient for DummyClient {
    async fn list_models(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.models.clone())
    }

    async fn complete_message(&self, request: ChatRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Transport("no scripted reply".to_string())))
    }
}
