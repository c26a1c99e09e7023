use async_trait::async_trait;
use chat_relay::{
    Error, Result,
    llm::{Candidate, ChatProvider, Content, GenerateContentRequest, GenerateContentResponse},
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

/// Mock provider for testing. Scripted replies are served in order; once
/// they run out the mock echoes the latest user turn.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    pub replies: Arc<Mutex<VecDeque<std::result::Result<GenerateContentResponse, String>>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    pub delay: Option<Duration>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(create_text_response(text)));
        self
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn generate_content(
        &self,
        _model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let last_input = request
            .contents
            .last()
            .map(Content::text)
            .unwrap_or_default();
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.replies.lock().unwrap().pop_front();
        match scripted {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(Error::provider(message)),
            None => Ok(create_text_response(&format!("echo: {}", last_input))),
        }
    }
}

pub fn create_text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content::model(text)),
            finish_reason: Some("STOP".to_string()),
            index: Some(0),
        }],
        ..Default::default()
    }
}
