use super::{Content, GenerateContentRequest, GenerativeModel};
use crate::{Error, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Conversation with a model. The history lives in memory and is sent in
/// full on every turn.
pub struct ChatSession {
    id: Uuid,
    model: GenerativeModel,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(model: GenerativeModel) -> Self {
        let id = Uuid::new_v4();
        info!("Started chat session {} on model {}", id, model.name());

        Self {
            id,
            model,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Sends `text` as the next user turn and returns the model's reply.
    ///
    /// The user turn stays in the history even when the call fails; the
    /// reply is recorded only on success. Blank text is refused and never
    /// enters the history.
    pub async fn send_message(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::invalid_input("message text must not be empty"));
        }

        self.history.push(Content::user(text));

        let request = GenerateContentRequest {
            contents: self.history.clone(),
            system_instruction: self.model.system_instruction().cloned(),
            generation_config: Some(self.model.generation_config().clone()),
        };

        let response = self
            .model
            .provider()
            .generate_content(self.model.name(), request)
            .await?;
        let reply = response.text()?;

        self.history.push(Content::model(reply.clone()));
        debug!(
            "Session {} now holds {} turns",
            self.id,
            self.history.len()
        );

        Ok(reply)
    }
}
