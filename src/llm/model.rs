use super::{ChatProvider, ChatSession, Content, GenerationConfig};
use crate::config::ProviderConfig;
use std::sync::Arc;

/// A provider-backed model with fixed generation settings and system
/// instruction. Cheap to clone.
#[derive(Clone)]
pub struct GenerativeModel {
    provider: Arc<dyn ChatProvider>,
    name: String,
    generation_config: GenerationConfig,
    system_instruction: Option<Content>,
}

impl GenerativeModel {
    pub fn new(provider: Arc<dyn ChatProvider>, config: &ProviderConfig) -> Self {
        let system_instruction = if config.system_instruction.trim().is_empty() {
            None
        } else {
            Some(Content::system(config.system_instruction.clone()))
        };

        Self {
            provider,
            name: config.model.clone(),
            generation_config: GenerationConfig::from(&config.generation),
            system_instruction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation_config
    }

    pub fn system_instruction(&self) -> Option<&Content> {
        self.system_instruction.as_ref()
    }

    pub(crate) fn provider(&self) -> &dyn ChatProvider {
        self.provider.as_ref()
    }

    pub fn start_chat(&self) -> ChatSession {
        ChatSession::new(self.clone())
    }
}
