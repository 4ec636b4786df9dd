use std::sync::Arc;

use crate::services::llm::models::{
    chat::{ChatRequest, ChatResponse},
    errors::InferenceClientError,
};
use crate::ClientConfig;

use super::providers::{gemini::GeminiClient, ollama::OllamaClient};

/// Backend selection for the inference client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Gemini,
    Ollama,
}

impl Provider {
    /// Whether the provider refuses to operate without an API key.
    pub fn requires_api_key(&self) -> bool {
        match self {
            Provider::Gemini => true,
            Provider::Ollama => false,
        }
    }
}

#[derive(Debug, Clone)]
enum ClientInner {
    Gemini(GeminiClient),
    Ollama(OllamaClient),
}

/// Provider-agnostic chat client. Cheap to clone.
#[derive(Clone, Debug)]
pub struct InferenceClient {
    config: ClientConfig,
    inner: Arc<ClientInner>,
}

impl InferenceClient {
    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, InferenceClientError> {
        match &*self.inner {
            ClientInner::Gemini(c) => c.chat(req).await,
            ClientInner::Ollama(c) => c.chat(req).await,
        }
    }
}

impl TryFrom<ClientConfig> for InferenceClient {
    type Error = InferenceClientError;

    fn try_from(cfg: ClientConfig) -> Result<Self, Self::Error> {
        let config = cfg.clone();
        let inner = match cfg.provider {
            Provider::Gemini => ClientInner::Gemini(GeminiClient::new(cfg)?),
            Provider::Ollama => ClientInner::Ollama(OllamaClient::new(cfg)?),
        };
        Ok(Self {
            config,
            inner: Arc::new(inner),
        })
    }
}
