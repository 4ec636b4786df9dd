use std::fmt;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::services::llm::models::{
    chat::{ChatRequest, ChatResponse},
    errors::InferenceClientError,
};
use crate::ClientConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Adapter for a local Ollama endpoint. Mostly useful for running the
/// pipeline against a local model without any hosted credential.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(cfg: ClientConfig) -> Result<Self, InferenceClientError> {
        Ok(Self {
            client: Client::new(),
            base_url: cfg.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()),
        })
    }

    pub async fn chat(&self, mut req: ChatRequest) -> Result<ChatResponse, InferenceClientError> {
        // Single-shot responses only; token streaming is not used here.
        req.stream = Some(false);
        self.post("/api/chat", &req).await
    }

    async fn post<T, R>(&self, endpoint: &str, request_body: &T) -> Result<R, InferenceClientError>
    where
        T: serde::Serialize + fmt::Debug,
        R: DeserializeOwned + fmt::Debug,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "sending Ollama request");

        let response = self
            .client
            .post(&url)
            .json(request_body)
            .send()
            .await
            .map_err(|e| InferenceClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".into());
            error!(%status, body = %error_text, "Ollama request failed");
            return Err(InferenceClientError::Api(format!(
                "Ollama request failed: {status} - {error_text}"
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| InferenceClientError::Api(format!("Failed to read response text: {e}")))?;

        serde_json::from_str::<R>(&response_text).map_err(|e| {
            error!(%e, raw = %response_text, "deserialization error");
            InferenceClientError::Serialization(format!(
                "Error decoding response body: {e}. Raw JSON was: '{response_text}'"
            ))
        })
    }
}
