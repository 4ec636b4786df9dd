use crate::services::llm::client::Provider;

/// Connection settings for the inference client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub provider: Provider,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}
