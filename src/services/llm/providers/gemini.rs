use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::services::llm::models::{
    base::{Message, Role},
    chat::{ChatRequest, ChatResponse},
    errors::InferenceClientError,
};
use crate::ClientConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Adapter for Google's Generative Language REST API (`generateContent`).
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(cfg: ClientConfig) -> Result<Self, InferenceClientError> {
        let api_key = match cfg.api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(InferenceClientError::Config("Gemini requires api_key".into())),
        };
        Ok(Self {
            client: Client::new(),
            base_url: cfg.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            api_key,
        })
    }

    pub async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, InferenceClientError> {
        let model = req.model.clone();
        let body = to_generate_request(&req);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        );

        debug!(%model, messages = req.messages.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| InferenceClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".into());
            error!(%status, body = %error_text, "Gemini request failed");
            return Err(InferenceClientError::Api(format!(
                "Gemini request failed: {status} - {error_text}"
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| InferenceClientError::Api(format!("Failed to read response text: {e}")))?;

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(%e, raw = %response_text, "deserialization error");
                InferenceClientError::Serialization(format!(
                    "Error decoding response body: {e}. Raw JSON was: '{response_text}'"
                ))
            })?;

        from_generate_response(model, parsed)
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Debug, Clone)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<i32>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

/// Translate the neutral [`ChatRequest`] into Gemini's wire format.
///
/// System messages are hoisted into `systemInstruction`; user messages map
/// to role `user` and assistant messages to role `model`.
fn to_generate_request(req: &ChatRequest) -> GenerateContentRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for message in &req.messages {
        let text = message.content.clone().unwrap_or_default();
        match message.role {
            Role::System => system_parts.push(Part { text }),
            Role::User => contents.push(Content {
                role: Some("user".into()),
                parts: vec![Part { text }],
            }),
            Role::Assistant => contents.push(Content {
                role: Some("model".into()),
                parts: vec![Part { text }],
            }),
        }
    }

    let system_instruction = if system_parts.is_empty() {
        None
    } else {
        Some(SystemInstruction { parts: system_parts })
    };

    let generation_config = req.options.as_ref().and_then(|opts| {
        if opts.is_empty() {
            None
        } else {
            Some(GenerationConfig {
                temperature: opts.temperature,
                top_p: opts.top_p,
                max_output_tokens: opts.num_predict,
            })
        }
    });

    GenerateContentRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

fn from_generate_response(
    model: String,
    resp: GenerateContentResponse,
) -> Result<ChatResponse, InferenceClientError> {
    let Some(candidate) = resp.candidates.into_iter().next() else {
        return Err(InferenceClientError::Api(
            "Gemini returned no candidates".into(),
        ));
    };

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let (prompt_eval_count, eval_count) = match resp.usage_metadata {
        Some(u) => (u.prompt_token_count, u.candidates_token_count),
        None => (None, None),
    };

    Ok(ChatResponse {
        model,
        message: Message::assistant(text),
        done: true,
        done_reason: candidate.finish_reason,
        prompt_eval_count,
        eval_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::llm::models::base::InferenceOptions;

    fn request_with(messages: Vec<Message>) -> ChatRequest {
        ChatRequest {
            model: "gemini-pro".into(),
            messages,
            stream: Some(false),
            options: Some(InferenceOptions {
                temperature: Some(0.1),
                top_p: None,
                num_predict: None,
            }),
        }
    }

    #[test]
    fn system_messages_become_system_instruction() {
        let req = request_with(vec![
            Message::system("You are a travel planner."),
            Message::user("Plan a trip."),
        ]);
        let wire = to_generate_request(&req);

        let instruction = wire.system_instruction.expect("system instruction");
        assert_eq!(instruction.parts[0].text, "You are a travel planner.");
        assert_eq!(wire.contents.len(), 1);
        assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn assistant_messages_map_to_model_role() {
        let req = request_with(vec![
            Message::user("hi"),
            Message::assistant("hello"),
        ]);
        let wire = to_generate_request(&req);
        assert_eq!(wire.contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn generation_config_carries_temperature() {
        let wire = to_generate_request(&request_with(vec![Message::user("hi")]));
        let config = wire.generation_config.expect("generation config");
        assert_eq!(config.temperature, Some(0.1));
    }

    #[test]
    fn response_parses_candidate_text() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Take the train."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let resp = from_generate_response("gemini-pro".into(), parsed).unwrap();
        assert_eq!(resp.message.content.as_deref(), Some("Take the train."));
        assert_eq!(resp.eval_count, Some(4));
        assert_eq!(resp.done_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn empty_candidates_is_an_api_error() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let err = from_generate_response("gemini-pro".into(), parsed).unwrap_err();
        assert!(matches!(err, InferenceClientError::Api(_)));
    }

    #[test]
    fn missing_api_key_fails_construction() {
        let err = GeminiClient::new(ClientConfig::default()).unwrap_err();
        assert!(matches!(err, InferenceClientError::Config(_)));
    }
}
