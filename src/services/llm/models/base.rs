use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message exchanged with a model.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Message {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: String) -> Self {
        Self { role, content: Some(content) }
    }

    pub fn system<T: Into<String>>(content: T) -> Self { Self::new(Role::System, content.into()) }
    pub fn user<T: Into<String>>(content: T) -> Self { Self::new(Role::User, content.into()) }
    pub fn assistant<T: Into<String>>(content: T) -> Self { Self::new(Role::Assistant, content.into()) }
}

/// Sampling options forwarded to the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InferenceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

impl InferenceOptions {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.num_predict.is_none()
    }
}
