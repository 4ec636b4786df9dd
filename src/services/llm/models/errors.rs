/// Errors produced by the inference client and its provider adapters.
#[derive(Debug)]
pub enum InferenceClientError {
    /// Transport-level failure (connection, timeout, TLS).
    Request(String),
    /// The provider answered with a non-success status or bad payload.
    Api(String),
    /// The response body could not be decoded.
    Serialization(String),
    /// The client configuration is incomplete or invalid.
    Config(String),
}

impl std::fmt::Display for InferenceClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferenceClientError::Request(s) => write!(f, "Request Error: {s}"),
            InferenceClientError::Api(s) => write!(f, "API Error: {s}"),
            InferenceClientError::Serialization(s) => write!(f, "Serialization Error: {s}"),
            InferenceClientError::Config(s) => write!(f, "Config Error: {s}"),
        }
    }
}

impl std::error::Error for InferenceClientError {}

impl From<reqwest::Error> for InferenceClientError {
    fn from(err: reqwest::Error) -> Self {
        InferenceClientError::Request(err.to_string())
    }
}
