use crate::{services::llm::models::errors::InferenceClientError, ToolExecutionError};

/// Errors that can occur while running an [`Agent`](crate::Agent).
#[derive(Debug)]
pub enum AgentError {
    /// Failure inside the underlying model client.
    ModelClient(InferenceClientError),
    /// A tool execution error.
    Tool(ToolExecutionError),
    /// A runtime failure (e.g. missing data, unexpected state).
    Runtime(String),
}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentError::ModelClient(e) => write!(f, "Model client error: {e}"),
            AgentError::Tool(e) => write!(f, "Tool error: {e}"),
            AgentError::Runtime(s) => write!(f, "Runtime error: {s}"),
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::ModelClient(e) => Some(e),
            AgentError::Tool(e) => Some(e),
            AgentError::Runtime(_) => None,
        }
    }
}

impl From<InferenceClientError> for AgentError {
    fn from(err: InferenceClientError) -> Self {
        AgentError::ModelClient(err)
    }
}

impl From<ToolExecutionError> for AgentError {
    fn from(err: ToolExecutionError) -> Self {
        AgentError::Tool(err)
    }
}

/// Errors that can occur while building an [`Agent`](crate::Agent).
#[derive(Debug)]
pub enum AgentBuildError {
    /// Required role was not set on the builder.
    RoleNotSet,
    /// Required model was not set on the builder.
    ModelNotSet,
    /// Failure initializing the underlying model client.
    ModelClient(InferenceClientError),
}

impl std::fmt::Display for AgentBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentBuildError::RoleNotSet => write!(f, "Agent role not set."),
            AgentBuildError::ModelNotSet => write!(f, "Model not set."),
            AgentBuildError::ModelClient(e) => write!(f, "Model client error: {e}"),
        }
    }
}

impl std::error::Error for AgentBuildError {}

impl From<InferenceClientError> for AgentBuildError {
    fn from(err: InferenceClientError) -> Self {
        AgentBuildError::ModelClient(err)
    }
}
