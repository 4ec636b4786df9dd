/// Errors that can occur while executing an agent tool.
#[derive(Debug)]
pub enum ToolExecutionError {
    /// The provided arguments were missing or had the wrong shape.
    BadArguments(String),
    /// The tool itself failed while running.
    ExecutionFailed(String),
}

impl std::fmt::Display for ToolExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolExecutionError::BadArguments(s) => write!(f, "bad tool arguments: {s}"),
            ToolExecutionError::ExecutionFailed(s) => write!(f, "tool execution failed: {s}"),
        }
    }
}

impl std::error::Error for ToolExecutionError {}

/// Errors raised when assembling a [`Tool`](super::Tool) through the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolBuildError {
    NameNotSet,
    DescriptionNotSet,
    ExecutorNotSet,
}

impl std::fmt::Display for ToolBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolBuildError::NameNotSet => write!(f, "tool name is required"),
            ToolBuildError::DescriptionNotSet => write!(f, "tool description is required"),
            ToolBuildError::ExecutorNotSet => write!(f, "tool executor is required"),
        }
    }
}

impl std::error::Error for ToolBuildError {}
