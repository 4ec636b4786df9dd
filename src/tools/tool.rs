use std::{collections::HashMap, fmt, future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ToolExecutionError;

/// Signature for an asynchronous tool executor function.
///
/// Accepts a JSON [`Value`] of arguments and produces a `String` result
/// or a [`ToolExecutionError`] if execution fails.
pub type AsyncToolFn = Arc<
    dyn Fn(Value) -> Pin<Box<dyn Future<Output = Result<String, ToolExecutionError>> + Send>>
        + Send
        + Sync,
>;

/// A callable capability bound to an agent.
///
/// In this crate tools are enrichment helpers (currently web search):
/// task assembly executes them up front and injects their textual output
/// into the stage prompt. The model itself never drives tool calls.
#[derive(Clone)]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// JSON-schema-like description of the accepted arguments.
    pub parameters: ToolParameters,
    pub executor: AsyncToolFn,
}

impl Tool {
    /// Run the tool with the given JSON arguments.
    pub async fn execute(&self, args: Value) -> Result<String, ToolExecutionError> {
        (self.executor)(args).await
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("executor", &"<async_fn>")
            .finish()
    }
}

/// Argument schema for a [`Tool`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ToolParameters {
    pub properties: HashMap<String, ToolProperty>,
    pub required: Vec<String>,
}

/// A single named argument within [`ToolParameters`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ToolProperty {
    #[serde(rename = "type")]
    pub property_type: String,
    pub description: String,
}
