mod errors;
mod tool;
mod tool_builder;

pub use self::{
    errors::{ToolBuildError, ToolExecutionError},
    tool::{AsyncToolFn, Tool, ToolParameters, ToolProperty},
    tool_builder::ToolBuilder,
};
