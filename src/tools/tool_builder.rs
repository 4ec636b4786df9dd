use std::collections::HashMap;

use super::{
    errors::ToolBuildError,
    tool::{AsyncToolFn, Tool, ToolParameters, ToolProperty},
};

/// Builder for [`Tool`].
#[derive(Default)]
pub struct ToolBuilder {
    name: Option<String>,
    description: Option<String>,
    properties: HashMap<String, ToolProperty>,
    required: Vec<String>,
    executor: Option<AsyncToolFn>,
}

impl std::fmt::Debug for ToolBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolBuilder")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("properties", &self.properties)
            .field("required", &self.required)
            .field("executor", &self.executor.as_ref().map(|_| "<async_fn>"))
            .finish()
    }
}

impl ToolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the tool as shown to the agent. (Required)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Human-readable description of what the tool does. (Required)
    pub fn description<T>(mut self, description: T) -> Self
    where
        T: Into<String>,
    {
        self.description = Some(description.into());
        self
    }

    /// Adds an optional argument to the tool schema.
    pub fn add_property(
        mut self,
        name: impl Into<String>,
        property_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.properties.insert(
            name.into(),
            ToolProperty {
                property_type: property_type.into(),
                description: description.into(),
            },
        );
        self
    }

    /// Adds an argument and marks it as required.
    pub fn add_required_property(
        mut self,
        name: impl Into<String>,
        property_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.add_property(name, property_type, description)
    }

    /// Sets the asynchronous executor function. (Required)
    pub fn executor(mut self, exec: AsyncToolFn) -> Self {
        self.executor = Some(exec);
        self
    }

    /// Consumes the builder and attempts to create a [`Tool`].
    pub fn build(self) -> Result<Tool, ToolBuildError> {
        let name = self.name.ok_or(ToolBuildError::NameNotSet)?;
        let description = self.description.ok_or(ToolBuildError::DescriptionNotSet)?;
        let executor = self.executor.ok_or(ToolBuildError::ExecutorNotSet)?;

        Ok(Tool {
            name,
            description,
            parameters: ToolParameters {
                properties: self.properties,
                required: self.required,
            },
            executor,
        })
    }
}
