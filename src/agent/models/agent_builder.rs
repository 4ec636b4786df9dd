use crate::{
    agent::models::error::AgentBuildError,
    services::llm::{ClientConfig, Provider},
    Agent, Flow, FlowFuture, Tool,
};

/// A builder for [`Agent`].
///
/// Role and model are required; everything else has defaults. Uses the
/// builder pattern so you can chain calls.
///
/// Example:
///
/// ```no_run
/// use tripcrew::AgentBuilder;
///
/// let agent = AgentBuilder::default()
///     .set_role("Travel Planner")
///     .set_goal("Create detailed travel itineraries between locations")
///     .set_backstory("Expert in travel logistics and efficient route planning.")
///     .set_model("gemini-pro")
///     .set_api_key("my-key")
///     .set_temperature(0.1)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct AgentBuilder {
    /// Name used for logging; defaults to `Agent-{role}`
    name: Option<String>,
    /// Role the agent plays in the pipeline
    role: Option<String>,
    /// What the agent is trying to achieve
    goal: Option<String>,
    /// Persona text framing the role
    backstory: Option<String>,
    /// Model identifier passed to the provider
    model: Option<String>,

    /// Provider selection for the model client
    provider: Option<Provider>,
    /// Optional base URL for custom or self-hosted endpoints
    base_url: Option<String>,
    /// API key used by the selected provider
    api_key: Option<String>,

    /// Tools exposed to task assembly
    tools: Option<Vec<Tool>>,
    /// Whether the agent may delegate (never enabled here)
    allow_delegation: Option<bool>,

    /// Sampling temperature
    temperature: Option<f32>,
    /// Nucleus sampling probability
    top_p: Option<f32>,
    /// Max tokens to produce
    max_tokens: Option<i32>,

    /// High-level control flow policy
    flow: Option<Flow>,
}

impl AgentBuilder {
    /// Import generic client settings from a [`ClientConfig`].
    pub fn import_client_config(mut self, conf: &ClientConfig) -> Self {
        self = self.set_provider(conf.provider.clone());
        if let Some(base_url) = &conf.base_url {
            self = self.set_base_url(base_url.clone());
        }
        if let Some(api_key) = &conf.api_key {
            self = self.set_api_key(api_key.clone());
        }
        self
    }

    /// Set the name of the agent (used in logging).
    pub fn set_name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the role the agent plays. (Required)
    pub fn set_role<T: Into<String>>(mut self, role: T) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the goal the agent works toward.
    pub fn set_goal<T: Into<String>>(mut self, goal: T) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Set the backstory framing the role for the model.
    pub fn set_backstory<T: Into<String>>(mut self, backstory: T) -> Self {
        self.backstory = Some(backstory.into());
        self
    }

    /// Select the underlying model name. (Required)
    pub fn set_model<T: Into<String>>(mut self, model: T) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Select the model provider implementation.
    pub fn set_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Override the base URL for the provider client.
    pub fn set_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API key used by the provider client.
    pub fn set_api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add a tool the agent exposes.
    pub fn add_tool(mut self, tool: Tool) -> Self {
        if let Some(ref mut vec) = self.tools {
            vec.push(tool);
        } else {
            self.tools = Some(vec![tool]);
        }
        self
    }

    /// Allow or forbid delegation to other agents.
    pub fn set_allow_delegation(mut self, allow: bool) -> Self {
        self.allow_delegation = Some(allow);
        self
    }

    /// Set the sampling temperature.
    pub fn set_temperature(mut self, v: f32) -> Self {
        self.temperature = Some(v);
        self
    }

    /// Set nucleus sampling probability.
    pub fn set_top_p(mut self, v: f32) -> Self {
        self.top_p = Some(v);
        self
    }

    /// Cap the number of tokens the model may produce.
    pub fn set_max_tokens(mut self, v: i32) -> Self {
        self.max_tokens = Some(v);
        self
    }

    pub fn set_flow_fn(mut self, flow: Flow) -> Self {
        self.flow = Some(flow);
        self
    }

    pub fn set_flow<F>(self, f: F) -> Self
    where
        F: for<'a> Fn(&'a mut Agent, String) -> FlowFuture<'a> + Send + Sync + 'static,
    {
        self.set_flow_fn(Flow::from_fn(f))
    }

    /// Finalize all settings and produce an [`Agent`], or an error if
    /// required fields are missing or the client cannot be constructed.
    pub fn build(self) -> Result<Agent, AgentBuildError> {
        let role = self.role.ok_or(AgentBuildError::RoleNotSet)?;
        let model = self.model.ok_or(AgentBuildError::ModelNotSet)?;

        let name = match self.name {
            Some(n) => n,
            None => format!("Agent-{role}"),
        };

        let mut client_config = ClientConfig::default();
        if let Some(provider) = self.provider {
            client_config.provider = provider;
        }
        client_config.base_url = self.base_url;
        client_config.api_key = self.api_key;

        Agent::try_new(
            name,
            role,
            self.goal.unwrap_or_default(),
            self.backstory.unwrap_or_default(),
            model,
            client_config,
            self.tools,
            self.allow_delegation.unwrap_or(false),
            self.temperature,
            self.top_p,
            self.max_tokens,
            self.flow.unwrap_or(Flow::Default),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::Value;

    use super::*;
    use crate::{AsyncToolFn, Message, ToolBuilder};

    fn noop_executor() -> AsyncToolFn {
        Arc::new(|_args: Value| Box::pin(async { Ok(String::new()) }))
    }

    #[test]
    fn defaults_fail_without_role() {
        let err = AgentBuilder::default().set_model("m").build().unwrap_err();
        assert!(matches!(err, AgentBuildError::RoleNotSet));
    }

    #[test]
    fn defaults_fail_without_model() {
        let err = AgentBuilder::default().set_role("r").build().unwrap_err();
        assert!(matches!(err, AgentBuildError::ModelNotSet));
    }

    #[test]
    fn gemini_requires_api_key() {
        let err = AgentBuilder::default()
            .set_role("Travel Planner")
            .set_model("gemini-pro")
            .set_provider(Provider::Gemini)
            .build()
            .unwrap_err();
        assert!(matches!(err, AgentBuildError::ModelClient(_)));
    }

    #[test]
    fn build_minimal_succeeds_with_local_provider() {
        let agent = AgentBuilder::default()
            .set_role("Travel Planner")
            .set_model("test-model")
            .set_provider(Provider::Ollama)
            .build()
            .expect("build should succeed");
        assert_eq!(agent.model, "test-model");
        assert_eq!(agent.name, "Agent-Travel Planner");
        assert!(!agent.allow_delegation);
    }

    #[test]
    fn system_prompt_contains_identity_and_tools() {
        let search_tool = ToolBuilder::new()
            .name("web_search")
            .description("Searches the web for short text snippets")
            .add_required_property("query", "string", "Search query")
            .executor(noop_executor())
            .build()
            .unwrap();

        let agent = AgentBuilder::default()
            .set_role("Travel Researcher")
            .set_goal("Find transportation options, attractions, and accommodations")
            .set_backstory("Specializes in finding the best travel options.")
            .set_model("test-model")
            .set_provider(Provider::Ollama)
            .add_tool(search_tool)
            .build()
            .unwrap();

        assert!(agent.system_prompt.contains("Travel Researcher"));
        assert!(agent.system_prompt.contains("Find transportation options"));
        assert!(agent.system_prompt.contains("Specializes in finding"));
        assert!(agent.system_prompt.contains("web_search"));
        assert!(agent.tool_by_name("web_search").is_some());
        assert!(agent.tool_by_name("missing").is_none());
    }

    #[tokio::test]
    async fn custom_flow_invocation() {
        fn echo_flow(_agent: &mut Agent, prompt: String) -> crate::FlowFuture<'_> {
            Box::pin(async move { Ok(Message::assistant(format!("ECHO: {prompt}"))) })
        }

        let mut agent = AgentBuilder::default()
            .set_role("r")
            .set_model("m")
            .set_provider(Provider::Ollama)
            .set_flow(echo_flow)
            .build()
            .unwrap();

        let resp = agent.invoke("abc").await.unwrap();
        assert_eq!(resp.content.unwrap(), "ECHO: abc");
    }
}
