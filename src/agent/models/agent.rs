use core::fmt;

use tracing::instrument;

use crate::agent::models::error::{AgentBuildError, AgentError};
use crate::services::llm::models::base::Message;
use crate::services::llm::{ClientConfig, InferenceClient};
use crate::{default_flow, Flow, Tool};

/// A named role bound to a goal, a backstory, an optional tool set and a
/// model client.
///
/// Agents are configuration bundles: they carry no conversation state
/// between invocations, and one run of the pipeline constructs exactly one
/// agent per role. `allow_delegation` is carried for parity with the task
/// model but is never enabled by this crate.
#[derive(Clone)]
pub struct Agent {
    /// Human-readable name of the agent (used in logs).
    pub name: String,
    /// Role the agent plays in the pipeline, e.g. "Travel Planner".
    pub role: String,
    /// What the agent is trying to achieve.
    pub goal: String,
    /// Persona text that frames the role for the model.
    pub backstory: String,
    /// Underlying model identifier.
    pub model: String,
    /// Tools the agent can expose to task assembly.
    pub tools: Option<Vec<Tool>>,
    /// Whether the agent may hand work to other agents. Always false here.
    pub allow_delegation: bool,
    /// System prompt derived from role, goal, backstory and tools.
    pub system_prompt: String,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling top-p parameter.
    pub top_p: Option<f32>,
    /// Maximum tokens the model may produce.
    pub max_tokens: Option<i32>,
    /// Backend model client.
    pub(crate) model_client: InferenceClient,

    flow: Flow,
}

impl Agent {
    pub(crate) fn try_new(
        name: String,
        role: String,
        goal: String,
        backstory: String,
        model: String,
        client_config: ClientConfig,
        tools: Option<Vec<Tool>>,
        allow_delegation: bool,
        temperature: Option<f32>,
        top_p: Option<f32>,
        max_tokens: Option<i32>,
        flow: Flow,
    ) -> Result<Self, AgentBuildError> {
        let system_prompt = compose_system_prompt(&role, &goal, &backstory, tools.as_deref());

        Ok(Self {
            name,
            role,
            goal,
            backstory,
            model,
            tools,
            allow_delegation,
            system_prompt,
            temperature,
            top_p,
            max_tokens,
            model_client: InferenceClient::try_from(client_config)?,
            flow,
        })
    }

    /// Ask the agent to answer a single prompt.
    ///
    /// The prompt is passed through the configured [`Flow`]; the default
    /// flow performs one stateless chat call with the agent's system
    /// prompt. Returns the raw [`Message`] produced by the flow.
    #[instrument(level = "debug", skip(self, prompt), fields(agent_role = %self.role))]
    pub async fn invoke<T>(&mut self, prompt: T) -> Result<Message, AgentError>
    where
        T: Into<String>,
    {
        let flow_to_run = self.flow.clone();
        match flow_to_run {
            Flow::Default => default_flow(self, prompt.into()).await,
            Flow::Custom(custom_flow_fn) => (custom_flow_fn)(self, prompt.into()).await,
        }
    }

    /// Find a tool reference by name, if it exists.
    pub fn tool_by_name<T>(&self, name: T) -> Option<&Tool>
    where
        T: Into<String>,
    {
        let tools = self.tools.as_ref()?;
        let name = name.into();
        tools.iter().find(|t| t.name == name)
    }

    /// Export current client configuration (provider, base URL, key).
    pub fn export_client_config(&self) -> &ClientConfig {
        self.model_client.get_config()
    }
}

/// Build the crewAI-style system prompt from the agent's identity.
fn compose_system_prompt(role: &str, goal: &str, backstory: &str, tools: Option<&[Tool]>) -> String {
    let mut prompt = format!("You are {role}. {backstory}\nYour personal goal is: {goal}");

    if let Some(tools) = tools {
        if !tools.is_empty() {
            prompt.push_str("\nYou have access to the following tools:");
            for tool in tools {
                prompt.push_str(&format!("\n- {}: {}", tool.name, tool.description));
            }
        }
    }

    prompt
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("goal", &self.goal)
            .field("backstory", &self.backstory)
            .field("model", &self.model)
            .field("tools", &self.tools)
            .field("allow_delegation", &self.allow_delegation)
            .field("system_prompt", &self.system_prompt)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .field("flow", &self.flow)
            .finish()
    }
}
