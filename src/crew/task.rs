use crate::Agent;

use super::error::TaskBuildError;

/// One natural-language unit of work bound to exactly one agent.
///
/// The expected-output rubric is advisory free text passed to the model as
/// a soft constraint; nothing validates that the response actually matches
/// it.
#[derive(Debug, Clone)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
    /// Role of the agent this task is assigned to. Captured at build time
    /// so the crew can verify stage ordering.
    pub agent_role: String,
}

impl Task {
    /// The stage prompt before any inter-stage context is appended.
    pub fn prompt(&self) -> String {
        if self.expected_output.is_empty() {
            self.description.clone()
        } else {
            format!(
                "{}\n\nExpected output:\n{}",
                self.description, self.expected_output
            )
        }
    }
}

/// Builder for [`Task`].
#[derive(Debug, Default)]
pub struct TaskBuilder {
    description: Option<String>,
    expected_output: Option<String>,
    agent_role: Option<String>,
}

impl TaskBuilder {
    /// What the assigned agent should do. (Required)
    pub fn set_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rubric describing the shape of a good answer.
    pub fn set_expected_output<T: Into<String>>(mut self, expected_output: T) -> Self {
        self.expected_output = Some(expected_output.into());
        self
    }

    /// Assign the task to an agent. The agent must be fully constructed
    /// before any task referencing it is built. (Required)
    pub fn set_agent(mut self, agent: &Agent) -> Self {
        self.agent_role = Some(agent.role.clone());
        self
    }

    pub fn build(self) -> Result<Task, TaskBuildError> {
        let description = self.description.ok_or(TaskBuildError::DescriptionNotSet)?;
        let agent_role = self.agent_role.ok_or(TaskBuildError::AgentNotSet)?;

        Ok(Task {
            description,
            expected_output: self.expected_output.unwrap_or_default(),
            agent_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgentBuilder, Provider};

    fn test_agent(role: &str) -> Agent {
        AgentBuilder::default()
            .set_role(role)
            .set_model("test-model")
            .set_provider(Provider::Ollama)
            .build()
            .unwrap()
    }

    #[test]
    fn build_requires_description() {
        let agent = test_agent("Travel Planner");
        let err = TaskBuilder::default().set_agent(&agent).build().unwrap_err();
        assert!(matches!(err, TaskBuildError::DescriptionNotSet));
    }

    #[test]
    fn build_requires_agent() {
        let err = TaskBuilder::default()
            .set_description("Plan a trip")
            .build()
            .unwrap_err();
        assert!(matches!(err, TaskBuildError::AgentNotSet));
    }

    #[test]
    fn prompt_appends_rubric() {
        let agent = test_agent("Travel Planner");
        let task = TaskBuilder::default()
            .set_description("Plan a trip from Paris to Rome.")
            .set_expected_output("1. Transport options\n2. Costs")
            .set_agent(&agent)
            .build()
            .unwrap();

        let prompt = task.prompt();
        assert!(prompt.starts_with("Plan a trip from Paris to Rome."));
        assert!(prompt.contains("Expected output:"));
        assert!(prompt.contains("2. Costs"));
        assert_eq!(task.agent_role, "Travel Planner");
    }

    #[test]
    fn prompt_without_rubric_is_just_the_description() {
        let agent = test_agent("Travel Reviewer");
        let task = TaskBuilder::default()
            .set_description("Review the plan.")
            .set_agent(&agent)
            .build()
            .unwrap();
        assert_eq!(task.prompt(), "Review the plan.");
    }
}
