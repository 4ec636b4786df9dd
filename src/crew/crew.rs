use tracing::{info, instrument};

use crate::{Agent, Task};

use super::error::{CrewBuildError, CrewError};

/// Final result of a crew run: the last stage's output, nothing else.
#[derive(Debug, Clone)]
pub struct CrewResult {
    pub final_text: String,
}

/// Strictly sequential executor over agent×task pairs.
///
/// `tasks[i]` is always handled by `agents[i]`; ordering is fixed at build
/// time and stages never run concurrently. Each stage after the first sees
/// a verbatim transcript of all prior stage outputs appended to its prompt.
/// The first failing stage aborts the run with no partial result.
#[derive(Debug)]
pub struct Crew {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
}

impl Crew {
    /// Run every stage in order and return the last stage's output.
    #[instrument(level = "info", skip(self), fields(stages = self.tasks.len()))]
    pub async fn kickoff(mut self) -> Result<CrewResult, CrewError> {
        let mut stage_outputs: Vec<(String, String)> = Vec::with_capacity(self.tasks.len());

        for (stage, (agent, task)) in self.agents.iter_mut().zip(self.tasks.iter()).enumerate() {
            let mut prompt = task.prompt();
            if !stage_outputs.is_empty() {
                prompt.push_str("\n\nContext from earlier stages:");
                for (role, output) in &stage_outputs {
                    prompt.push_str(&format!("\n\n[{role}]\n{output}"));
                }
            }

            info!(stage, role = %agent.role, "running stage");

            let message = agent.invoke(prompt).await.map_err(|source| CrewError::Stage {
                stage,
                role: agent.role.clone(),
                source,
            })?;

            let output = match message.content {
                Some(text) if !text.trim().is_empty() => text,
                _ => {
                    return Err(CrewError::EmptyOutput {
                        stage,
                        role: agent.role.clone(),
                    })
                }
            };

            stage_outputs.push((agent.role.clone(), output));
        }

        // Build validation guarantees at least one stage.
        let (_, final_text) = stage_outputs
            .pop()
            .ok_or(CrewError::EmptyOutput { stage: 0, role: String::new() })?;

        Ok(CrewResult { final_text })
    }
}

/// Builder for [`Crew`].
///
/// Validates the pipeline invariants at build time: at least one stage,
/// matching agent/task counts, and `tasks[i]` assigned to `agents[i]`.
#[derive(Debug, Default)]
pub struct CrewBuilder {
    agents: Vec<Agent>,
    tasks: Vec<Task>,
}

impl CrewBuilder {
    pub fn add_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn add_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn build(self) -> Result<Crew, CrewBuildError> {
        if self.agents.is_empty() && self.tasks.is_empty() {
            return Err(CrewBuildError::Empty);
        }
        if self.agents.len() != self.tasks.len() {
            return Err(CrewBuildError::CardinalityMismatch {
                agents: self.agents.len(),
                tasks: self.tasks.len(),
            });
        }
        for (stage, (agent, task)) in self.agents.iter().zip(self.tasks.iter()).enumerate() {
            if agent.role != task.agent_role {
                return Err(CrewBuildError::AgentMismatch {
                    stage,
                    expected: task.agent_role.clone(),
                    found: agent.role.clone(),
                });
            }
        }

        Ok(Crew {
            agents: self.agents,
            tasks: self.tasks,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        Agent, AgentBuilder, AgentError, Flow, FlowFuture, Message, Provider, TaskBuilder,
    };

    fn scripted_agent(role: &str, reply: &str) -> Agent {
        let reply = reply.to_string();
        AgentBuilder::default()
            .set_role(role)
            .set_model("test-model")
            .set_provider(Provider::Ollama)
            .set_flow_fn(Flow::from_fn(
                move |_: &mut Agent, _prompt: String| -> FlowFuture<'_> {
                    let reply = reply.clone();
                    Box::pin(async move { Ok(Message::assistant(reply)) })
                },
            ))
            .build()
            .unwrap()
    }

    fn task_for(agent: &Agent, description: &str) -> Task {
        TaskBuilder::default()
            .set_description(description)
            .set_agent(agent)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn final_text_is_always_the_last_stage_output() {
        let planner = scripted_agent("Travel Planner", "planner output");
        let researcher = scripted_agent("Travel Researcher", "researcher output");
        let reviewer = scripted_agent("Travel Reviewer", "reviewer output");

        let t1 = task_for(&planner, "plan");
        let t2 = task_for(&researcher, "research");
        let t3 = task_for(&reviewer, "review");

        let crew = CrewBuilder::default()
            .add_agent(planner)
            .add_agent(researcher)
            .add_agent(reviewer)
            .add_task(t1)
            .add_task(t2)
            .add_task(t3)
            .build()
            .unwrap();

        let result = crew.kickoff().await.unwrap();
        assert_eq!(result.final_text, "reviewer output");
    }

    #[tokio::test]
    async fn later_stages_see_earlier_outputs() {
        let seen_prompts: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let recording_agent = |role: &str, reply: &str| {
            let reply = reply.to_string();
            let seen = seen_prompts.clone();
            AgentBuilder::default()
                .set_role(role)
                .set_model("test-model")
                .set_provider(Provider::Ollama)
                .set_flow_fn(Flow::from_fn(
                    move |_: &mut Agent, prompt: String| -> FlowFuture<'_> {
                        let reply = reply.clone();
                        let seen = seen.clone();
                        Box::pin(async move {
                            seen.lock().unwrap().push(prompt);
                            Ok(Message::assistant(reply))
                        })
                    },
                ))
                .build()
                .unwrap()
        };

        let planner = recording_agent("Travel Planner", "take the night train");
        let reviewer = recording_agent("Travel Reviewer", "approved");

        let t1 = task_for(&planner, "plan");
        let t2 = task_for(&reviewer, "review");

        let crew = CrewBuilder::default()
            .add_agent(planner)
            .add_agent(reviewer)
            .add_task(t1)
            .add_task(t2)
            .build()
            .unwrap();
        crew.kickoff().await.unwrap();

        let prompts = seen_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[0].contains("Context from earlier stages"));
        assert!(prompts[1].contains("Context from earlier stages"));
        assert!(prompts[1].contains("[Travel Planner]"));
        assert!(prompts[1].contains("take the night train"));
    }

    #[tokio::test]
    async fn first_failing_stage_aborts_the_run() {
        let failing = AgentBuilder::default()
            .set_role("Travel Planner")
            .set_model("test-model")
            .set_provider(Provider::Ollama)
            .set_flow_fn(Flow::from_fn(
                |_: &mut Agent, _prompt: String| -> FlowFuture<'_> {
                    Box::pin(async { Err(AgentError::Runtime("quota exceeded".into())) })
                },
            ))
            .build()
            .unwrap();
        let reviewer = scripted_agent("Travel Reviewer", "never reached");

        let t1 = task_for(&failing, "plan");
        let t2 = task_for(&reviewer, "review");

        let crew = CrewBuilder::default()
            .add_agent(failing)
            .add_agent(reviewer)
            .add_task(t1)
            .add_task(t2)
            .build()
            .unwrap();

        let err = crew.kickoff().await.unwrap_err();
        match err {
            CrewError::Stage { stage, role, source } => {
                assert_eq!(stage, 0);
                assert_eq!(role, "Travel Planner");
                assert!(source.to_string().contains("quota exceeded"));
            }
            other => panic!("expected stage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_stage_output_is_an_error() {
        let silent = scripted_agent("Travel Planner", "   ");
        let task = task_for(&silent, "plan");

        let crew = CrewBuilder::default()
            .add_agent(silent)
            .add_task(task)
            .build()
            .unwrap();
        let err = crew.kickoff().await.unwrap_err();
        assert!(matches!(err, CrewError::EmptyOutput { stage: 0, .. }));
    }

    #[test]
    fn build_rejects_cardinality_mismatch() {
        let planner = scripted_agent("Travel Planner", "x");
        let t1 = task_for(&planner, "plan");
        let extra = scripted_agent("Travel Reviewer", "y");

        let err = CrewBuilder::default()
            .add_agent(planner)
            .add_agent(extra)
            .add_task(t1)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CrewBuildError::CardinalityMismatch { agents: 2, tasks: 1 }
        ));
    }

    #[test]
    fn build_rejects_reordered_stages() {
        let planner = scripted_agent("Travel Planner", "x");
        let reviewer = scripted_agent("Travel Reviewer", "y");

        let t1 = task_for(&planner, "plan");
        let t2 = task_for(&reviewer, "review");

        // tasks swapped relative to agents
        let err = CrewBuilder::default()
            .add_agent(planner)
            .add_agent(reviewer)
            .add_task(t2)
            .add_task(t1)
            .build()
            .unwrap_err();
        assert!(matches!(err, CrewBuildError::AgentMismatch { stage: 0, .. }));
    }

    #[test]
    fn build_rejects_empty_crew() {
        let err = CrewBuilder::default().build().unwrap_err();
        assert!(matches!(err, CrewBuildError::Empty));
    }
}
