use crate::AgentError;

/// Errors raised when assembling a [`Task`](super::Task).
#[derive(Debug)]
pub enum TaskBuildError {
    /// Required description was not set on the builder.
    DescriptionNotSet,
    /// No agent was assigned to the task.
    AgentNotSet,
}

impl std::fmt::Display for TaskBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskBuildError::DescriptionNotSet => write!(f, "Task description not set."),
            TaskBuildError::AgentNotSet => write!(f, "Task has no assigned agent."),
        }
    }
}

impl std::error::Error for TaskBuildError {}

/// Errors raised when assembling a [`Crew`](super::Crew).
#[derive(Debug)]
pub enum CrewBuildError {
    /// The crew has no agents/tasks at all.
    Empty,
    /// Agent and task counts differ; every task needs its agent.
    CardinalityMismatch { agents: usize, tasks: usize },
    /// `tasks[i]` is assigned to a different role than `agents[i]`.
    AgentMismatch {
        stage: usize,
        expected: String,
        found: String,
    },
}

impl std::fmt::Display for CrewBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrewBuildError::Empty => write!(f, "Crew has no agents or tasks."),
            CrewBuildError::CardinalityMismatch { agents, tasks } => write!(
                f,
                "Crew has {agents} agent(s) but {tasks} task(s); counts must match."
            ),
            CrewBuildError::AgentMismatch {
                stage,
                expected,
                found,
            } => write!(
                f,
                "Task at stage {stage} is assigned to '{expected}' but agent at that stage is '{found}'."
            ),
        }
    }
}

impl std::error::Error for CrewBuildError {}

/// Errors raised while running a [`Crew`](super::Crew).
///
/// The first failing stage aborts the whole run; no partial result is
/// returned and nothing is retried.
#[derive(Debug)]
pub enum CrewError {
    /// A stage's agent invocation failed.
    Stage {
        stage: usize,
        role: String,
        source: AgentError,
    },
    /// A stage completed but produced no text.
    EmptyOutput { stage: usize, role: String },
}

impl std::fmt::Display for CrewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrewError::Stage { stage, role, source } => {
                write!(f, "Stage {stage} ({role}) failed: {source}")
            }
            CrewError::EmptyOutput { stage, role } => {
                write!(f, "Stage {stage} ({role}) produced no output.")
            }
        }
    }
}

impl std::error::Error for CrewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrewError::Stage { source, .. } => Some(source),
            CrewError::EmptyOutput { .. } => None,
        }
    }
}
