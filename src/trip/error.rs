use crate::{AgentBuildError, CrewBuildError, CrewError, TaskBuildError, ToolBuildError};

/// Errors surfaced to the front end while planning a trip.
#[derive(Debug)]
pub enum TripError {
    /// A required request field was empty. Raised before the pipeline runs.
    MissingInput(&'static str),
    /// Building the search tool failed.
    ToolBuild(ToolBuildError),
    /// Building one of the agents failed.
    AgentBuild(AgentBuildError),
    /// Building one of the tasks failed.
    TaskBuild(TaskBuildError),
    /// Assembling the crew failed.
    CrewBuild(CrewBuildError),
    /// A pipeline stage failed; carries the underlying stage error.
    Crew(CrewError),
}

impl std::fmt::Display for TripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripError::MissingInput(field) => {
                write!(f, "Please fill in the '{field}' field.")
            }
            TripError::ToolBuild(e) => write!(f, "Tool setup error: {e}"),
            TripError::AgentBuild(e) => write!(f, "Agent setup error: {e}"),
            TripError::TaskBuild(e) => write!(f, "Task setup error: {e}"),
            TripError::CrewBuild(e) => write!(f, "Crew setup error: {e}"),
            TripError::Crew(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TripError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripError::MissingInput(_) => None,
            TripError::ToolBuild(e) => Some(e),
            TripError::AgentBuild(e) => Some(e),
            TripError::TaskBuild(e) => Some(e),
            TripError::CrewBuild(e) => Some(e),
            TripError::Crew(e) => Some(e),
        }
    }
}

impl From<ToolBuildError> for TripError {
    fn from(err: ToolBuildError) -> Self {
        TripError::ToolBuild(err)
    }
}

impl From<AgentBuildError> for TripError {
    fn from(err: AgentBuildError) -> Self {
        TripError::AgentBuild(err)
    }
}

impl From<TaskBuildError> for TripError {
    fn from(err: TaskBuildError) -> Self {
        TripError::TaskBuild(err)
    }
}

impl From<CrewBuildError> for TripError {
    fn from(err: CrewBuildError) -> Self {
        TripError::CrewBuild(err)
    }
}

impl From<CrewError> for TripError {
    fn from(err: CrewError) -> Self {
        TripError::Crew(err)
    }
}
