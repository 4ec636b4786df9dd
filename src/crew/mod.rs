#[allow(clippy::module_inception)]
mod crew;
mod error;
mod task;

pub use self::{
    crew::{Crew, CrewBuilder, CrewResult},
    error::{CrewBuildError, CrewError, TaskBuildError},
    task::{Task, TaskBuilder},
};
