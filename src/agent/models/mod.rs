mod agent;
mod agent_builder;
mod error;

pub use agent::*;
pub use agent_builder::*;
pub use error::*;
