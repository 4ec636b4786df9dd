pub(crate) mod services;

pub mod agent;
pub mod config;
pub mod crew;
pub mod flows;
pub mod observability;
pub mod tools;
pub mod trip;

pub use agent::*;
pub use crew::*;
pub use flows::*;
pub use tools::*;

pub use config::{ConfigError, RunConfig, PLACEHOLDER_API_KEY};
pub use observability::init_default_tracing;
pub use services::llm::models::base::{Message, Role};
pub use services::llm::{ClientConfig, InferenceClient, Provider};
pub use services::search::SearchClient;
pub use trip::{plan_trip, TravelAgents, TravelTasks, TripError, TripRequest};
