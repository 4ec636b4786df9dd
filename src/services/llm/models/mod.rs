pub mod base;
pub mod chat;
pub mod errors;

pub use base::{InferenceOptions, Message, Role};
pub use chat::{ChatRequest, ChatResponse};
pub use errors::InferenceClientError;
