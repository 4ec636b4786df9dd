mod default_flow;
mod flow_types;

pub use self::{default_flow::default_flow, flow_types::*};
