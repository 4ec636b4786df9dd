use std::{fmt, future::Future, pin::Pin, sync::Arc};

use crate::{Agent, AgentError, Message};

pub type FlowFuture<'a> = Pin<Box<dyn Future<Output = Result<Message, AgentError>> + Send + 'a>>;
pub type FlowFn = Arc<dyn for<'a> Fn(&'a mut Agent, String) -> FlowFuture<'a> + Send + Sync>;

/// How an [`Agent`] turns a prompt into a response.
///
/// The default flow performs a single stateless chat call against the
/// bound model. Custom flows exist mainly so the crew executor can be
/// driven by scripted agents in tests.
#[derive(Clone)]
pub enum Flow {
    /// Use the built-in single-call flow.
    Default,
    /// Use a custom closure.
    ///
    /// Closure must be `Send + Sync + 'static` and match
    /// `for<'a> Fn(&'a mut Agent, String) -> FlowFuture<'a>`.
    Custom(FlowFn),
}

impl Flow {
    /// Wrap a closure or function pointer into a [`Flow::Custom`].
    pub fn from_fn<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a mut Agent, String) -> FlowFuture<'a> + Send + Sync + 'static,
    {
        Flow::Custom(Arc::new(f))
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Default => f.write_str("Flow::Default"),
            Flow::Custom(_) => f.write_str("Flow::Custom(<closure>)"),
        }
    }
}
