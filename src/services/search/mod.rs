pub mod duckduckgo;

pub use duckduckgo::SearchClient;

/// Errors internal to the search adapter. These never cross the module
/// boundary as failures; [`SearchClient::search`] downgrades them to a
/// placeholder string.
#[derive(Debug)]
pub enum SearchError {
    Request(String),
    Parse(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Request(s) => write!(f, "request failed: {s}"),
            SearchError::Parse(s) => write!(f, "bad response: {s}"),
        }
    }
}

impl std::error::Error for SearchError {}
