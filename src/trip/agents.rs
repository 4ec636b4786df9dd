use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::RunConfig, services::search::SearchClient, Agent, AgentBuilder, AsyncToolFn, Tool,
    ToolBuilder, ToolExecutionError,
};

use super::error::TripError;

pub const SEARCH_TOOL_NAME: &str = "web_search";

/// The three fixed roles of the pipeline, constructed exactly once per run
/// and shared with the tasks that reference them.
#[derive(Debug)]
pub struct TravelAgents {
    pub planner: Agent,
    pub researcher: Agent,
    pub reviewer: Agent,
}

impl TravelAgents {
    /// Build all three agents against the given configuration. Planner and
    /// researcher get the search tool; the reviewer works from context
    /// alone.
    pub fn build(config: &RunConfig, search: SearchClient) -> Result<Self, TripError> {
        let search_tool = make_search_tool(search)?;
        let client_config = config.client_config();

        let planner = AgentBuilder::default()
            .set_role("Travel Planner")
            .set_goal("Create detailed travel itineraries between locations")
            .set_backstory("Expert in travel logistics and efficient route planning.")
            .set_model(config.model.clone())
            .import_client_config(&client_config)
            .set_temperature(0.1)
            .add_tool(search_tool.clone())
            .build()?;

        let researcher = AgentBuilder::default()
            .set_role("Travel Researcher")
            .set_goal("Find transportation options, attractions, and accommodations")
            .set_backstory("Specializes in finding the best travel options and experiences.")
            .set_model(config.model.clone())
            .import_client_config(&client_config)
            .set_temperature(0.1)
            .add_tool(search_tool)
            .build()?;

        let reviewer = AgentBuilder::default()
            .set_role("Travel Reviewer")
            .set_goal("Ensure the travel plan is comprehensive and practical")
            .set_backstory("Meticulous reviewer ensuring feasibility and completeness.")
            .set_model(config.model.clone())
            .import_client_config(&client_config)
            .set_temperature(0.1)
            .build()?;

        Ok(Self {
            planner,
            researcher,
            reviewer,
        })
    }
}

/// Wrap the search client into an agent tool taking a single required
/// `query` argument.
fn make_search_tool(search: SearchClient) -> Result<Tool, TripError> {
    let executor: AsyncToolFn = Arc::new(move |args: Value| {
        let search = search.clone();
        Box::pin(async move {
            let query = args
                .get("query")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ToolExecutionError::BadArguments("missing 'query' argument".into()))?;
            // SearchClient::search never fails; errors arrive as placeholder text.
            Ok(search.search(query).await)
        })
    });

    let tool = ToolBuilder::new()
        .name(SEARCH_TOOL_NAME)
        .description("Searches the web and returns short text snippets for a query")
        .add_required_property("query", "string", "Text to search for")
        .executor(executor)
        .build()?;

    Ok(tool)
}
