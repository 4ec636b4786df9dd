mod agents;
mod error;
mod request;
mod tasks;

pub use self::{
    agents::{TravelAgents, SEARCH_TOOL_NAME},
    error::TripError,
    request::TripRequest,
    tasks::TravelTasks,
};

use tracing::instrument;

use crate::{config::RunConfig, services::search::SearchClient, CrewBuilder, CrewResult};

/// Run the whole pipeline for one request: build the three agents, the
/// three tasks (itinerary → research → review) and a sequential crew, and
/// return the reviewer's output.
///
/// Everything is constructed fresh per call; no state crosses runs.
#[instrument(level = "info", skip(config, request), fields(origin = %request.origin, destination = %request.destination))]
pub async fn plan_trip(
    config: &RunConfig,
    request: &TripRequest,
) -> Result<CrewResult, TripError> {
    let agents = TravelAgents::build(config, SearchClient::new())?;

    let tasks = TravelTasks::new(request, &agents);
    let itinerary = tasks.plan_itinerary().await?;
    let research = tasks.research_details().await?;
    let review = tasks.review_plan()?;

    let crew = CrewBuilder::default()
        .add_agent(agents.planner)
        .add_agent(agents.researcher)
        .add_agent(agents.reviewer)
        .add_task(itinerary)
        .add_task(research)
        .add_task(review)
        .build()?;

    let result = crew.kickoff().await?;
    Ok(result)
}
