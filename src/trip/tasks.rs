use serde_json::json;

use crate::{Agent, Task, TaskBuilder};

use super::{agents::SEARCH_TOOL_NAME, error::TripError, request::TripRequest, TravelAgents};

/// Assembles the three fixed stage tasks from a [`TripRequest`].
///
/// The itinerary and research descriptions are pre-enriched with search
/// snippets fetched through the assigned agent's search tool; the rubrics
/// are advisory and never machine-checked.
#[derive(Debug)]
pub struct TravelTasks<'a> {
    request: &'a TripRequest,
    agents: &'a TravelAgents,
}

impl<'a> TravelTasks<'a> {
    pub fn new(request: &'a TripRequest, agents: &'a TravelAgents) -> Self {
        Self { request, agents }
    }

    pub async fn plan_itinerary(&self) -> Result<Task, TripError> {
        let transport_query = format!(
            "transportation from {} to {}",
            self.request.origin, self.request.destination
        );
        let transport_info = enrich(&self.agents.planner, &transport_query).await;

        let description = format!(
            "Create a detailed travel itinerary from {} to {} on {}.\n\
             Preferences: {}.\n\n\
             Here's some transportation information I found:\n{}\n\n\
             Include transportation options, times, costs, and transfers.",
            self.request.origin,
            self.request.destination,
            self.request.travel_date,
            self.request.preferences,
            transport_info,
        );

        let task = TaskBuilder::default()
            .set_description(description)
            .set_expected_output(
                "A travel plan with:\n\
                 1. Multiple transportation options\n\
                 2. Estimated times and costs\n\
                 3. Required transfers or connections\n\
                 4. Visa or documentation requirements",
            )
            .set_agent(&self.agents.planner)
            .build()?;
        Ok(task)
    }

    pub async fn research_details(&self) -> Result<Task, TripError> {
        let attractions_query = format!("attractions in {}", self.request.destination);
        let attractions_info = enrich(&self.agents.researcher, &attractions_query).await;

        let accommodations_query = format!("accommodations in {}", self.request.destination);
        let accommodations_info = enrich(&self.agents.researcher, &accommodations_query).await;

        let description = format!(
            "Research details for traveling from {} to {}.\n\n\
             Here's some information I found about attractions:\n{}\n\n\
             Here's some information about accommodations:\n{}\n\n\
             Find more details about attractions, accommodations, local transit, \
             cultural tips, and weather.",
            self.request.origin, self.request.destination, attractions_info, accommodations_info,
        );

        let task = TaskBuilder::default()
            .set_description(description)
            .set_expected_output(
                "Report with:\n\
                 1. Top attractions\n\
                 2. 3-5 accommodations with price ranges\n\
                 3. Local transit info\n\
                 4. Cultural tips or warnings\n\
                 5. Weather forecast",
            )
            .set_agent(&self.agents.researcher)
            .build()?;
        Ok(task)
    }

    pub fn review_plan(&self) -> Result<Task, TripError> {
        let description = format!(
            "Review the complete travel plan from {} to {}.\n\
             Ensure it meets preferences, is accurate, and practical.",
            self.request.origin, self.request.destination,
        );

        let task = TaskBuilder::default()
            .set_description(description)
            .set_expected_output(
                "Final travel plan with:\n\
                 1. Verified transport details\n\
                 2. Confirmed attractions & accommodations\n\
                 3. Recommendations or warnings\n\
                 4. Summary itinerary",
            )
            .set_agent(&self.agents.reviewer)
            .build()?;
        Ok(task)
    }
}

/// Run the agent's search tool for an enrichment query. Any failure, tool
/// missing included, degrades to a placeholder string so task assembly
/// never aborts.
async fn enrich(agent: &Agent, query: &str) -> String {
    let Some(tool) = agent.tool_by_name(SEARCH_TOOL_NAME) else {
        return "Search error: no search tool available".into();
    };
    match tool.execute(json!({ "query": query })).await {
        Ok(snippets) => snippets,
        Err(e) => format!("Search error: {e}"),
    }
}
