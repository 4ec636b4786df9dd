use std::error::Error;
use std::io::{self, Write};

use dotenv::dotenv;
use tripcrew::{init_default_tracing, plan_trip, RunConfig, TripRequest};

fn prompt_line(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_default_tracing();

    println!("\nTravel AI Planner");
    println!("I'll help you plan your trip from anywhere to anywhere!\n");

    let origin = prompt_line("Where are you traveling from? ")?;
    let destination = prompt_line("Where are you traveling to? ")?;
    let travel_date = prompt_line("When are you traveling? (YYYY-MM-DD or 'soon') ")?;
    let preferences = prompt_line("Any special preferences? (budget, luxury, fast, scenic, etc.) ")?;

    // Errors below are printed, not signaled via the exit status: the tool
    // is human-attended and the user simply runs it again.
    let request = match TripRequest::new(origin, destination, travel_date, preferences) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("\nError: {e}");
            return Ok(());
        }
    };

    // The credential check must short-circuit before any network call.
    let config = RunConfig::load();
    if let Err(e) = config.validate() {
        eprintln!("\nError: {e}");
        return Ok(());
    }

    println!("\nPlanning your trip... This may take a moment.\n");

    match plan_trip(&config, &request).await {
        Ok(result) => {
            println!("Here's your complete travel plan:\n");
            println!("{}", result.final_text);
            println!("\nHave a great trip!");
        }
        Err(e) => {
            eprintln!("Error occurred: {e}");
            eprintln!("Please try again with different inputs or check your internet connection.");
        }
    }

    Ok(())
}
