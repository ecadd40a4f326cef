// Product scraper CLI
//
// Asks for a search term (or takes it as the first argument), drives a
// headless Chromium session through every results page, and writes the
// collected records to scraped/<search>.json.

use anyhow::Result;
use tracing::{error, info};

use cartscrape::{ScrapeConfig, random_user_agent};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with chromiumoxide spam reduction
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
                .add_directive("chromiumoxide::handler=off".parse()?)
                .add_directive("chromiumoxide::conn=off".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let search = match std::env::args().nth(1) {
        Some(term) => term,
        None => prompt_for_search()?,
    };

    let config = ScrapeConfig::builder()
        .user_agent(random_user_agent())
        .build()?;

    info!("scraper running...");

    match cartscrape::scrape(&config, &search).await {
        Ok(records) => {
            info!("Request data has been scraped! ({} records)", records.len());
            Ok(())
        }
        Err(e) => {
            error!("Scrape failed: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Ask for the search term interactively when it wasn't given on the command
/// line. Whatever the user types is passed to the site as-is.
fn prompt_for_search() -> Result<String> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let line = editor.readline("Enter the product category/brand to be scraped: ")?;
    Ok(line)
}
