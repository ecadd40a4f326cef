//! Product scraping via browser automation
//!
//! Drives a real Chromium session against the storefront: submit the search
//! term through the site's own search box, then alternate snapshot
//! extraction with pagination probes until the last results page, and hand
//! the accumulated records to the JSON sink.

mod browser;
mod extract;
mod pagination;
mod search;
mod types;

// Re-export public types
pub use browser::{BrowserWrapper, launch_browser};
pub use extract::extract_products;
pub use pagination::{NextPageSignal, probe_next_page};
pub use types::{
    NEXT_DISABLED_SELECTOR, NEXT_ENABLED_SELECTOR, NEXT_MARKER_SELECTOR, NOT_AVAILABLE,
    ProductRecord, RESULT_SELECTOR, SEARCH_INPUT_SELECTOR,
};

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use tracing::{error, info, warn};

use crate::config::ScrapeConfig;
use crate::content_saver::save_products;

/// Scrape every results page for `search` and persist the collection.
///
/// Owns the whole browser session: whatever happens after launch, the
/// session is shut down exactly once before this function returns. A
/// persistence failure is logged and recovered here; every other failure
/// propagates to the caller as fatal.
///
/// # Example
/// ```no_run
/// use cartscrape::{ScrapeConfig, random_user_agent};
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ScrapeConfig::builder()
///         .user_agent(random_user_agent())
///         .build()?;
///
///     let records = cartscrape::scrape::run(&config, "wool socks").await?;
///     println!("scraped {} products", records.len());
///     Ok(())
/// }
/// ```
pub async fn run(config: &ScrapeConfig, search: &str) -> Result<Vec<ProductRecord>> {
    let wrapper = launch_browser(config).await?;

    // Session teardown must happen on the error path too, so the drive is a
    // separate fallible step and shutdown runs before the result is inspected.
    let result = drive(&wrapper, config, search).await;
    wrapper.shutdown().await;

    result
}

/// Navigate, submit the search, walk the result pages, hand off to the sink.
async fn drive(
    wrapper: &BrowserWrapper,
    config: &ScrapeConfig,
    search: &str,
) -> Result<Vec<ProductRecord>> {
    let page = wrapper
        .browser()
        .new_page("about:blank")
        .await
        .context("Failed to create page")?;

    info!("Navigating to {}", config.start_url());
    page.goto(config.start_url())
        .await
        .context("Failed to navigate to the landing page")?;
    page.wait_for_navigation()
        .await
        .context("Failed to wait for the landing page load")?;

    search::submit_search(&page, search).await?;

    // Both markers must be attached before the first snapshot: the result
    // containers for extraction, the pagination strip for the probe.
    search::wait_for_selector(&page, RESULT_SELECTOR).await?;
    search::wait_for_selector(&page, NEXT_MARKER_SELECTOR).await?;

    let records = collect_all_pages(&page).await?;
    info!("Collected {} product records for '{search}'", records.len());

    match save_products(search, &records, config.output_dir()).await {
        Ok(path) => info!("Data saved to {}", path.display()),
        Err(e) => error!("Error while writing scraped data for '{search}': {e:#}"),
    }

    Ok(records)
}

/// The extraction/pagination loop.
///
/// One snapshot per iteration feeds both the extractor and the pagination
/// probe, so the continuation decision is always made against the same page
/// the records came from, never against stale state carried across a
/// navigation.
async fn collect_all_pages(page: &Page) -> Result<Vec<ProductRecord>> {
    let mut records = Vec::new();

    loop {
        let html = page
            .content()
            .await
            .context("Failed to read the rendered results page")?;

        let batch = extract_products(&html);
        info!("Results page yielded {} records", batch.len());
        records.extend(batch);

        match probe_next_page(&html) {
            NextPageSignal::Enabled => pagination::advance(page).await?,
            NextPageSignal::Disabled => {
                info!("Next button is disabled, reached the last results page");
                break;
            }
            NextPageSignal::Unknown => {
                warn!(
                    "Neither pagination element found; stopping with {} records collected so far",
                    records.len()
                );
                break;
            }
        }
    }

    Ok(records)
}
