//! Search submission and selector waits
//!
//! The term is typed into the storefront's own search box and submitted with
//! Enter, the same way a visitor would reach the results page.

use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use chromiumoxide::page::Page;
use tracing::{debug, info};

use super::types::SEARCH_INPUT_SELECTOR;
use crate::utils::{SELECTOR_POLL_INTERVAL, SELECTOR_WAIT_TIMEOUT};

/// Type the search term into the site's search box and submit it.
///
/// Waits for the input to attach first; the landing page builds its header
/// after the document load event. The term is passed through exactly as
/// given: an empty or odd string is the site's problem to answer, not ours
/// to reject.
pub async fn submit_search(page: &Page, search: &str) -> Result<()> {
    wait_for_selector(page, SEARCH_INPUT_SELECTOR).await?;

    let input = page
        .find_element(SEARCH_INPUT_SELECTOR)
        .await
        .context("Search input detached after it was observed")?;

    input
        .click()
        .await
        .context("Failed to focus the search input")?;
    input
        .type_str(search)
        .await
        .context("Failed to type the search term")?;
    input
        .press_key("Enter")
        .await
        .context("Failed to submit the search")?;

    info!("Submitted search term: '{search}'");

    page.wait_for_navigation()
        .await
        .context("Failed to wait for the search results page")?;

    Ok(())
}

/// Poll until `selector` is attached to the current page DOM.
///
/// `wait_for_navigation` returns when the HTTP response arrives, but the
/// site renders results client-side afterwards, so the DOM has to be checked
/// for the actual elements before scraping. Polls every
/// [`SELECTOR_POLL_INTERVAL`], giving up after [`SELECTOR_WAIT_TIMEOUT`].
pub async fn wait_for_selector(page: &Page, selector: &str) -> Result<()> {
    let start = Instant::now();

    loop {
        if page.find_element(selector).await.is_ok() {
            debug!("Selector '{selector}' attached after {:?}", start.elapsed());
            return Ok(());
        }

        if start.elapsed() >= SELECTOR_WAIT_TIMEOUT {
            let url = page
                .url()
                .await
                .ok()
                .flatten()
                .unwrap_or_else(|| "about:blank".to_string());

            return Err(anyhow!(
                "Timeout waiting for selector '{selector}'. Page URL: {url}. \
                 Element did not attach within {SELECTOR_WAIT_TIMEOUT:?}; the site \
                 may have changed its markup or the page failed to render."
            ));
        }

        tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
    }
}
