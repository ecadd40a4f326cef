//! Pagination control for the results walk
//!
//! After each page is extracted, the pagination strip is probed on the same
//! snapshot for two disjoint elements: the enabled next-page anchor and the
//! disabled terminator. The probe result is an explicit tri-state so the
//! "neither element present" page state is a deliberate terminal branch
//! rather than an accidental fallthrough.

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::info;

use super::search::wait_for_selector;
use super::types::{
    NEXT_DISABLED_SELECTOR, NEXT_ENABLED_SELECTOR, NEXT_MARKER_SELECTOR, RESULT_SELECTOR,
};

static NEXT_ENABLED: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(NEXT_ENABLED_SELECTOR).expect("next-enabled selector is valid CSS")
});
static NEXT_DISABLED: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(NEXT_DISABLED_SELECTOR).expect("next-disabled selector is valid CSS")
});

/// Outcome of probing the pagination strip on one results page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPageSignal {
    /// The enabled next-page anchor is present; another page exists
    Enabled,
    /// The disabled terminator is present; this is the last page
    Disabled,
    /// Neither element was found; the page is in an unexpected state
    Unknown,
}

/// Probe a snapshot for the pagination signals.
///
/// The enabled anchor is checked first; should the site ever render both
/// elements at once (e.g. mid re-render), that priority is the tie-break.
pub fn probe_next_page(html: &str) -> NextPageSignal {
    let document = Html::parse_document(html);

    if document.select(&NEXT_ENABLED).next().is_some() {
        NextPageSignal::Enabled
    } else if document.select(&NEXT_DISABLED).next().is_some() {
        NextPageSignal::Disabled
    } else {
        NextPageSignal::Unknown
    }
}

/// Click the enabled next-page anchor and wait for the following results page.
///
/// Waits for navigation, then for the result containers and the pagination
/// strip to re-attach. Failures propagate to the orchestrator as fatal: the
/// click already happened, so the page state can't be trusted for another
/// probe.
pub async fn advance(page: &Page) -> Result<()> {
    info!("Next button is enabled, advancing to the next results page");

    page.find_element(NEXT_ENABLED_SELECTOR)
        .await
        .context("Next-page button detached before it could be clicked")?
        .click()
        .await
        .context("Failed to click the next-page button")?;

    page.wait_for_navigation()
        .await
        .context("Failed to wait for the next results page to load")?;

    wait_for_selector(page, RESULT_SELECTOR).await?;
    wait_for_selector(page, NEXT_MARKER_SELECTOR).await?;

    Ok(())
}
