pub mod browser_profile;
pub mod browser_setup;
pub mod config;
pub mod content_saver;
pub mod scrape;
pub mod utils;

pub use config::ScrapeConfig;
pub use content_saver::save_products;
pub use scrape::{
    BrowserWrapper, NOT_AVAILABLE, NextPageSignal, ProductRecord, extract_products,
    launch_browser, probe_next_page,
};
pub use utils::random_user_agent;

use anyhow::Result;

/// Scrape every results page for `search` and persist them under the
/// configured output directory. Convenience wrapper around [`scrape::run`].
pub async fn scrape(config: &ScrapeConfig, search: &str) -> Result<Vec<ProductRecord>> {
    scrape::run(config, search).await
}
