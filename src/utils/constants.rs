//! Shared configuration constants
//!
//! Default values used throughout the crate to keep tunables in one place
//! and avoid magic numbers at call sites.

use std::time::Duration;

use rand::Rng;

/// Landing page of the target storefront
pub const STORE_URL: &str = "https://www.amazon.com";

/// Default viewport (width, height)
///
/// A common desktop window size; results pages lay product cards out
/// differently at mobile widths, which would change the markup the
/// selectors point at.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1600, 900);

/// Default directory (relative to the working directory) for result files
pub const DEFAULT_OUTPUT_DIR: &str = "scraped";

/// Ceiling for a single selector wait
///
/// `wait_for_navigation` only covers the HTTP response; client-side
/// rendering afterwards can take several seconds on slow connections.
pub const SELECTOR_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Poll interval while waiting for a selector to attach
pub const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// CDP request timeout passed to the browser config
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool of desktop user agents
///
/// One is picked per session so repeated runs don't present a single fixed
/// client identity to the site.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Edge/123.0.0.0 Safari/537.36",
];

/// Pick a client-identity string from the pool.
///
/// Callers resolve the identity once and inject it into the configuration,
/// keeping the scrape itself deterministic for a given identity.
pub fn random_user_agent() -> String {
    let idx = rand::rng().random_range(0..USER_AGENTS.len());
    USER_AGENTS[idx].to_string()
}
