//! Scrape configuration
//!
//! Everything the orchestrator depends on is resolved up front and injected,
//! including the client-identity string, so a run is deterministic given its
//! configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};

use crate::utils::{DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT, DEFAULT_VIEWPORT, STORE_URL};

/// Configuration for one scrape session
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    start_url: String,
    user_agent: String,
    viewport: (u32, u32),
    output_dir: PathBuf,
    headless: bool,
    request_timeout: Duration,
}

impl ScrapeConfig {
    /// Start building a configuration. The user agent is the one required
    /// field; see [`crate::utils::random_user_agent`] for the usual source.
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }

    /// Landing page the session opens first
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    /// Client-identity string presented by the browser
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fixed window size as (width, height)
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Directory the result file is written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether Chromium runs without a visible window
    pub fn headless(&self) -> bool {
        self.headless
    }

    /// CDP request timeout for the page-automation layer
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

/// Builder for [`ScrapeConfig`]
pub struct ScrapeConfigBuilder {
    start_url: String,
    user_agent: Option<String>,
    viewport: (u32, u32),
    output_dir: PathBuf,
    headless: bool,
    request_timeout: Duration,
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self {
            start_url: STORE_URL.to_string(),
            user_agent: None,
            viewport: DEFAULT_VIEWPORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            headless: true,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ScrapeConfigBuilder {
    pub fn start_url(mut self, url: impl Into<String>) -> Self {
        self.start_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Validate and build.
    ///
    /// Validation covers the configuration's own fields only; the search
    /// term is not part of the configuration and is never validated.
    pub fn build(self) -> Result<ScrapeConfig> {
        let Some(user_agent) = self.user_agent else {
            bail!("A user agent is required; pick one with random_user_agent()");
        };
        if user_agent.trim().is_empty() {
            bail!("The user agent must not be empty");
        }
        if self.start_url.trim().is_empty() {
            bail!("The start URL must not be empty");
        }

        Ok(ScrapeConfig {
            start_url: self.start_url,
            user_agent,
            viewport: self.viewport,
            output_dir: self.output_dir,
            headless: self.headless,
            request_timeout: self.request_timeout,
        })
    }
}
