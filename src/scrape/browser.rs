//! Browser session lifecycle
//!
//! Wraps the chromiumoxide browser, its CDP event-handler task, and the
//! profile directory so one scrape owns exactly one session and the session
//! is torn down on every exit path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use futures::StreamExt;
use tokio::task::{self, JoinHandle};
use tracing::{info, warn};

use crate::browser_profile::create_unique_profile_with_prefix;
use crate::browser_setup::{download_managed_browser, find_browser_executable};
use crate::config::ScrapeConfig;

/// Wrapper for the browser and its event-handler task.
///
/// The handler MUST be aborted when the session ends, otherwise it keeps
/// running after the browser process is gone. [`BrowserWrapper::shutdown`]
/// is the intended exit; `Drop` is only a backstop for early-error paths.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    fn new(browser: Browser, handler: JoinHandle<()>, user_data_dir: PathBuf) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        }
    }

    /// Get reference to the inner browser
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser, wait for the process to exit, remove the profile.
    ///
    /// Errors during teardown are logged rather than propagated; by this
    /// point the scrape outcome is already decided and a half-dead Chrome
    /// must not mask it.
    pub async fn shutdown(mut self) {
        info!("Shutting down browser session");

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
        }

        self.cleanup_temp_dir();
    }

    /// Remove the profile directory (blocking; may run from Drop context).
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up profile directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        // Browser::drop kills the Chrome process if close() was never called

        if self.user_data_dir.is_some() {
            warn!("BrowserWrapper dropped without explicit shutdown - removing profile dir in Drop");
            self.cleanup_temp_dir();
        }
    }
}

/// Launch a Chromium session configured from `config`.
///
/// The client-identity string and viewport come from the configuration; the
/// profile directory is unique per session, with ownership of its cleanup
/// transferred into the returned wrapper.
pub async fn launch_browser(config: &ScrapeConfig) -> Result<BrowserWrapper> {
    let chrome_path = match find_browser_executable().await {
        Ok(path) => path,
        Err(_) => download_managed_browser().await?,
    };

    let profile = create_unique_profile_with_prefix("cartscrape_chrome")?;
    let (width, height) = config.viewport();

    let mut builder = BrowserConfigBuilder::default()
        .request_timeout(config.request_timeout())
        .window_size(width, height)
        .user_data_dir(profile.path())
        .chrome_executable(chrome_path)
        .arg(format!("--user-agent={}", config.user_agent()))
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--no-sandbox")
        .arg("--disable-extensions")
        .arg("--disable-notifications")
        .arg("--disable-popup-blocking")
        .arg("--hide-scrollbars")
        .arg("--mute-audio");

    builder = if config.headless() {
        builder.headless_mode(HeadlessMode::default())
    } else {
        builder.with_head()
    };

    let browser_config = builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    info!("Launching browser (viewport {width}x{height})");

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .context("Failed to launch browser")?;

    // The handler must be polled for the CDP connection to make progress
    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                tracing::error!("Browser handler error: {e:?}");
            }
        }
    });

    Ok(BrowserWrapper::new(browser, handler_task, profile.into_path()))
}
