//! Headless-browser session lifecycle.
//!
//! One Chrome process is launched per [`acquire`](BrowserSession::acquire)
//! call and torn down before the call returns, on every exit path. Sessions
//! are never pooled or reused across extractions, so stale DOM state from
//! one page cannot leak into the next.

use std::ffi::OsStr;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::document::Document;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The browser process could not be started. Fatal: aborts the run.
    #[error("failed to launch headless browser: {0:#}")]
    Launch(anyhow::Error),

    /// Navigation or content retrieval failed for one page.
    #[error("failed to load {url}: {cause:#}")]
    Navigation { url: String, cause: anyhow::Error },
}

/// Per-call browser session factory.
pub struct BrowserSession {
    settle_delay: Duration,
    render_marker: String,
}

impl BrowserSession {
    pub fn new(settle_delay: Duration, render_marker: impl Into<String>) -> Self {
        Self {
            settle_delay,
            render_marker: render_marker.into(),
        }
    }

    /// Fetch `url` in a fresh headless browser and return the rendered page
    /// as a queryable [`Document`].
    ///
    /// Waits for the configured render marker to appear, bounded by the
    /// settle delay; if the marker never shows up the page is parsed as-is
    /// and missing content surfaces as absent sections downstream.
    pub async fn acquire(&self, url: &str) -> Result<Document, SessionError> {
        let launch_options = LaunchOptions {
            headless: true,
            sandbox: false,
            args: vec![OsStr::new("--disable-dev-shm-usage")],
            ..Default::default()
        };

        // Browser is scoped to this call; dropping it ends the Chrome process.
        let browser = Browser::new(launch_options).map_err(SessionError::Launch)?;

        let tab = browser.new_tab().map_err(SessionError::Launch)?;

        info!("Navigating to: {}", url);
        tab.navigate_to(url).map_err(|e| SessionError::Navigation {
            url: url.to_string(),
            cause: e,
        })?;
        tab.wait_until_navigated()
            .map_err(|e| SessionError::Navigation {
                url: url.to_string(),
                cause: e,
            })?;

        // Client-side rendering readiness: wait for the marker element with a
        // bounded timeout instead of a blind full-length sleep. A timeout is
        // not fatal; extraction proceeds against whatever has rendered.
        match tab.wait_for_element_with_custom_timeout(&self.render_marker, self.settle_delay) {
            Ok(_) => debug!("Render marker {:?} appeared", self.render_marker),
            Err(e) => warn!(
                "Render marker {:?} not seen within {:?}, parsing page as-is: {}",
                self.render_marker, self.settle_delay, e
            ),
        }

        // Short residual settle so late hydration after the marker lands too.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let html = tab.get_content().map_err(|e| SessionError::Navigation {
            url: url.to_string(),
            cause: e,
        })?;

        debug!("Fetched {} bytes of rendered HTML from {}", html.len(), url);
        Ok(Document::parse(&html))
    }
}
