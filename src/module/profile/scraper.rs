//! Extraction orchestrator.
//!
//! Runs the full pipeline sequentially: one fresh browser session per
//! logical page section, each rendered document handed to its extractor
//! and dropped before the next session opens. Session failures propagate
//! and abort the run; parsing anomalies degrade per section.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::ScraperConfig;
use crate::session::BrowserSession;

use super::matches::{self, MatchSection};
use super::snapshot;
use super::types::TeamDataset;
use super::{events, roster};

pub struct ProfileScraper {
    config: ScraperConfig,
    session: BrowserSession,
}

impl ProfileScraper {
    pub fn new(config: ScraperConfig) -> Self {
        let session = BrowserSession::new(
            Duration::from_secs(config.settle_delay_secs),
            config.render_marker.clone(),
        );
        Self { config, session }
    }

    /// Run the four extractions and assemble the dataset.
    ///
    /// The recent and upcoming sections live on the same matches tab but
    /// are still fetched in separate sessions, matching the one-session-
    /// per-section isolation rule.
    pub async fn scrape(&self) -> Result<TeamDataset> {
        info!("Starting profile extraction for {}", self.config.team_name);

        let roster = {
            let doc = self.session.acquire(&self.config.roster_url).await?;
            roster::extract(&doc)
        };
        info!("Roster: {} entries", roster.items.len());

        let recent = {
            let doc = self.session.acquire(&self.config.matches_url).await?;
            matches::extract(&doc, &MatchSection::recent(&self.config.team_name))
        };

        let upcoming = {
            let doc = self.session.acquire(&self.config.matches_url).await?;
            matches::extract(&doc, &MatchSection::upcoming(&self.config.team_name))
        };

        let events = {
            let doc = self.session.acquire(&self.config.events_url).await?;
            events::extract(&doc)
        };
        info!("Events: {} entries", events.items.len());

        Ok(snapshot::assemble(roster, recent, upcoming, events))
    }

    /// Scrape and persist the snapshot to the configured output path.
    pub async fn run(&self) -> Result<()> {
        let dataset = self.scrape().await?;
        snapshot::save(&dataset, &self.config.output_path).await?;
        Ok(())
    }
}
