//! Dataset assembly and durable snapshot persistence.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, warn};

use super::types::{Event, Extraction, MatchExtraction, RosterMember, TeamDataset};

/// Merge the four extractor outputs into one dataset, logging a structured
/// summary of everything the tolerance policy dropped along the way.
pub fn assemble(
    roster: Extraction<RosterMember>,
    recent: MatchExtraction,
    upcoming: MatchExtraction,
    events: Extraction<Event>,
) -> TeamDataset {
    let skipped: Vec<_> = roster
        .skipped
        .iter()
        .chain(recent.skipped.iter())
        .chain(upcoming.skipped.iter())
        .chain(events.skipped.iter())
        .collect();

    if skipped.is_empty() {
        info!(
            "Assembled dataset: {} roster entries, {} events, no skipped items",
            roster.items.len(),
            events.items.len()
        );
    } else {
        warn!("{} item(s) skipped during extraction:", skipped.len());
        for reason in &skipped {
            warn!("  {}", reason);
        }
    }

    TeamDataset {
        roster: roster.items,
        recent_matches: recent.list,
        upcoming_matches: upcoming.list,
        events: events.items,
    }
}

/// Write the dataset as pretty-printed JSON, atomically.
///
/// The document is written to a `.tmp` sibling first and renamed over the
/// target, so a concurrent reader never observes a partially written file.
pub async fn save(dataset: &TeamDataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let json = serde_json::to_string_pretty(dataset)
        .context("Failed to serialize dataset to JSON")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .await
        .with_context(|| format!("Failed to write temporary snapshot: {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to move snapshot into place: {:?}", path))?;

    info!("Saved dataset snapshot to: {:?}", path);
    Ok(())
}

/// Read a previously saved snapshot back.
pub async fn load(path: impl AsRef<Path>) -> Result<TeamDataset> {
    let json = fs::read_to_string(path.as_ref())
        .await
        .with_context(|| format!("Failed to read snapshot: {:?}", path.as_ref()))?;
    let dataset: TeamDataset =
        serde_json::from_str(&json).context("Failed to deserialize snapshot")?;
    Ok(dataset)
}
