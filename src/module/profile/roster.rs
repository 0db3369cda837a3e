//! Roster extractor: coach section plus players table.

use scraper::ElementRef;
use tracing::warn;

use crate::document::{attr_of, find_all_in, find_first_in, text_of, Document};

use super::types::{Extraction, PlayerStatus, Role, RosterMember, SkipReason};

const SECTION: &str = "roster";

/// Extract the full roster in document order: the coach (if the coach
/// section exists) followed by players in row order.
///
/// A row or coach entry missing any required sub-element is skipped and
/// recorded; it never aborts the rest of the roster.
pub fn extract(doc: &Document) -> Extraction<RosterMember> {
    let mut out = Extraction::empty();

    if let Some(coach_section) = doc.find_first("table.coach-table") {
        match extract_coach(coach_section) {
            Ok(member) => out.items.push(member),
            Err(reason) => {
                warn!("{}", reason);
                out.skipped.push(reason);
            }
        }
    }

    let Some(tbody) = doc.find_first("table.players-table tbody") else {
        return out;
    };

    for (index, row) in find_all_in(tbody, "tr")
        .into_iter()
        .enumerate()
    {
        // Index 0 is reserved for the coach entry in skip reports.
        match extract_player(row, index + 1) {
            Ok(member) => out.items.push(member),
            Err(reason) => {
                warn!("{}", reason);
                out.skipped.push(reason);
            }
        }
    }

    out
}

fn extract_coach(section: ElementRef<'_>) -> Result<RosterMember, SkipReason> {
    let skip = |missing| SkipReason {
        section: SECTION,
        index: 0,
        missing,
    };

    let name = find_first_in(section, "div.text-ellipsis")
        .map(text_of)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| skip("coach name"))?;
    let image_url = find_first_in(section, "img.playerBox-bodyshot")
        .and_then(|img| attr_of(img, "src"))
        .ok_or_else(|| skip("coach image"))?;

    Ok(RosterMember {
        name,
        role: Role::Coach,
        image_url,
        status: None,
    })
}

fn extract_player(row: ElementRef<'_>, index: usize) -> Result<RosterMember, SkipReason> {
    let skip = |missing| SkipReason {
        section: SECTION,
        index,
        missing,
    };

    let first_cell = find_first_in(row, "td.playersBox-first-cell").ok_or_else(|| skip("name cell"))?;
    let name = find_first_in(first_cell, "div.text-ellipsis")
        .map(text_of)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| skip("player name"))?;
    let image_url = find_first_in(first_cell, "img.playerBox-bodyshot")
        .and_then(|img| attr_of(img, "src"))
        .ok_or_else(|| skip("player image"))?;
    let status = find_first_in(row, "div.player-status")
        .map(text_of)
        .and_then(|s| PlayerStatus::parse(&s))
        .ok_or_else(|| skip("player status"))?;

    Ok(RosterMember {
        name,
        role: Role::Player,
        image_url,
        status: Some(status),
    })
}
