//! Team-profile extraction module.
//!
//! Turns the rendered HLTV team-profile tabs (roster, matches, events) into
//! one canonical [`TeamDataset`] snapshot, tolerating missing fields, rows,
//! and whole sections without aborting the run.

pub mod events;
pub mod matches;
pub mod roster;
pub mod scraper;
pub mod snapshot;
pub mod types;

pub use scraper::ProfileScraper;
pub use types::{Event, Match, MatchList, RosterMember, TeamDataset};
