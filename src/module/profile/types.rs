//! Team-profile data model and snapshot JSON shapes.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel written in place of a match array when the section was not found.
pub const NO_MATCHES: &str = "No matches";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Coach,
}

/// Roster status badge as displayed on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerStatus {
    Active,
    Benched,
}

impl PlayerStatus {
    /// Parse the status cell text, case-insensitively. Anything else is
    /// treated as a missing field by the roster extractor.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("active") {
            Some(Self::Active)
        } else if text.eq_ignore_ascii_case("benched") {
            Some(Self::Benched)
        } else {
            None
        }
    }
}

/// One roster entry, coach or player, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub name: String,
    pub role: Role,
    pub image_url: String,
    /// Present for players only; coaches never carry a status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
}

/// One match row. Scores are present for completed (recent) matches only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team1: String,
    pub team2: String,
    pub logo1: String,
    pub logo2: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score2: Option<String>,
}

/// Either an ordered list of matches, or the distinguished "section was not
/// found" sentinel. `Matches(vec![])` means the section was present with
/// zero surviving rows, which is a different statement than [`Absent`].
///
/// [`Absent`]: MatchList::Absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchList {
    Absent,
    Matches(Vec<Match>),
}

impl Serialize for MatchList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchList::Absent => serializer.serialize_str(NO_MATCHES),
            MatchList::Matches(matches) => matches.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MatchList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Matches(Vec<Match>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(s) if s == NO_MATCHES => Ok(MatchList::Absent),
            Repr::Sentinel(s) => Err(D::Error::custom(format!(
                "expected {:?} or a match array, got string {:?}",
                NO_MATCHES, s
            ))),
            Repr::Matches(matches) => Ok(MatchList::Matches(matches)),
        }
    }
}

/// One upcoming tournament entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub start_date: String,
    /// Empty when the page does not nest an end-date marker for this event.
    pub end_date: String,
}

/// The canonical point-in-time snapshot written to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDataset {
    pub roster: Vec<RosterMember>,
    pub recent_matches: MatchList,
    pub upcoming_matches: MatchList,
    pub events: Vec<Event>,
}

/// Why one item (row, event, coach entry) was dropped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    /// Section label, e.g. "roster" or "recent matches"
    pub section: &'static str,
    /// Zero-based item index within the section
    pub index: usize,
    /// The sub-element or field that failed to resolve
    pub missing: &'static str,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} item {} skipped: missing {}",
            self.section, self.index, self.missing
        )
    }
}

/// Extractor output: surviving items plus a record of everything skipped.
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub skipped: Vec<SkipReason>,
}

impl<T> Extraction<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Match-extractor output: the list (or sentinel) plus skipped-row reasons.
#[derive(Debug, Clone)]
pub struct MatchExtraction {
    pub list: MatchList,
    pub skipped: Vec<SkipReason>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_serializes_as_string() {
        let json = serde_json::to_string(&MatchList::Absent).unwrap();
        assert_eq!(json, "\"No matches\"");
    }

    #[test]
    fn test_empty_list_is_not_the_sentinel() {
        let json = serde_json::to_string(&MatchList::Matches(Vec::new())).unwrap();
        assert_eq!(json, "[]");
        let back: MatchList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MatchList::Matches(Vec::new()));
        assert_ne!(back, MatchList::Absent);
    }

    #[test]
    fn test_sentinel_round_trip() {
        let back: MatchList = serde_json::from_str("\"No matches\"").unwrap();
        assert_eq!(back, MatchList::Absent);
        assert!(serde_json::from_str::<MatchList>("\"Something else\"").is_err());
    }

    #[test]
    fn test_coach_entry_has_no_status_key() {
        let coach = RosterMember {
            name: "guerri".to_string(),
            role: Role::Coach,
            image_url: "https://img/guerri.png".to_string(),
            status: None,
        };
        let json = serde_json::to_value(&coach).unwrap();
        assert_eq!(json["role"], "coach");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_player_status_parse() {
        assert_eq!(PlayerStatus::parse(" ACTIVE "), Some(PlayerStatus::Active));
        assert_eq!(PlayerStatus::parse("Benched"), Some(PlayerStatus::Benched));
        assert_eq!(PlayerStatus::parse("STAND-IN"), None);
        assert_eq!(PlayerStatus::parse(""), None);
    }

    #[test]
    fn test_upcoming_match_omits_scores() {
        let m = Match {
            team1: "FURIA".to_string(),
            team2: "NAVI".to_string(),
            logo1: "l1".to_string(),
            logo2: "l2".to_string(),
            date: "2026-09-01".to_string(),
            score1: None,
            score2: None,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("score1").is_none());
        assert!(json.get("score2").is_none());
    }
}
