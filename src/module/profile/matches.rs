//! Match extractor, parametrized over the recent-results and
//! upcoming-matches sections of the matches tab.
//!
//! The two sections share their row structure; only the heading text and
//! the presence of score spans differ, so one extractor covers both.

use scraper::ElementRef;
use tracing::{debug, warn};

use crate::document::{attr_of, find_all_in, find_first_in, next_element, text_of, Document};

use super::types::{Match, MatchExtraction, MatchList, SkipReason};

/// Which match section to extract, and whether its rows carry scores.
pub struct MatchSection {
    pub heading: String,
    pub with_scores: bool,
    section_label: &'static str,
}

impl MatchSection {
    /// Completed matches: "Recent results for {team}", rows carry scores.
    pub fn recent(team: &str) -> Self {
        Self {
            heading: format!("Recent results for {}", team),
            with_scores: true,
            section_label: "recent matches",
        }
    }

    /// Fixtures: "Upcoming matches for {team}", rows carry no scores.
    pub fn upcoming(team: &str) -> Self {
        Self {
            heading: format!("Upcoming matches for {}", team),
            with_scores: false,
            section_label: "upcoming matches",
        }
    }
}

/// Extract one match section.
///
/// A missing heading or a heading with no following container yields the
/// [`MatchList::Absent`] sentinel — a normal outcome, not an error. Rows
/// missing required fields for the configured variant are skipped
/// individually; the rest of the section is still returned.
pub fn extract(doc: &Document, section: &MatchSection) -> MatchExtraction {
    let Some(heading) = doc
        .find_all("h2")
        .into_iter()
        .find(|h2| text_of(*h2) == section.heading)
    else {
        debug!("No heading {:?} on page, section absent", section.heading);
        return MatchExtraction {
            list: MatchList::Absent,
            skipped: Vec::new(),
        };
    };

    // The row container immediately follows the heading. A heading with
    // nothing after it counts as a malformed section and degrades to the
    // sentinel rather than an error.
    let Some(container) = next_element(heading) else {
        warn!(
            "Heading {:?} has no following container, treating section as absent",
            section.heading
        );
        return MatchExtraction {
            list: MatchList::Absent,
            skipped: Vec::new(),
        };
    };

    let mut matches = Vec::new();
    let mut skipped = Vec::new();

    for (index, row) in find_all_in(container, "tr.team-row").into_iter().enumerate() {
        match extract_row(row, section, index) {
            Ok(m) => matches.push(m),
            Err(reason) => {
                warn!("{}", reason);
                skipped.push(reason);
            }
        }
    }

    MatchExtraction {
        list: MatchList::Matches(matches),
        skipped,
    }
}

fn extract_row(
    row: ElementRef<'_>,
    section: &MatchSection,
    index: usize,
) -> Result<Match, SkipReason> {
    let skip = |missing| SkipReason {
        section: section.section_label,
        index,
        missing,
    };

    let team1 = find_first_in(row, "a.team-1")
        .map(text_of)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| skip("team 1 name"))?;
    let team2 = find_first_in(row, "a.team-2")
        .map(text_of)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| skip("team 2 name"))?;

    let logos = find_all_in(row, "img.team-logo");
    if logos.len() < 2 {
        return Err(skip("team logos"));
    }
    let logo1 = attr_of(logos[0], "src").ok_or_else(|| skip("team 1 logo src"))?;
    let logo2 = attr_of(logos[1], "src").ok_or_else(|| skip("team 2 logo src"))?;

    let date = find_first_in(row, "td.date-cell")
        .and_then(|cell| find_first_in(cell, "span"))
        .map(text_of)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| skip("date"))?;

    let (score1, score2) = if section.with_scores {
        let scores = find_all_in(row, "span.score");
        if scores.len() < 2 {
            return Err(skip("scores"));
        }
        (Some(text_of(scores[0])), Some(text_of(scores[1])))
    } else {
        (None, None)
    };

    Ok(Match {
        team1,
        team2,
        logo1,
        logo2,
        date,
        score1,
        score2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_row(team1: &str, team2: &str, date: &str, scores: Option<(&str, &str)>) -> String {
        let score_cell = match scores {
            Some((s1, s2)) => format!(
                r#"<td><span class="score">{s1}</span> - <span class="score">{s2}</span></td>"#
            ),
            None => String::new(),
        };
        format!(
            r#"<tr class="team-row">
                 <td><img class="team-logo" src="https://img/{team1}.png">
                     <a class="team-1">{team1}</a></td>
                 <td><img class="team-logo" src="https://img/{team2}.png">
                     <a class="team-2">{team2}</a></td>
                 {score_cell}
                 <td class="date-cell"><span>{date}</span></td>
               </tr>"#
        )
    }

    fn matches_page(heading: &str, rows: &str) -> String {
        format!(
            r#"<html><body><div class="contentCol">
                 <h2>{heading}</h2>
                 <table><tbody>{rows}</tbody></table>
               </div></body></html>"#
        )
    }

    #[test]
    fn test_missing_heading_yields_sentinel() {
        let doc = Document::parse("<html><body><h2>Some other page</h2></body></html>");
        let result = extract(&doc, &MatchSection::recent("FURIA"));
        assert_eq!(result.list, MatchList::Absent);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_heading_without_container_yields_sentinel() {
        let doc =
            Document::parse("<html><body><div><h2>Recent results for FURIA</h2></div></body></html>");
        let result = extract(&doc, &MatchSection::recent("FURIA"));
        assert_eq!(result.list, MatchList::Absent);
    }

    #[test]
    fn test_recent_rows_in_document_order_with_scores() {
        let rows = match_row("FURIA", "NAVI", "12/8/2026", Some(("16", "9")))
            + &match_row("FURIA", "Spirit", "10/8/2026", Some(("13", "16")));
        let doc = Document::parse(&matches_page("Recent results for FURIA", &rows));

        let result = extract(&doc, &MatchSection::recent("FURIA"));
        let MatchList::Matches(matches) = result.list else {
            panic!("expected a match list");
        };
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].team2, "NAVI");
        assert_eq!(matches[0].score1.as_deref(), Some("16"));
        assert_eq!(matches[0].score2.as_deref(), Some("9"));
        assert_eq!(matches[1].team2, "Spirit");
        assert_eq!(matches[1].logo2, "https://img/Spirit.png");
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_recent_row_with_one_score_is_skipped_others_survive() {
        let one_score = r#"<tr class="team-row">
            <td><img class="team-logo" src="https://img/a.png"><a class="team-1">FURIA</a></td>
            <td><img class="team-logo" src="https://img/b.png"><a class="team-2">MOUZ</a></td>
            <td><span class="score">16</span></td>
            <td class="date-cell"><span>9/8/2026</span></td>
          </tr>"#;
        let rows =
            match_row("FURIA", "NAVI", "12/8/2026", Some(("16", "9"))).to_string() + one_score;
        let doc = Document::parse(&matches_page("Recent results for FURIA", &rows));

        let result = extract(&doc, &MatchSection::recent("FURIA"));
        let MatchList::Matches(matches) = result.list else {
            panic!("expected a match list");
        };
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].team2, "NAVI");
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].missing, "scores");
        assert_eq!(result.skipped[0].index, 1);
    }

    #[test]
    fn test_upcoming_rows_have_no_scores() {
        let rows = match_row("FURIA", "Vitality", "1/9/2026", None);
        let doc = Document::parse(&matches_page("Upcoming matches for FURIA", &rows));

        let result = extract(&doc, &MatchSection::upcoming("FURIA"));
        let MatchList::Matches(matches) = result.list else {
            panic!("expected a match list");
        };
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score1, None);
        assert_eq!(matches[0].score2, None);
    }

    #[test]
    fn test_upcoming_heading_does_not_match_recent_section() {
        let rows = match_row("FURIA", "NAVI", "12/8/2026", Some(("16", "9")));
        let doc = Document::parse(&matches_page("Recent results for FURIA", &rows));
        let result = extract(&doc, &MatchSection::upcoming("FURIA"));
        assert_eq!(result.list, MatchList::Absent);
    }

    #[test]
    fn test_present_section_with_zero_rows_is_empty_list() {
        let doc = Document::parse(&matches_page("Recent results for FURIA", ""));
        let result = extract(&doc, &MatchSection::recent("FURIA"));
        assert_eq!(result.list, MatchList::Matches(Vec::new()));
    }

    #[test]
    fn test_row_missing_team_anchor_is_skipped() {
        let no_team2 = r#"<tr class="team-row">
            <td><img class="team-logo" src="https://img/a.png"><a class="team-1">FURIA</a></td>
            <td><img class="team-logo" src="https://img/b.png"></td>
            <td class="date-cell"><span>1/9/2026</span></td>
          </tr>"#;
        let doc = Document::parse(&matches_page("Upcoming matches for FURIA", no_team2));
        let result = extract(&doc, &MatchSection::upcoming("FURIA"));
        assert_eq!(result.list, MatchList::Matches(Vec::new()));
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].missing, "team 2 name");
    }
}
