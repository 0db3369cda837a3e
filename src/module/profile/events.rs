//! Event extractor: upcoming tournaments from the events tab.

use scraper::ElementRef;
use tracing::warn;

use crate::document::{find_all_in, find_first_in, text_of, Document};

use super::types::{Event, Extraction, SkipReason};

const SECTION: &str = "events";

/// Extract upcoming events in document order.
///
/// A missing events container yields an empty extraction; events lacking a
/// name or date container are skipped individually.
pub fn extract(doc: &Document) -> Extraction<Event> {
    let Some(holder) = doc.find_first("div.upcoming-events-holder") else {
        return Extraction::empty();
    };

    let mut out = Extraction::empty();

    for (index, block) in find_all_in(holder, "div.content").into_iter().enumerate() {
        match extract_event(block, index) {
            Ok(event) => out.items.push(event),
            Err(reason) => {
                warn!("{}", reason);
                out.skipped.push(reason);
            }
        }
    }

    out
}

fn extract_event(block: ElementRef<'_>, index: usize) -> Result<Event, SkipReason> {
    let skip = |missing| SkipReason {
        section: SECTION,
        index,
        missing,
    };

    let name = find_first_in(block, "div.eventbox-eventname")
        .map(text_of)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| skip("event name"))?;
    let date_container = find_first_in(block, "div.eventbox-date").ok_or_else(|| skip("date container"))?;

    let spans = find_all_in(date_container, "span");
    let start_date = spans
        .first()
        .map(|s| text_of(*s))
        .filter(|d| !d.is_empty())
        .ok_or_else(|| skip("start date"))?;

    // The site marks the end of the range with a span nested inside one of
    // the date spans. Resolved fresh for every event: an event without the
    // marker gets an empty end date, never a value left over from an
    // earlier iteration.
    let end_date = spans
        .iter()
        .find_map(|span| find_first_in(*span, "span"))
        .map(text_of)
        .unwrap_or_default();

    Ok(Event {
        name,
        start_date,
        end_date,
    })
}
