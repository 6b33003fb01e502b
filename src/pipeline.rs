//! Orchestration: fetch, parse, filter, clean, emit
//!
//! One stateless pass per run. Retention is decided on the RAW summary of
//! each event; the cleaned summary only appears in the emitted calendar.

use crate::cleaner::clean_summary;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::feed;
use crate::filter::should_keep;
use crate::models::ExamEvent;
use crate::utils::logging;
use icalendar::{Calendar as IcsCalendar, Component, Event as IcsEvent, EventLike};
use std::str::FromStr;
use std::time::Instant;

/// Product identifier for the emitted calendar
pub const PRODID: &str = "-//Cleaned HKR Calendar//EN";

/// Parse ICS text into event snapshots
///
/// A malformed feed is an error; there is no best-effort partial parse.
pub fn parse_events(ics_data: &str) -> AppResult<Vec<ExamEvent>> {
    // The parser is lenient and turns arbitrary text into an empty
    // calendar; a feed without a VCALENDAR envelope is malformed.
    if !ics_data.contains("BEGIN:VCALENDAR") {
        return Err(AppError::calendar(
            "Malformed feed: content does not contain BEGIN:VCALENDAR",
        ));
    }

    let calendar = IcsCalendar::from_str(ics_data)
        .map_err(|e| AppError::calendar(format!("Failed to parse ICS data: {}", e)))?;

    let mut events = Vec::new();
    for component in &calendar.components {
        if let Some(ics_event) = component.as_event() {
            events.push(ExamEvent::from_ics(ics_event));
        }
    }

    if events.is_empty() && !ics_data.is_empty() {
        log::warn!(
            "Parsed 0 events. ICS data size: {} bytes. First 100 chars: {:?}",
            ics_data.len(),
            ics_data.chars().take(100).collect::<String>()
        );
    } else {
        log::info!("Parsed {} events from ICS data", events.len());
    }

    Ok(events)
}

/// Build the output calendar from retained events
///
/// Each output VEVENT carries the cleaned summary; start/end/location/
/// description come through from the source unmodified.
pub fn build_calendar(events: &[ExamEvent]) -> IcsCalendar {
    let mut calendar = IcsCalendar::new();

    for event in events {
        let mut out = IcsEvent::new();
        out.summary(&clean_summary(event.raw_summary.as_deref()));
        if let Some(start) = &event.start {
            out.starts(start.clone());
        }
        if let Some(end) = &event.end {
            out.ends(end.clone());
        }
        out.location(event.location.as_deref().unwrap_or(""));
        out.description(event.description.as_deref().unwrap_or(""));
        calendar.push(out.done());
    }

    calendar
}

/// Rewrite the serialized calendar headers
///
/// The icalendar crate stamps its own PRODID and a CALSCALE line into every
/// serialized calendar. RFC 5545 allows exactly one PRODID and VERSION, so
/// the emitted text gets our product identifier by post-processing the
/// output rather than appending a second property.
fn rewrite_calendar_headers(ics_output: &str) -> String {
    let mut result = String::with_capacity(ics_output.len());
    for line in ics_output.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(PRODID);
            result.push_str("\r\n");
        } else if line.starts_with("CALSCALE:") {
            // Gregorian is the default; the line is noise
            continue;
        } else {
            result.push_str(line);
            result.push_str("\r\n");
        }
    }
    result
}

/// Filter and clean an ICS feed, returning the new calendar as text
///
/// Pure text-to-text transform; the network never enters here, which keeps
/// the whole pass testable against fixture feeds.
pub fn clean_feed(ics_data: &str) -> AppResult<String> {
    let events = parse_events(ics_data)?;
    let total = events.len();

    let kept: Vec<ExamEvent> = events
        .into_iter()
        .filter(|event| should_keep(event.raw_summary.as_deref()))
        .collect();

    log::info!("Retained {} of {} events", kept.len(), total);

    Ok(rewrite_calendar_headers(&build_calendar(&kept).to_string()))
}

/// Full run: validate the configured URL, fetch the feed, clean it
pub async fn run(config: &Config) -> AppResult<String> {
    let start_time = Instant::now();

    feed::validate_feed_url_format(&config.feed_url)?;

    log::info!("Fetching ICS data from URL: {}", config.feed_url);
    let ics_data = feed::fetch_ics_data(&config.feed_url).await?;
    log::info!("Fetched {} bytes of ICS data", ics_data.len());

    let output = clean_feed(&ics_data)?;

    logging::log_feed_cleaned(&config.feed_url, start_time.elapsed().as_millis() as u64);
    Ok(output)
}
