use icalendar::{Component, DatePerhapsTime, Event as IcsEvent, EventLike};

/// Immutable snapshot of one VEVENT from the source feed
///
/// Only the summary is ever rewritten; start/end/location/description pass
/// through to the output calendar untouched. Timestamps keep whatever form
/// the source used (no timezone normalization).
#[derive(Debug, Clone)]
pub struct ExamEvent {
    pub raw_summary: Option<String>,
    pub start: Option<DatePerhapsTime>,
    pub end: Option<DatePerhapsTime>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl ExamEvent {
    pub fn from_ics(ics_event: &IcsEvent) -> Self {
        Self {
            raw_summary: ics_event.get_summary().map(|s| s.to_string()),
            start: ics_event.get_start(),
            end: ics_event.get_end(),
            location: ics_event.get_location().map(|s| s.to_string()),
            description: ics_event.get_description().map(|s| s.to_string()),
        }
    }
}
