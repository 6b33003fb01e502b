// End-to-end tests for the fetch-filter-emit pass, driven by raw ICS text
// the way the upstream scheduling system exports it.

use examfeed::pipeline;
use icalendar::{Calendar, Component, Event, EventLike};
use std::str::FromStr;

fn fixture_feed() -> String {
    [
        "BEGIN:VCALENDAR",
        "VERSION:2.0",
        "PRODID:-//Upstream Scheduler//EN",
        "BEGIN:VEVENT",
        "UID:event-1@upstream",
        "DTSTART:20260115T080000Z",
        "DTEND:20260115T120000Z",
        "SUMMARY:Aktivitetstyp Tentamen, BMA401, Moment: Fysiologi: Delmoment A",
        "LOCATION:Hus 5, sal 320",
        "DESCRIPTION:Ta med legitimation",
        "END:VEVENT",
        "BEGIN:VEVENT",
        "UID:event-2@upstream",
        "DTSTART:20260116T100000Z",
        "DTEND:20260116T120000Z",
        "SUMMARY:Föreläsning Biologi",
        "END:VEVENT",
        "BEGIN:VEVENT",
        "UID:event-3@upstream",
        "DTSTART:20260117T130000Z",
        "DTEND:20260117T150000Z",
        "SUMMARY:BMA451 Seminarium",
        "END:VEVENT",
        "END:VCALENDAR",
        "",
    ]
    .join("\r\n")
}

fn output_summaries(ics_output: &str) -> Vec<String> {
    let calendar = Calendar::from_str(ics_output).expect("output must be parseable ICS");
    calendar
        .components
        .iter()
        .filter_map(|c| c.as_event())
        .filter_map(|e| e.get_summary().map(|s| s.to_string()))
        .collect()
}

#[test]
fn keeps_exactly_the_exam_and_allowlisted_events() {
    let output = pipeline::clean_feed(&fixture_feed()).unwrap();
    let summaries = output_summaries(&output);

    assert_eq!(summaries.len(), 2);
    assert!(summaries.contains(&"Fysiologi".to_string()));
    assert!(summaries.contains(&"BMA451 Seminarium".to_string()));
    assert!(!output.contains("Föreläsning"));
}

#[test]
fn passes_other_fields_through_unmodified() {
    let output = pipeline::clean_feed(&fixture_feed()).unwrap();
    let calendar = Calendar::from_str(&output).unwrap();

    let exam: &Event = calendar
        .components
        .iter()
        .filter_map(|c| c.as_event())
        .find(|e| e.get_summary() == Some("Fysiologi"))
        .expect("cleaned exam event must be present");

    assert!(exam.get_start().is_some());
    assert!(exam.get_end().is_some());
    assert_eq!(exam.get_location(), Some("Hus 5, sal 320"));
    assert_eq!(exam.get_description(), Some("Ta med legitimation"));
    assert!(output.contains("DTSTART:20260115T080000Z"));
    assert!(output.contains("DTEND:20260115T120000Z"));
}

#[test]
fn output_carries_fixed_product_identifier() {
    let output = pipeline::clean_feed(&fixture_feed()).unwrap();

    let prodid_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("PRODID:"))
        .collect();
    assert_eq!(prodid_lines, vec!["PRODID:-//Cleaned HKR Calendar//EN"]);
    assert!(!output.contains("ICALENDAR-RS"));
    assert!(!output.contains("Upstream Scheduler"));

    let version_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("VERSION:"))
        .collect();
    assert_eq!(version_lines, vec!["VERSION:2.0"]);
}

#[test]
fn malformed_feed_is_an_error_not_partial_output() {
    let result = pipeline::clean_feed("DTSTART without any calendar around it");
    assert!(result.is_err());
}

#[test]
fn cleaning_never_changes_retention() {
    // The exam keyword sits outside the Moment: label, so the cleaned
    // summary ("Fysiologi") would NOT match the filter. The event must be
    // kept anyway: retention is decided on the raw summary.
    let output = pipeline::clean_feed(&fixture_feed()).unwrap();
    let summaries = output_summaries(&output);
    assert!(summaries.contains(&"Fysiologi".to_string()));
    assert!(!examfeed::should_keep(Some("Fysiologi")));
}
