//! Event filter
//!
//! Decides from the RAW summary text whether an event is exam-related and
//! should stay in the output calendar. Filtering always looks at the
//! unmodified source summary, never the cleaned one, so cosmetic cleanup
//! can never change which events survive.

/// Course code that is always kept, regardless of keyword matches
pub const ALWAYS_KEEP_CODE: &str = "bma451";

/// Keyword stems that mark an event as exam-related (matched lowercase).
/// Substring matching is deliberate: "tentamen" also hits inside
/// "omtentamen", which should be kept anyway.
pub const EXAM_KEYWORDS: &[&str] = &[
    "omtentamen",
    "salstentamen",
    "tentamen",
    "muntlig tentamen",
    "dugga",
    "examination",
    "omexamination",
];

/// Returns true if the event should be kept in the output calendar
///
/// Pure predicate, case-insensitive. Keeps the event if the summary
/// contains the always-keep course code or any exam keyword.
pub fn should_keep(raw_summary: Option<&str>) -> bool {
    let summary = match raw_summary {
        Some(s) => s,
        None => return false,
    };

    let text = summary.to_lowercase();

    if text.contains(ALWAYS_KEEP_CODE) {
        return true;
    }

    EXAM_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
