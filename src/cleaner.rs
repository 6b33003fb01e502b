//! Summary normalizer
//!
//! Rewrites a raw event summary into a clean display string: strips the
//! administrative "Aktivitetstyp" marker and denylisted course codes, then
//! extracts the "Moment:" course-module label when one is present.
//!
//! Cleaning is cosmetic and total: no input shape fails, the worst case is
//! the trimmed original text.

use lazy_static::lazy_static;
use regex::Regex;

/// Course codes stripped from summaries. The always-keep code BMA451 is
/// intentionally absent: it is meaningful and stays visible in output.
pub const DENYLISTED_CODES: &[&str] = &["BMA401", "BMK101", "KUBM26"];

/// Lab-module prefix whose trailing " : Okänd" placeholder is dropped
const HEMATOLOGY_LAB_PREFIX: &str = "Laboration Klinisk hematologi:";

lazy_static! {
    // Denylisted code as a whole word, plus a following comma and whitespace
    static ref COURSE_CODE_RE: Regex =
        Regex::new(r"\b(?:BMA401|BMK101|KUBM26)\b,?\s*").unwrap();

    // Comma left at the start of the text after code removal
    static ref LEADING_COMMA_RE: Regex = Regex::new(r"^\s*,\s*").unwrap();

    // "Moment:" only counts as a field marker when it is a whole-word token
    static ref MOMENT_RE: Regex = Regex::new(r"\bMoment:\s*(.*)").unwrap();

    // " : Okänd" placeholder the source system appends to some lab labels
    static ref UNKNOWN_SUFFIX_RE: Regex = Regex::new(r"\s*:\s*Okänd$").unwrap();
}

/// Cleans a raw event summary for display
///
/// Never fails; returns the empty string for `None` and falls through to
/// the trimmed original for text with no recognizable structure.
pub fn clean_summary(raw_summary: Option<&str>) -> String {
    let summary = match raw_summary {
        Some(s) => s,
        None => return String::new(),
    };

    // Administrative activity-type marker carries no information
    let summary = summary.replace("Aktivitetstyp", "");

    let summary = COURSE_CODE_RE.replace_all(&summary, "");
    let summary = LEADING_COMMA_RE.replace(&summary, "");

    if let Some(captures) = MOMENT_RE.captures(&summary) {
        let moment_text = captures[1].trim();

        if moment_text.starts_with(HEMATOLOGY_LAB_PREFIX) {
            return UNKNOWN_SUFFIX_RE.replace(moment_text, "").trim().to_string();
        }

        // Colon-delimited sub-fields after the module name are discarded
        return match moment_text.split_once(':') {
            Some((module, _)) => module.trim().to_string(),
            None => moment_text.to_string(),
        };
    }

    summary.trim().to_string()
}
