//! Date normalization to `YYYY-MM-DD`.
//!
//! Source documents carry US-style `MM/DD/YYYY` dates as well as ISO dates
//! and timestamps. Anything that does not parse is returned unchanged, which
//! keeps verification links and empty values intact.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Normalize `raw` to `YYYY-MM-DD`, or return it unchanged.
///
/// Timestamps with an offset keep their local calendar date.
pub fn normalize_date(raw: &str) -> String {
    parse_date(raw.trim())
        .map(|d| d.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_else(|| {
            if !raw.is_empty() {
                tracing::debug!(raw, "date not recognized; passing through");
            }
            raw.to_owned()
        })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        })
}
