//! Conversions between the wire date-time format and what the browser widgets use.
//!
//! Appointment times travel as RFC 3339 in UTC with millisecond precision
//! (`2025-10-05T14:30:00.000Z`). The `datetime-local` input wants
//! `YYYY-MM-DDTHH:MM`, which is interpreted as UTC in both directions so that an
//! edit without changes round-trips exactly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const LOCAL_INPUT: &str = "%Y-%m-%dT%H:%M";
const LOCAL_INPUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Canonical storage form. Unparseable input is returned unchanged.
pub fn normalize_rfc3339(value: &str) -> String {
    match parse_rfc3339(value) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => value.to_string(),
    }
}

/// `2025-10-05T14:30:00.000Z` -> `2025-10-05T14:30`; empty when unparseable.
pub fn to_datetime_local(value: &str) -> String {
    parse_rfc3339(value)
        .map(|dt| dt.format(LOCAL_INPUT).to_string())
        .unwrap_or_default()
}

/// `2025-10-05T14:30` -> `2025-10-05T14:30:00.000Z`.
pub fn from_datetime_local(value: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value, LOCAL_INPUT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_INPUT_SECONDS))
        .ok()
        .map(|naive| {
            naive
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        })
}

/// Table rendering, e.g. `05/10/2025 14:30`.
pub fn format_display(value: &str) -> String {
    match parse_rfc3339(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// Parses the value of a `type="date"` input. Blank means "no bound".
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
