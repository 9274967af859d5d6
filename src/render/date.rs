//! Bilingual date rendering for the certificate body.
//!
//! Dates arrive as free-form strings from the participant table. Parsing is
//! best-effort over the common human formats; anything unparseable is passed
//! through unchanged so a bad cell degrades to literal text instead of
//! failing the record. Month names come from embedded tables, never from the
//! host locale.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Month-first before day-first so ambiguous slash dates resolve the way the
// rest of the tooling around this service expects; day-first still catches
// values like 25/12/2025 where month-first cannot parse.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    // Spreadsheet exports often carry a time component.
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// "5 Agustus 2025"; returns `raw` unchanged when parsing fails.
pub fn format_indonesian(raw: &str) -> String {
    match parse_flexible(raw) {
        Some(d) => format!(
            "{} {} {}",
            d.day(),
            MONTHS_ID[d.month0() as usize],
            d.year()
        ),
        None => raw.to_string(),
    }
}

/// "August 5, 2025" (no leading zero on the day); returns `raw` unchanged
/// when parsing fails.
pub fn format_english(raw: &str) -> String {
    match parse_flexible(raw) {
        Some(d) => format!(
            "{} {}, {}",
            MONTHS_EN[d.month0() as usize],
            d.day(),
            d.year()
        ),
        None => raw.to_string(),
    }
}
