//! Date normalization for heterogeneously-typed spreadsheet cells.
//!
//! Inputs arrive as calendar values, legacy day-count serials, ISO strings,
//! or free text. Everything funnels into a `NaiveDate`: date-only by
//! construction, so there is no timezone to drift across.

use chrono::{Days, NaiveDate, NaiveDateTime};

use sla_model::CellValue;

/// Free-text formats tried when a string has no ISO prefix, date-only first.
const FALLBACK_DATE_FORMATS: [&str; 7] = [
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

const FALLBACK_DATETIME_FORMATS: [&str; 4] = [
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Day 0 of the legacy spreadsheet serial calendar.
///
/// The format's 1900 epoch counts a nonexistent 1900-02-29, so day 0 is
/// anchored two days before 1900-01-01; serials from March 1900 onward then
/// land exactly on the dates the legacy software displays.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// Converts a day-count serial to a calendar date.
///
/// Fractional parts (time of day) are floored away. Non-finite, negative,
/// and out-of-range serials yield `None`.
pub fn serial_to_date(value: f64) -> Option<NaiveDate> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let days = value.floor() as u64;
    serial_epoch().checked_add_days(Days::new(days))
}

/// Normalizes any cell into a date-only value, or `None` when it carries
/// nothing date-like. Never fails; unparseable input is simply absent.
pub fn normalize_date_value(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Empty | CellValue::Bool(_) => None,
        CellValue::Date(date) => Some(*date),
        CellValue::Number(serial) => serial_to_date(*serial),
        CellValue::Text(text) => parse_date_text(text),
    }
}

/// Parses a date from free text.
///
/// An ISO-like `YYYY-MM-DD` prefix wins outright and any time suffix is
/// ignored; otherwise the fallback format list is tried in order, truncating
/// datetimes to their date part.
pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if has_iso_prefix(trimmed) {
        return NaiveDate::parse_from_str(&trimmed[..10], "%Y-%m-%d").ok();
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

fn has_iso_prefix(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

/// `"YYYY-MM"` bucket key for a date, absent-safe.
pub fn format_month_key(date: Option<NaiveDate>) -> Option<String> {
    date.map(|value| value.format("%Y-%m").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn serial_one_is_the_day_after_the_epoch() {
        assert_eq!(serial_to_date(1.0), Some(ymd(1899, 12, 31)));
        assert_eq!(serial_to_date(0.0), Some(ymd(1899, 12, 30)));
    }

    #[test]
    fn serials_after_february_1900_match_displayed_dates() {
        // 2024-01-01 renders as serial 45292 in the legacy format.
        assert_eq!(serial_to_date(45292.0), Some(ymd(2024, 1, 1)));
        assert_eq!(serial_to_date(61.0), Some(ymd(1900, 3, 1)));
    }

    #[test]
    fn fractional_serials_floor_to_the_day() {
        assert_eq!(serial_to_date(45292.73), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn degenerate_serials_are_absent() {
        assert_eq!(serial_to_date(f64::NAN), None);
        assert_eq!(serial_to_date(f64::INFINITY), None);
        assert_eq!(serial_to_date(-3.0), None);
        assert_eq!(serial_to_date(1e18), None);
    }

    #[test]
    fn iso_prefix_ignores_time_suffix() {
        assert_eq!(parse_date_text("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("2024-03-05T10:22:00"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text(" 2024-03-05 10:22 "), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn fallback_formats_cover_common_spellings() {
        assert_eq!(parse_date_text("2024/03/05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("03/05/2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("5.3.2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("Mar 5, 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("5 March 2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date_text("not a date"), None);
        assert_eq!(parse_date_text(""), None);
    }

    #[test]
    fn cell_variants_normalize_consistently() {
        assert_eq!(
            normalize_date_value(&CellValue::Date(ymd(2024, 3, 5))),
            Some(ymd(2024, 3, 5))
        );
        assert_eq!(
            normalize_date_value(&CellValue::Number(45292.0)),
            Some(ymd(2024, 1, 1))
        );
        assert_eq!(normalize_date_value(&CellValue::Empty), None);
        assert_eq!(normalize_date_value(&CellValue::Bool(true)), None);
    }

    #[test]
    fn month_key_round_trips_and_is_absent_safe() {
        assert_eq!(
            format_month_key(Some(ymd(2024, 1, 31))),
            Some("2024-01".to_string())
        );
        assert_eq!(format_month_key(None), None);
    }
}
