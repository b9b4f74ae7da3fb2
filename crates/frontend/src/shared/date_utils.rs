//! Utilities for date and time handling
//!
//! Month inputs work with "YYYY-MM", the backend with "YYYY-MM-DD".
//! Malformed input yields "" instead of an error; callers treat "" as
//! "undetermined".

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use contracts::domain::a002_contract::window::{self, ContractStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// "2024-05" -> "2024-05-01" (no validation)
pub fn month_to_date(month: &str) -> String {
    format!("{}-01", month)
}

/// Backend date (or any parseable date) -> "YYYY-MM"
///
/// Returns "" for empty or unparseable input.
pub fn date_to_month(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    if is_date_prefixed(value) {
        return value[..7].to_string();
    }

    parse_loose_date(value)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// Fast-path check for "YYYY-MM-DD..."
fn is_date_prefixed(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

/// Parse the date forms seen at the UI boundary
///
/// Timestamps keep their own calendar day (no conversion to local time).
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y/%m/%d") {
        return Some(d);
    }
    // bare month, e.g. "2024-05"
    NaiveDate::parse_from_str(&format!("{}-01", value), DATE_FORMAT).ok()
}

/// "YYYY-MM" -> next month, carrying into the year
///
/// "2024-12" -> "2025-01"; "" -> ""
pub fn add_one_month(month: &str) -> String {
    let Some((year, month)) = parse_month(month) else {
        return String::new();
    };

    let (year, month) = if month == 12 {
        match year.checked_add(1) {
            Some(next) => (next, 1),
            None => return String::new(),
        }
    } else {
        (year, month + 1)
    };
    format!("{:04}-{:02}", year, month)
}

fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// "YYYY-MM-DD" + whole years -> "YYYY-MM-DD"
///
/// Feb 29 rolls to March 1 on non-leap years. "" on malformed input.
pub fn compute_contract_end(start_date: &str, duration_years: u32) -> String {
    parse_date(start_date)
        .and_then(|start| window::add_years(start, duration_years))
        .map(format_iso)
        .unwrap_or_default()
}

/// Status label for `today`; "" when a bound is missing or malformed
///
/// A future start date yields the same "Vigente" label as an active
/// contract.
pub fn compute_contract_status(today: NaiveDate, start_date: &str, end_date: &str) -> String {
    contract_status(today, start_date, end_date)
        .map(|s| s.label().to_string())
        .unwrap_or_default()
}

pub fn contract_status(today: NaiveDate, start_date: &str, end_date: &str) -> Option<ContractStatus> {
    window::status_at(today, parse_date(start_date), parse_date(end_date))
}

/// Strict backend date "YYYY-MM-DD"
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Optional backend date rendered for tables ("" when absent)
pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| format_date(&format_iso(d))).unwrap_or_default()
}
