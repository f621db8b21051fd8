//! Date helpers for the order forms
//!
//! Dates travel as ISO strings and are shown as DD.MM.YYYY.

use chrono::NaiveDate;

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let hm: String = time_part.chars().take(5).collect();
        return format!("{} {}", format_date(date_part), hm);
    }
    datetime_str.to_string()
}

/// "2024-03-15" -> "15.03.2024"; anything else is returned unchanged
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => format_naive_date(date),
        Err(_) => date_str.to_string(),
    }
}

/// Value of an `<input type="date">`; empty or malformed input is no date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
