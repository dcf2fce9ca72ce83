//! Birth date reformatting from DD/MM/YYYY to YYYY-MM-DD

use crate::error::FieldError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

fn br_date_regex() -> &'static Regex {
    static BR_DATE: OnceLock<Regex> = OnceLock::new();
    BR_DATE.get_or_init(|| {
        Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("Invalid date regex")
    })
}

/// Parse a strict `DD/MM/YYYY` date. The value must have exactly that shape
/// and name a real calendar day.
pub fn parse_br_date(value: &str) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::DateParse(value.to_string());

    let caps = br_date_regex().captures(value).ok_or_else(invalid)?;
    let day: u32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Rewrite a `DD/MM/YYYY` date as `YYYY-MM-DD`.
pub fn convert_date(value: &str) -> Result<String, FieldError> {
    let date = parse_br_date(value)?;
    Ok(date.format(OUTPUT_FORMAT).to_string())
}
