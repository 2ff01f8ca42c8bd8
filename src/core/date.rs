//! Dutch match dates such as `do 16 sep 2021` to ISO-8601.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

static DUTCH_MONTHS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    [
        ("jan", 1),
        ("feb", 2),
        ("mrt", 3),
        ("apr", 4),
        ("mei", 5),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("okt", 10),
        ("nov", 11),
        ("dec", 12),
    ]
    .into_iter()
    .collect()
});

// Optional day name, day, month, year. Anything after the year is ignored.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\w+\s+)?(\d{1,2})\s+(\w+)\s+(\d{4})").expect("date pattern is valid")
});

static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Nd}$").expect("digit pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Blank,

    #[error("could not parse date '{0}'")]
    Unrecognized(String),

    #[error("unknown month '{month}' in date '{input}'")]
    UnknownMonth { month: String, input: String },

    #[error("invalid date '{0}'")]
    InvalidDate(String),
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit from any script. Unicode lays every `Nd` digit set
/// out as ten consecutive code points starting at zero.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

fn parse_number(digits: &str) -> Option<u32> {
    digits
        .chars()
        .try_fold(0u32, |acc, c| Some(acc * 10 + decimal_value(c)?))
}

pub fn month_number(abbreviation: &str) -> Option<u32> {
    DUTCH_MONTHS.get(abbreviation.to_lowercase().as_str()).copied()
}

pub fn parse_dutch_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Blank);
    }

    let caps = DATE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| DateParseError::Unrecognized(input.to_string()))?;

    let day = parse_number(&caps[1]).ok_or_else(|| DateParseError::Unrecognized(input.to_string()))?;
    let year = parse_number(&caps[3])
        .map(|y| y as i32)
        .ok_or_else(|| DateParseError::Unrecognized(input.to_string()))?;
    let month = month_number(&caps[2]).ok_or_else(|| DateParseError::UnknownMonth {
        month: caps[2].to_lowercase(),
        input: input.to_string(),
    })?;

    if year < 1 {
        return Err(DateParseError::InvalidDate(input.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateParseError::InvalidDate(input.to_string()))
}

/// `YYYY-MM-DD`, zero padded.
pub fn to_iso_date(input: &str) -> Result<String, DateParseError> {
    parse_dutch_date(input).map(|date| date.format("%Y-%m-%d").to_string())
}
