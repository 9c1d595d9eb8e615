//! Date extraction for receipts.

use chrono::NaiveDate;

use super::patterns::DATE_PATTERNS;
use super::{first_match_per_pattern, ExtractionMatch, FieldExtractor};

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        first_match_per_pattern(&DATE_PATTERNS, text, parse_date)
    }
}

/// Parse a matched date string.
///
/// `/` separated dates are month/day/year; a two-digit year is read as 20YY.
/// `-` separated dates are month-day-year and need a four-digit year.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return None;
        };
        let year = if year.len() == 2 {
            format!("20{}", year)
        } else {
            year.to_string()
        };
        build_date(&year, month, day)
    } else if s.contains('-') {
        let parts: Vec<&str> = s.split('-').collect();
        let [month, day, year] = parts.as_slice() else {
            return None;
        };
        if year.len() != 4 {
            return None;
        }
        build_date(year, month, day)
    } else {
        None
    }
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    if year < 1 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
