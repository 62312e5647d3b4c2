use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::error::PinError;

/// Accepted date text: `DD-MM-YYYY` with fixed field widths
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("Failed to compile date regex")
});

/// Two-digit fragments of a calendar date that attackers typically guess from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year_suffix: String,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year_suffix: format!("{:02}", date.year().rem_euclid(100)),
        }
    }

    /// Parts in `[day, month, year]` order
    pub fn as_array(&self) -> [&str; 3] {
        [&self.day, &self.month, &self.year_suffix]
    }
}

impl FromStr for DateParts {
    type Err = PinError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let unparseable = || PinError::UnparseableDate(text.to_string());

        // chrono alone would accept single-digit days and months
        if !DATE_SHAPE.is_match(text) {
            return Err(unparseable());
        }

        let date = NaiveDate::parse_from_str(text, "%d-%m-%Y").map_err(|_| unparseable())?;
        if date.year() < 1 {
            return Err(unparseable());
        }

        Ok(Self::from_date(date))
    }
}

/// Parses `DD-MM-YYYY` into its parts, or `None` when the text is not a real date
pub fn date_parts(text: &str) -> Option<DateParts> {
    text.parse().ok()
}
