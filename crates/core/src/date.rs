// SPDX-License-Identifier: MIT

//!
//! The Nenpyo date type
//!

use chrono::{Datelike, Months, NaiveDate};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Display};
use thiserror::Error;

/// The minimum year allowed in the Nenpyo system
pub const MIN_YEAR: i64 = 1;

/// The maximum year allowed in the Nenpyo system
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day number does not exist in the given month
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The string is neither `YYYY-MM-DD` nor `YYYY-MM`
    #[error("`{0}` is not a date (expected YYYY-MM-DD or YYYY-MM)")]
    Unparsable(String),
}

/// A calendar date with no time of day.  All arithmetic is done in whole days
/// or whole months.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Create a new [`Date`] if the result will be valid
    pub fn from(year: i64, month: i64, day: i64) -> Result<Date, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateError::InvalidDay(day));
        }
        NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .map(Date)
            .ok_or(DateError::InvalidDay(day))
    }

    /// Parse `YYYY-MM-DD`, or `YYYY-MM` meaning the first of that month
    pub fn parse(date: &str) -> Result<Date, DateError> {
        let date = date.trim();
        let unparsable = || DateError::Unparsable(date.to_string());
        let mut parts = date.split('-');
        let year = parts.next().ok_or_else(unparsable)?;
        let month = parts.next().ok_or_else(unparsable)?;
        let day = parts.next().unwrap_or("1");
        if parts.next().is_some() {
            return Err(unparsable());
        }
        let number = |part: &str| {
            if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(unparsable());
            }
            part.parse::<i64>().map_err(|_| unparsable())
        };
        Date::from(number(year)?, number(month)?, number(day)?)
    }

    /// Get the year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Get the month (1 to 12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Get the day of the month (1 to 31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The number of whole days from `earlier` to `self` (negative if `self`
    /// is before `earlier`)
    pub fn days_since(&self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// The first day of the month this date falls in
    pub fn month_start(&self) -> Date {
        Date(self.0 - chrono::Duration::days(i64::from(self.0.day0())))
    }

    /// The first day of the following month, if it is representable
    pub fn next_month_start(&self) -> Option<Date> {
        self.month_start()
            .0
            .checked_add_months(Months::new(1))
            .filter(|date| i64::from(date.year()) <= MAX_YEAR)
            .map(Date)
    }

    /// e.g. `2024/3`
    pub fn as_year_month_label(&self) -> String {
        format!("{}/{}", self.year(), self.month())
    }

    /// e.g. `2024/3/15`
    pub fn as_year_month_day_label(&self) -> String {
        format!("{}/{}/{}", self.year(), self.month(), self.day())
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Date::parse(&string).map_err(serde::de::Error::custom)
    }
}

/// Deserialize an optional date from user input.  A missing, empty, non-string,
/// or unparsable date becomes `None` so that a single bad record is skipped
/// later rather than failing the whole document.
pub(crate) fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) if raw.trim().is_empty() => None,
        Some(Value::String(raw)) => match Date::parse(&raw) {
            Ok(date) => Some(date),
            Err(error) => {
                warn!("ignoring unparsable date: {error}");
                None
            }
        },
        Some(other) => {
            warn!("ignoring date `{other}`: expected a YYYY-MM-DD string");
            None
        }
    })
}
