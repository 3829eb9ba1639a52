// SPDX-License-Identifier: MIT

//!
//! The temporal scale: dates to x positions
//!

use crate::{LayoutError, Margin};
use nenpyo_core::{Date, TimeRange};

/// Maps dates linearly onto the x axis so that the range's start lands on the
/// left margin and its end on the right margin.
///
/// Dates outside the range are not clamped; they map to positions left of
/// the left margin or right of the right margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalScale {
    start: Date,
    span_days: f64,
    margin_left: f64,
    inner_width: f64,
}

impl TemporalScale {
    /// Create a scale for a range drawn on a canvas of the given width.  Fails
    /// if the range doesn't cover at least one day.
    pub fn new(range: &TimeRange, canvas_width: f64, margin: Margin) -> Result<Self, LayoutError> {
        if !range.is_valid() {
            return Err(LayoutError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(Self {
            start: range.start,
            span_days: range.span_days() as f64,
            margin_left: margin.left,
            inner_width: (canvas_width - margin.left - margin.right).max(0.0),
        })
    }

    /// The x position of a date
    pub fn x(&self, date: Date) -> f64 {
        let days = date.days_since(self.start) as f64;
        self.margin_left + (days / self.span_days) * self.inner_width
    }

    /// The x position of the range's start
    pub fn min_x(&self) -> f64 {
        self.margin_left
    }

    /// The x position of the range's end
    pub fn max_x(&self) -> f64 {
        self.margin_left + self.inner_width
    }

    /// The width between the range's start and end
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(date: &str) -> Date {
        Date::parse(date).unwrap()
    }

    fn scale(start: &str, end: &str) -> Result<TemporalScale, LayoutError> {
        let range = TimeRange::new(date(start), date(end));
        TemporalScale::new(&range, 800.0, Margin::uniform(50.0))
    }

    #[test]
    fn end_points() {
        let scale = scale("2024-01-01", "2024-12-01").unwrap();
        assert_eq!(scale.x(date("2024-01-01")), 50.0);
        assert_eq!(scale.x(date("2024-12-01")), 750.0);
        assert_eq!(scale.min_x(), 50.0);
        assert_eq!(scale.max_x(), 750.0);
    }

    #[test]
    fn linear() {
        // 2024-01-01 to 2024-01-11 is 10 days, 70px per day
        let scale = scale("2024-01-01", "2024-01-11").unwrap();
        assert_eq!(scale.x(date("2024-01-06")), 400.0);
        assert_eq!(scale.x(date("2024-01-02")), 120.0);
    }

    #[test]
    fn monotonic() {
        let scale = scale("2023-11-15", "2025-02-03").unwrap();
        let mut date = date("2023-10-01");
        let mut previous = f64::NEG_INFINITY;
        while date < Date::parse("2025-04-01").unwrap() {
            let x = scale.x(date);
            assert!(x >= previous);
            previous = x;
            date = date.next_month_start().unwrap();
        }
    }

    #[test]
    fn out_of_range_not_clamped() {
        let scale = scale("2024-01-01", "2024-01-11").unwrap();
        assert_eq!(scale.x(date("2023-12-31")), -20.0);
        assert!((scale.x(date("2024-01-12")) - 820.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_range() {
        assert!(matches!(
            scale("2024-12-01", "2024-01-01"),
            Err(LayoutError::InvalidRange { .. })
        ));
        assert!(matches!(
            scale("2024-01-01", "2024-01-01"),
            Err(LayoutError::InvalidRange { .. })
        ));
    }
}
