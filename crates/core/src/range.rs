// SPDX-License-Identifier: MIT

//!
//! The overall date range shown by a timeline
//!

use crate::Date;
use serde::{Deserialize, Serialize};

/// The period a timeline covers.  A range is only drawable when `end` is
/// strictly after `start`; see [`TimeRange::is_valid`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// The first day shown
    pub start: Date,

    /// The last day shown
    pub end: Date,
}

impl TimeRange {
    /// Create a range.  Inverted and empty ranges are allowed here and are
    /// rejected when laid out.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The number of whole days from start to end
    pub fn span_days(&self) -> i64 {
        self.end.days_since(self.start)
    }

    /// Whether the range covers at least one day
    pub fn is_valid(&self) -> bool {
        self.span_days() > 0
    }

    /// e.g. `2024/1 – 2024/12`
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            self.start.as_year_month_label(),
            self.end.as_year_month_label()
        )
    }
}
