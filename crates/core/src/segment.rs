// SPDX-License-Identifier: MIT

//!
//! The Nenpyo colour segment type
//!

use crate::colour::deserialize_optional_colour;
use crate::date::deserialize_optional_date;
use crate::{Colour, Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a [`ColorSegment`] cannot be drawn yet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Segment `{0}` has no start date")]
    MissingStart(String),

    #[error("Segment `{0}` has no end date")]
    MissingEnd(String),
}

/// A coloured stretch of the timeline's background.  Segments may overlap;
/// they are painted in list order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorSegment {
    /// Unique within a timeline
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start: Option<Date>,

    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end: Option<Date>,

    /// The band's fill (`None` uses the renderer's default band fill)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_colour",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill_colour: Option<Colour>,

    /// The colour of the band's label (`None` uses the renderer's default)
    #[serde(
        default,
        deserialize_with = "deserialize_optional_colour",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_colour: Option<Colour>,
}

impl ColorSegment {
    /// Create a complete segment
    pub fn new<S: ToString>(
        id: S,
        start: Date,
        end: Date,
        fill_colour: Colour,
        text_colour: Colour,
    ) -> Self {
        Self {
            id: id.to_string(),
            start: Some(start),
            end: Some(end),
            fill_colour: Some(fill_colour),
            text_colour: Some(text_colour),
        }
    }

    /// Both endpoints, if the segment is complete.  An inverted segment is
    /// still returned; its band is drawn at the minimum width.
    pub fn dates(&self) -> Result<(Date, Date), SegmentError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            (None, _) => Err(SegmentError::MissingStart(self.id.clone())),
            (Some(_), None) => Err(SegmentError::MissingEnd(self.id.clone())),
        }
    }

    /// e.g. `2024/3/1 – 2024/5/31`
    pub fn label(&self) -> Option<String> {
        let (start, end) = self.dates().ok()?;
        Some(format!(
            "{} – {}",
            start.as_year_month_day_label(),
            end.as_year_month_day_label()
        ))
    }
}
