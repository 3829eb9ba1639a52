// SPDX-License-Identifier: MIT

//!
//! The Nenpyo event type
//!

use crate::Date;
use crate::date::deserialize_optional_date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an [`Event`] cannot be drawn.  These are recovered from by skipping the
/// event, never by failing the whole timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event `{0}` has no start date")]
    MissingStart(String),

    #[error("Event `{id}` ends ({end}) before it starts ({start})")]
    EndBeforeStart { id: String, start: Date, end: Date },
}

/// Something that happened on a day (a point event) or over a period (a span
/// event).
///
/// Events arrive straight from user input, so the dates are not validated on
/// construction.  Use [`Event::kind`] to find out whether, and how, the event
/// can be drawn.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// Unique within a timeline
    pub id: String,

    /// When the event happened or began
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start: Option<Date>,

    /// When the event finished.  Absent for point events.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<Date>,

    /// The text shown next to the event
    #[serde(default)]
    pub label: String,
}

/// How a well-formed [`Event`] is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A single day, drawn as a marker
    Point { at: Date },

    /// A period, drawn as a bar.  `start == end` is allowed.
    Span { start: Date, end: Date },
}

impl Event {
    /// Create a point event
    pub fn point<S: ToString, L: ToString>(id: S, start: Date, label: L) -> Self {
        Self {
            id: id.to_string(),
            start: Some(start),
            end: None,
            label: label.to_string(),
        }
    }

    /// Create a span event
    pub fn span<S: ToString, L: ToString>(id: S, start: Date, end: Date, label: L) -> Self {
        Self {
            id: id.to_string(),
            start: Some(start),
            end: Some(end),
            label: label.to_string(),
        }
    }

    /// Classify the event, or explain why it is malformed
    pub fn kind(&self) -> Result<EventKind, EventError> {
        let start = self
            .start
            .ok_or_else(|| EventError::MissingStart(self.id.clone()))?;
        match self.end {
            None => Ok(EventKind::Point { at: start }),
            Some(end) if end < start => Err(EventError::EndBeforeStart {
                id: self.id.clone(),
                start,
                end,
            }),
            Some(end) => Ok(EventKind::Span { start, end }),
        }
    }
}
