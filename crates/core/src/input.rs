// SPDX-License-Identifier: MIT

//!
//! A snapshot of everything needed to lay out one timeline
//!

use crate::{ColorSegment, Date, Event, TimeRange};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when reading a [`TimelineInput`] document
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Couldn't read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The input to one layout: the range, the events, and the background
/// segments, all in the order the user entered them
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineInput {
    pub range: TimeRange,

    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub segments: Vec<ColorSegment>,
}

impl TimelineInput {
    /// Create an input with no events or segments
    pub fn new(range: TimeRange) -> Self {
        Self {
            range,
            events: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Parse a JSON input document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a JSON input document from a file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        info!("Loading timeline input from {}", path.display());
        let data = fs::read_to_string(path)?;
        Ok(TimelineInput::from_json(&data)?)
    }

    /// The state a new chart starts in: 2024/1 to 2024/12 with one point event
    /// and one span event
    pub fn sample() -> Self {
        let range = TimeRange::new(first_of_month(2024, 1), first_of_month(2024, 12));
        let mut input = TimelineInput::new(range);
        input.events = vec![
            Event::point("1", day(2024, 3, 15), "Sample event 1"),
            Event::span("2", day(2024, 6, 1), day(2024, 6, 30), "Sample event 2 (period)"),
        ];
        input
    }

    /// Event IDs that appear more than once (each reported once, in input
    /// order)
    pub fn duplicate_event_ids(&self) -> Vec<&str> {
        duplicates(self.events.iter().map(|event| event.id.as_str()))
    }

    /// Segment IDs that appear more than once (each reported once, in input
    /// order)
    pub fn duplicate_segment_ids(&self) -> Vec<&str> {
        duplicates(self.segments.iter().map(|segment| segment.id.as_str()))
    }
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

fn day(year: i64, month: i64, day: i64) -> Date {
    Date::from(year, month, day).expect("sample dates are valid")
}

fn first_of_month(year: i64, month: i64) -> Date {
    day(year, month, 1)
}
