// SPDX-License-Identifier: MIT

//!
//! Axis ticks, one per calendar month
//!

use crate::{
    AxisStyle, DrawCommand, LayoutParams, LineOut, Point, TemporalScale, TextAnchor, TextOut,
};
use log::trace;
use nenpyo_core::{Date, TimeRange};
use serde::Serialize;
use std::fmt::Debug;

/// A labelled mark on the axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// The date the tick is drawn at: the first of its month, or the range's
    /// start for the first tick if the range starts mid-month
    pub date: Date,
    pub x: f64,

    /// e.g. `2024/3`
    pub label: String,
}

/// Generate one tick per calendar month, from the month containing the range's
/// start through the month containing its end (both inclusive).  Ticks are in
/// chronological order so their x positions never decrease.
pub fn generate_ticks(range: &TimeRange, scale: &TemporalScale) -> Vec<Tick> {
    let last_month = range.end.month_start();
    let ticks: Vec<Tick> = std::iter::successors(Some(range.start.month_start()), |month| {
        month.next_month_start()
    })
    .take_while(|month| *month <= last_month)
    .map(|month| {
        let date = month.max(range.start);
        Tick {
            date,
            x: scale.x(date),
            label: month.as_year_month_label(),
        }
    })
    .collect();
    trace!("generated {} ticks", ticks.len());
    ticks
}

impl Tick {
    /// The tick mark across the axis and its label underneath
    pub fn draw_commands(&self, params: &LayoutParams, style: &AxisStyle) -> [DrawCommand; 2] {
        let axis_y = params.axis_y();
        [
            DrawCommand::Line(LineOut {
                from: Point::new(self.x, axis_y - params.tick_half_length),
                to: Point::new(self.x, axis_y + params.tick_half_length),
                style: style.tick,
            }),
            DrawCommand::Text(TextOut {
                position: Point::new(self.x, axis_y + params.tick_label_offset_y),
                text: self.label.clone(),
                colour: style.tick_text_colour,
                font_size: params.font_size_px,
                anchor: TextAnchor::Middle,
            }),
        ]
    }
}
