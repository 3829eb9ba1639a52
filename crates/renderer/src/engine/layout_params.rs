// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_MARGIN, MIN_BAND_WIDTH, MIN_BAR_WIDTH,
    Point, Position, Size,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How events are arranged relative to the axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Every event gets its own row below the axis, one fixed step further
    /// down than the event before it
    List,

    /// Every event shares the axis band.  Point events sit on the axis with
    /// labels alternating above and below; span bars share one strip under
    /// the axis.
    #[default]
    Banded,
}

/// Space kept clear around the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn uniform(margin: f64) -> Self {
        Margin {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(DEFAULT_MARGIN)
    }
}

/// Geometry used when laying out a timeline.  All values are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin: Margin,

    /// Distance from the top margin down to the axis
    pub axis_offset_y: f64,

    /// How far a tick extends either side of the axis
    pub tick_half_length: f64,

    /// Distance from the axis down to the tick labels' baseline
    pub tick_label_offset_y: f64,

    /// Font size of tick and band labels
    pub font_size_px: f64,

    /// Font size of event labels
    pub event_font_size_px: f64,

    /// Horizontal inset of a band's label from the band's left edge
    pub band_label_padding: f64,

    /// Distance from the bottom of a band up to its label's baseline
    pub band_label_inset: f64,

    pub marker_radius: f64,
    pub leader_length: f64,

    /// Gap between the end of a leader line and its label
    pub label_gap: f64,

    /// Extra leader length for point events placed below the axis, so their
    /// labels clear the tick labels
    pub below_axis_clearance: f64,

    pub bar_height: f64,
    pub bar_corner_radius: f64,

    /// Horizontal space kept between a bar's label and the bar's ends
    pub bar_text_padding: f64,

    /// `Banded`: distance from the axis down to the top of the span bar strip
    pub banded_bar_offset_y: f64,

    /// `List`: distance from the top margin down to the centre of the first
    /// row
    pub list_first_row_offset_y: f64,

    /// `List`: vertical distance between consecutive rows
    pub list_row_step: f64,

    pub min_bar_width: f64,
    pub min_band_width: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            margin: Margin::default(),
            axis_offset_y: 50.0,
            tick_half_length: 5.0,
            tick_label_offset_y: 20.0,
            font_size_px: 12.0,
            event_font_size_px: 13.0,
            band_label_padding: 6.0,
            band_label_inset: 8.0,
            marker_radius: 7.0,
            leader_length: 30.0,
            label_gap: 5.0,
            below_axis_clearance: 25.0,
            bar_height: 20.0,
            bar_corner_radius: 4.0,
            bar_text_padding: 4.0,
            banded_bar_offset_y: 90.0,
            list_first_row_offset_y: 130.0,
            list_row_step: 60.0,
            min_bar_width: MIN_BAR_WIDTH,
            min_band_width: MIN_BAND_WIDTH,
        }
    }
}

impl LayoutParams {
    /// The height available between the top and bottom margins
    pub fn inner_height(&self) -> f64 {
        self.canvas_height - self.margin.top - self.margin.bottom
    }

    /// The y position of the timeline's axis
    pub fn axis_y(&self) -> f64 {
        self.margin.top + self.axis_offset_y
    }

    pub fn canvas_size(&self) -> Size {
        Point::new(self.canvas_width, self.canvas_height)
    }
}

/// A box that specifies the location and size of something (e.g. a band or a
/// span event's bar)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }

    /// The x value halfway across the box
    pub fn centre_x(&self) -> f64 {
        self.position.x + self.width / 2.0
    }
}
