// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use nenpyo_core::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill_colour: Colour,
    pub border: Option<LineStyle>,
}

/// Used for the default band drawn when no segments are defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandStyle {
    pub fill_colour: Colour,
    pub text_colour: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub line: LineStyle,
    pub tick: LineStyle,
    pub tick_text_colour: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEventStyle {
    pub marker_colour: Colour,
    pub leader: LineStyle,
    pub text_colour: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanEventStyle {
    pub bar: BoxStyle,
    pub connector: LineStyle,

    /// Label colour when drawn inside the bar
    pub text_colour: Colour,

    /// Label colour when the label doesn't fit and is drawn below the bar
    pub outside_text_colour: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineColours {
    pub default_band: BandStyle,
    pub axis: AxisStyle,
    pub point_event: PointEventStyle,
    pub span_event: SpanEventStyle,
}

const ZINC_100: Colour = Colour::from_rgb(0xf4, 0xf4, 0xf5);
const ZINC_500: Colour = Colour::from_rgb(0x71, 0x71, 0x7a);
const ZINC_600: Colour = Colour::from_rgb(0x52, 0x52, 0x5b);
const ZINC_800: Colour = Colour::from_rgb(0x27, 0x27, 0x2a);
const RED_500: Colour = Colour::from_rgb(0xef, 0x44, 0x44);
const BLUE_500: Colour = Colour::from_rgb(0x3b, 0x82, 0xf6);

impl Default for TimelineColours {
    fn default() -> Self {
        Self {
            default_band: BandStyle {
                fill_colour: ZINC_100,
                text_colour: ZINC_600,
            },
            axis: AxisStyle {
                line: LineStyle {
                    colour: ZINC_600,
                    thickness: 3.0,
                },
                tick: LineStyle {
                    colour: ZINC_600,
                    thickness: 2.0,
                },
                tick_text_colour: ZINC_500,
            },
            point_event: PointEventStyle {
                marker_colour: RED_500,
                leader: LineStyle {
                    colour: RED_500,
                    thickness: 2.0,
                },
                text_colour: ZINC_800,
            },
            span_event: SpanEventStyle {
                bar: BoxStyle {
                    fill_colour: BLUE_500,
                    border: None,
                },
                connector: LineStyle {
                    colour: Colour::lightened_colour(BLUE_500),
                    thickness: 1.0,
                },
                text_colour: Colour::WHITE,
                outside_text_colour: ZINC_800,
            },
        }
    }
}
