// SPDX-License-Identifier: MIT

//!
//! Background bands built from colour segments
//!

use crate::{
    BandStyle, DrawCommand, FilledBox, LayoutParams, Point, PositionAndSize, TemporalScale,
    TextAnchor, TextOut,
};
use log::{trace, warn};
use nenpyo_core::{ColorSegment, Colour, TimeRange};
use serde::Serialize;
use std::fmt::Debug;

/// A coloured stretch of the background covering the full drawing height
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// The segment the band was built from (`None` for the default band)
    pub segment_id: Option<String>,
    pub x: f64,
    pub width: f64,
    pub fill_colour: Colour,
    pub text_colour: Colour,
    pub label: String,
}

/// Build one band per complete segment, in input order (so later segments are
/// painted over earlier ones).  Incomplete segments are skipped.
///
/// When no segment produces a band, a single default band covering the whole
/// range is returned so the background is never unlabelled.
pub fn build_bands(
    segments: &[ColorSegment],
    range: &TimeRange,
    scale: &TemporalScale,
    params: &LayoutParams,
    default_style: &BandStyle,
) -> Vec<Band> {
    let bands: Vec<Band> = segments
        .iter()
        .filter_map(|segment| {
            let (start, end) = match segment.dates() {
                Ok(dates) => dates,
                Err(error) => {
                    warn!("skipping segment: {error}");
                    return None;
                }
            };
            let x = scale.x(start);
            let width = (scale.x(end) - x).max(params.min_band_width);
            if !x.is_finite() {
                warn!("skipping segment `{}`: position is not finite", segment.id);
                return None;
            }
            Some(Band {
                segment_id: Some(segment.id.clone()),
                x,
                width,
                fill_colour: segment.fill_colour.unwrap_or(default_style.fill_colour),
                text_colour: segment.text_colour.unwrap_or(default_style.text_colour),
                label: segment.label().unwrap_or_default(),
            })
        })
        .collect();

    if !bands.is_empty() {
        trace!("built {} bands", bands.len());
        return bands;
    }

    trace!("no drawable segments, using the default band");
    vec![Band {
        segment_id: None,
        x: scale.min_x(),
        width: scale.inner_width().max(params.min_band_width),
        fill_colour: default_style.fill_colour,
        text_colour: default_style.text_colour,
        label: range.label(),
    }]
}

impl Band {
    /// The band's rectangle and its label (bottom left, inside the band)
    pub fn draw_commands(&self, params: &LayoutParams) -> [DrawCommand; 2] {
        let top = params.margin.top;
        let height = params.inner_height().max(0.0);
        [
            DrawCommand::Rect(FilledBox {
                position_and_size: PositionAndSize {
                    position: Point::new(self.x, top),
                    width: self.width,
                    height,
                },
                fill_colour: self.fill_colour,
                corner_radius: 0.0,
                border_style: None,
            }),
            DrawCommand::Text(TextOut {
                position: Point::new(
                    self.x + params.band_label_padding,
                    top + height - params.band_label_inset,
                ),
                text: self.label.clone(),
                colour: self.text_colour,
                font_size: params.font_size_px,
                anchor: TextAnchor::Start,
            }),
        ]
    }
}
