// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, PositionAndSize};
use nenpyo_core::Colour;
use serde::Serialize;
use std::fmt::Debug;

/// Horizontal alignment of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Information needed to draw text.  `position.y` is the text's baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
    pub anchor: TextAnchor,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
    pub corner_radius: f64,
    pub border_style: Option<LineStyle>,
}

/// Information needed to draw a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineOut {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}

/// Information needed to draw a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleOut {
    pub centre: Point,
    pub radius: f64,
    pub fill_colour: Colour,
}

/// A single thing to draw, in absolute canvas coordinates.  This is all a
/// frontend has to understand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    Line(LineOut),
    Rect(FilledBox),
    Circle(CircleOut),
    Text(TextOut),
}

impl DrawCommand {
    /// Whether every coordinate and size is a finite number
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::Line(line) => line.from.is_finite() && line.to.is_finite(),
            DrawCommand::Rect(rect) => {
                let position_and_size = &rect.position_and_size;
                position_and_size.position.is_finite()
                    && position_and_size.width.is_finite()
                    && position_and_size.height.is_finite()
            }
            DrawCommand::Circle(circle) => circle.centre.is_finite() && circle.radius.is_finite(),
            DrawCommand::Text(text) => text.position.is_finite() && text.font_size.is_finite(),
        }
    }

    /// The smallest and largest points the command covers.  Text is treated
    /// as its anchor point.
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            DrawCommand::Line(line) => (line.from.min(line.to), line.from.max(line.to)),
            DrawCommand::Rect(rect) => {
                let position_and_size = &rect.position_and_size;
                (
                    position_and_size.position,
                    Point::new(position_and_size.max_x(), position_and_size.max_y()),
                )
            }
            DrawCommand::Circle(circle) => (
                Point::new(circle.centre.x - circle.radius, circle.centre.y - circle.radius),
                Point::new(circle.centre.x + circle.radius, circle.centre.y + circle.radius),
            ),
            DrawCommand::Text(text) => (text.position, text.position),
        }
    }
}
