// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    Colour, DrawCommand, Engine, Layout, LayoutError, LineStyle, Point, PositionAndSize,
    RendererConfig, TextAnchor,
};
use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};
use log::*;
use nenpyo_core::TimelineInput;

/// Paints a timeline in an `egui` application.  The layout is recomputed only
/// when the input changes, not every frame.
pub struct NenpyoRendererEgui {
    /// The underlying timeline [`Engine`].
    engine: Engine,

    input: TimelineInput,

    /// The result of laying out `input`
    layout: Result<Layout, LayoutError>,
}

impl NenpyoRendererEgui {
    /// Create a new egui renderer and lay out `input`
    pub fn new(config: RendererConfig, input: TimelineInput) -> Self {
        info!("Constructing a new egui renderer");
        let engine = Engine::new(config);
        let layout = engine.layout(&input);
        Self {
            engine,
            input,
            layout,
        }
    }

    pub fn input(&self) -> &TimelineInput {
        &self.input
    }

    pub fn set_input(&mut self, input: TimelineInput) {
        self.input = input;
        self.relayout();
    }

    pub fn layout(&self) -> Result<&Layout, &LayoutError> {
        self.layout.as_ref()
    }

    fn relayout(&mut self) {
        self.layout = self.engine.layout(&self.input);
        if let Err(error) = &self.layout {
            warn!("{error}");
        }
    }

    /// Draw the timeline, or the placeholder message if it couldn't be laid
    /// out
    pub fn draw(&self, ui: &mut Ui) {
        let canvas_size = self.engine.config().layout_params.canvas_size();
        let (response, painter) = ui.allocate_painter(
            vec2(canvas_size.x as f32, canvas_size.y as f32),
            Sense::hover(),
        );
        let canvas_min = response.rect.min.to_vec2();

        let layout = match &self.layout {
            Ok(layout) => layout,
            Err(error) => {
                painter.text(
                    response.rect.center(),
                    Align2::CENTER_CENTER,
                    error.placeholder_message(),
                    FontId::proportional(16.0),
                    ui.visuals().weak_text_color(),
                );
                return;
            }
        };

        for command in &layout.commands {
            match command {
                DrawCommand::Line(line) => {
                    painter.line_segment(
                        [
                            point_to_egui_pos2(line.from) + canvas_min,
                            point_to_egui_pos2(line.to) + canvas_min,
                        ],
                        line_style_to_egui_stroke(line.style),
                    );
                }
                DrawCommand::Rect(rect) => {
                    let (min, max) = timeline_renderer_position_and_size_to_min_and_max_egui_pos2(
                        &rect.position_and_size,
                    );
                    let stroke = rect
                        .border_style
                        .map(line_style_to_egui_stroke)
                        .unwrap_or(Stroke::NONE);
                    painter.rect(
                        Rect::from_two_pos(min + canvas_min, max + canvas_min),
                        rect.corner_radius as f32,
                        timeline_renderer_colour_to_egui_colour(rect.fill_colour),
                        stroke,
                        StrokeKind::Inside,
                    );
                }
                DrawCommand::Circle(circle) => {
                    painter.circle_filled(
                        point_to_egui_pos2(circle.centre) + canvas_min,
                        circle.radius as f32,
                        timeline_renderer_colour_to_egui_colour(circle.fill_colour),
                    );
                }
                DrawCommand::Text(text) => {
                    painter.text(
                        point_to_egui_pos2(text.position) + canvas_min,
                        text_anchor_to_egui_align2(text.anchor),
                        &text.text,
                        FontId::proportional(text.font_size as f32),
                        timeline_renderer_colour_to_egui_colour(text.colour),
                    );
                }
            }
        }
    }
}

/// Convert a [`Colour`] to a [`Color32`]
fn timeline_renderer_colour_to_egui_colour(colour: Colour) -> Color32 {
    let (r, g, b) = colour.as_rgb();
    Color32::from_rgb(r, g, b)
}

fn line_style_to_egui_stroke(style: LineStyle) -> Stroke {
    Stroke::new(
        style.thickness as f32,
        timeline_renderer_colour_to_egui_colour(style.colour),
    )
}

fn point_to_egui_pos2(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

/// Text positions are baselines, so anchor on the bottom edge of the galley
fn text_anchor_to_egui_align2(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::Start => Align2::LEFT_BOTTOM,
        TextAnchor::Middle => Align2::CENTER_BOTTOM,
        TextAnchor::End => Align2::RIGHT_BOTTOM,
    }
}

/// Convert a [`PositionAndSize`] into min and max [`Pos2`]s
fn timeline_renderer_position_and_size_to_min_and_max_egui_pos2(
    position_and_size: &PositionAndSize,
) -> (Pos2, Pos2) {
    let min = point_to_egui_pos2(position_and_size.position);
    let max = min + Vec2::new(position_and_size.width as f32, position_and_size.height as f32);
    (min, max)
}
