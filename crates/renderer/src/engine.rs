// SPDX-License-Identifier: MIT

//!
//! The `nenpyo-renderer` engine
//!

mod bands;
mod colours;
mod consts;
mod events;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod scale;
mod ticks;

pub(crate) use helpers::*;

pub use bands::*;
pub use colours::*;
pub use consts::*;
pub use events::*;
pub use layout_params::*;
use log::{debug, warn};
pub use point::*;
pub use primitives::*;
pub use scale::*;
pub use ticks::*;

use crate::{LayoutError, RendererConfig};
use nenpyo_core::TimelineInput;
use serde::Serialize;

/// The core `nenpyo-renderer` engine.  It holds no state between calls: each
/// call to [`Engine::layout`] builds a fresh [`Layout`] from its input, so the
/// same input always gives the same output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    config: RendererConfig,
}

/// A finished timeline, ready for a frontend to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    /// The logical size of the canvas the commands are drawn on
    pub canvas_size: Size,

    /// Everything to draw, back to front
    pub commands: Vec<DrawCommand>,

    pub ticks: Vec<Tick>,
    pub bands: Vec<Band>,

    /// Where each drawn event ended up, in input order
    pub events: Vec<Placement>,

    /// The number of events that couldn't be drawn
    pub skipped_events: usize,

    /// The number of segments that couldn't be drawn
    pub skipped_segments: usize,
}

impl Engine {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Lay out a timeline.
    ///
    /// Commands are ordered back to front: bands, then the axis line and its
    /// ticks, then the events (each event's commands kept together).  The only
    /// failure is a range that doesn't cover at least one day, in which case
    /// nothing is drawn.
    pub fn layout(&self, input: &TimelineInput) -> Result<Layout, LayoutError> {
        let params = &self.config.layout_params;
        let colours = &self.config.colours;
        debug!(
            "Laying out {} events and {} segments over {} ({:?})",
            input.events.len(),
            input.segments.len(),
            input.range.label(),
            self.config.layout_style
        );

        let duplicate_event_ids = input.duplicate_event_ids();
        if !duplicate_event_ids.is_empty() {
            warn!("duplicate event IDs: {duplicate_event_ids:?}");
        }
        let duplicate_segment_ids = input.duplicate_segment_ids();
        if !duplicate_segment_ids.is_empty() {
            warn!("duplicate segment IDs: {duplicate_segment_ids:?}");
        }

        let scale = TemporalScale::new(&input.range, params.canvas_width, params.margin)?;
        let ticks = generate_ticks(&input.range, &scale);
        let bands = build_bands(
            &input.segments,
            &input.range,
            &scale,
            params,
            &colours.default_band,
        );
        let event_marks = layout_events(
            &input.events,
            &scale,
            self.config.layout_style,
            params,
            colours,
        );

        let mut commands = Vec::new();
        for band in &bands {
            commands.extend(band.draw_commands(params));
        }
        commands.push(DrawCommand::Line(LineOut {
            from: Point::new(scale.min_x(), params.axis_y()),
            to: Point::new(scale.max_x(), params.axis_y()),
            style: colours.axis.line,
        }));
        for tick in &ticks {
            commands.extend(tick.draw_commands(params, &colours.axis));
        }
        let mut events = Vec::with_capacity(event_marks.len());
        for marks in event_marks {
            commands.extend(marks.commands);
            events.push(marks.placement);
        }

        let drawn_segments = bands.iter().filter(|band| band.segment_id.is_some()).count();
        let layout = Layout {
            canvas_size: params.canvas_size(),
            commands,
            ticks,
            skipped_events: input.events.len() - events.len(),
            skipped_segments: input.segments.len() - drawn_segments,
            bands,
            events,
        };
        debug!(
            "Laid out {} commands ({} events skipped, {} segments skipped)",
            layout.commands.len(),
            layout.skipped_events,
            layout.skipped_segments
        );
        Ok(layout)
    }
}

impl Layout {
    /// The smallest box containing every command, or `None` if there are no
    /// commands.  Events outside the range can make this larger than the
    /// canvas.
    pub fn content_bounds(&self) -> Option<PositionAndSize> {
        let (min, max) = self
            .commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|(min, max), (command_min, command_max)| {
                (min.min(command_min), max.max(command_max))
            })?;
        Some(PositionAndSize {
            position: min,
            width: max.x - min.x,
            height: max.y - min.y,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nenpyo_core::{ColorSegment, Colour, Date, Event, TimeRange};

    fn date(date: &str) -> Date {
        Date::parse(date).unwrap()
    }

    fn year_2024() -> TimelineInput {
        TimelineInput::new(TimeRange::new(date("2024-01"), date("2024-12")))
    }

    fn texts(layout: &Layout) -> Vec<&str> {
        layout
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_year() {
        let layout = Engine::default().layout(&year_2024()).unwrap();
        assert_eq!(layout.canvas_size, Point::new(800.0, 600.0));
        assert_eq!(layout.ticks.len(), 12);
        assert_eq!(layout.ticks[0].label, "2024/1");
        assert_eq!(layout.ticks[11].label, "2024/12");
        assert_eq!(layout.bands.len(), 1);
        assert_eq!(layout.bands[0].label, "2024/1 – 2024/12");
        assert_eq!(layout.bands[0].segment_id, None);
        assert!(layout.events.is_empty());

        // Band rect and label, axis line, then 12 ticks of line and label
        assert_eq!(layout.commands.len(), 2 + 1 + 24);
        assert!(matches!(layout.commands[0], DrawCommand::Rect(_)));
        assert_eq!(texts(&layout)[0], "2024/1 – 2024/12");
    }

    #[test]
    fn single_point_event() {
        let mut input = year_2024();
        input
            .events
            .push(Event::point("launch", date("2024-03-15"), "Launch"));
        let engine = Engine::default();
        let layout = engine.layout(&input).unwrap();

        let range = input.range;
        let params = LayoutParams::default();
        let scale = TemporalScale::new(&range, params.canvas_width, params.margin).unwrap();
        assert_eq!(layout.events.len(), 1);
        assert_eq!(layout.events[0].x, scale.x(date("2024-03-15")));
        assert_eq!(layout.events[0].kind, MarkKind::Point(Side::Above));

        // The event's group comes last, as leader, marker, label
        let group = &layout.commands[layout.commands.len() - 3..];
        assert!(matches!(group[0], DrawCommand::Line(_)));
        assert!(matches!(group[1], DrawCommand::Circle(_)));
        let DrawCommand::Text(label) = &group[2] else {
            panic!("expected the event label");
        };
        assert_eq!(label.text, "Launch");
        assert!(label.position.y < params.axis_y());
    }

    #[test]
    fn z_order() {
        let mut input = year_2024();
        input.segments.push(ColorSegment::new(
            "spring",
            date("2024-03-01"),
            date("2024-05-31"),
            Colour::from_rgb(0xdc, 0xfc, 0xe7),
            Colour::from_rgb(0x16, 0x65, 0x34),
        ));
        input
            .events
            .push(Event::span("trial", date("2024-06-01"), date("2024-06-30"), "Trial"));
        let layout = Engine::default().layout(&input).unwrap();

        let band_rect = layout
            .commands
            .iter()
            .position(|command| match command {
                DrawCommand::Rect(rect) => rect.fill_colour == Colour::from_rgb(0xdc, 0xfc, 0xe7),
                _ => false,
            })
            .unwrap();
        let axis_line = layout
            .commands
            .iter()
            .position(|command| match command {
                DrawCommand::Line(line) => line.style == TimelineColours::default().axis.line,
                _ => false,
            })
            .unwrap();
        let bar = layout
            .commands
            .iter()
            .rposition(|command| matches!(command, DrawCommand::Rect(_)))
            .unwrap();
        assert!(band_rect < axis_line);
        assert!(axis_line < bar);
        assert_eq!(layout.bands.len(), 1);
        assert_eq!(layout.bands[0].label, "2024/3/1 – 2024/5/31");
    }

    #[test]
    fn malformed_records_skipped() {
        let mut input = year_2024();
        input.events.push(Event::span(
            "inverted",
            date("2024-05-01"),
            date("2024-04-01"),
            "Inverted",
        ));
        input.events.push(Event::point("ok", date("2024-02-01"), "Ok"));
        input.segments.push(ColorSegment {
            id: "open".to_string(),
            start: Some(date("2024-02-01")),
            end: None,
            fill_colour: Some(Colour::WHITE),
            text_colour: Some(Colour::WHITE),
        });
        let layout = Engine::default().layout(&input).unwrap();
        assert_eq!(layout.skipped_events, 1);
        assert_eq!(layout.skipped_segments, 1);
        assert_eq!(layout.events.len(), 1);
        assert_eq!(layout.events[0].event_id, "ok");
        assert!(texts(&layout).contains(&"Ok"));
        assert!(!texts(&layout).contains(&"Inverted"));

        // Only incomplete segments, so the default band is drawn
        assert_eq!(layout.bands[0].segment_id, None);
    }

    #[test]
    fn invalid_range() {
        let engine = Engine::default();
        for (start, end) in [("2024-05-01", "2024-01-01"), ("2024-05-01", "2024-05-01")] {
            let input = TimelineInput::new(TimeRange::new(date(start), date(end)));
            assert_eq!(
                engine.layout(&input),
                Err(LayoutError::InvalidRange {
                    start: date(start),
                    end: date(end),
                })
            );
        }
    }

    #[test]
    fn deterministic() {
        let engine = Engine::default();
        let input = TimelineInput::sample();
        assert_eq!(engine.layout(&input), engine.layout(&input));
        assert_eq!(
            serde_json::to_string(&engine.layout(&input).unwrap()).unwrap(),
            serde_json::to_string(&engine.layout(&input).unwrap()).unwrap()
        );
    }

    #[test]
    fn zero_duration_span() {
        let mut input = year_2024();
        input
            .events
            .push(Event::span("day", date("2024-07-04"), date("2024-07-04"), ""));
        let layout = Engine::default().layout(&input).unwrap();
        let width = layout
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                DrawCommand::Rect(rect) => Some(rect.position_and_size.width),
                _ => None,
            })
            .unwrap();
        assert!(width >= MIN_BAR_WIDTH);
    }

    #[test]
    fn list_style() {
        let engine = Engine::new(RendererConfig {
            layout_style: LayoutStyle::List,
            ..RendererConfig::default()
        });
        let layout = engine.layout(&TimelineInput::sample()).unwrap();
        assert_eq!(layout.events.len(), 2);
        assert!(
            layout
                .events
                .iter()
                .all(|placement| placement.kind != MarkKind::Point(Side::Below))
        );
    }

    #[test]
    fn content_bounds() {
        let layout = Engine::default().layout(&year_2024()).unwrap();
        let bounds = layout.content_bounds().unwrap();
        assert_eq!(bounds.position, Point::new(50.0, 50.0));
        assert_eq!(bounds.max_x(), 750.0);
        assert_eq!(bounds.max_y(), 550.0);
    }

    #[test]
    fn serialises_tagged_commands() {
        let layout = Engine::default().layout(&year_2024()).unwrap();
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["commands"][0]["type"], "rect");
        assert_eq!(json["commands"][2]["type"], "line");
        assert_eq!(json["canvas_size"]["x"], 800.0);
    }
}
