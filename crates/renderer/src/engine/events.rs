// SPDX-License-Identifier: MIT

//!
//! Events
//!

use crate::{
    CircleOut, DrawCommand, FilledBox, LayoutParams, LayoutStyle, LineOut, Point, PositionAndSize,
    TemporalScale, TextAnchor, TextOut, TimelineColours, approx_text_width, baseline_for_centre,
};
use log::{trace, warn};
use nenpyo_core::{Date, Event, EventKind};
use serde::Serialize;
use std::fmt::Debug;

/// Which side of its marker a point event's label is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Above,
    Below,
}

impl Side {
    /// Even input positions go above, odd ones below
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Above
        } else {
            Side::Below
        }
    }
}

/// How an event was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkKind {
    Point(Side),
    Span,
}

/// Where an event ended up
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub event_id: String,

    /// The event's position in the input list
    pub index: usize,
    pub kind: MarkKind,

    /// The x position of the event's start
    pub x: f64,
}

/// The draw commands for a single event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarks {
    pub placement: Placement,
    pub commands: Vec<DrawCommand>,
}

/// Lay out every drawable event, one [`EventMarks`] per event, in input
/// order.
///
/// Malformed events (no start, or ending before they start) and events whose
/// geometry isn't finite are skipped so that one bad record never stops the
/// rest of the timeline being drawn.
pub fn layout_events(
    events: &[Event],
    scale: &TemporalScale,
    style: LayoutStyle,
    params: &LayoutParams,
    colours: &TimelineColours,
) -> Vec<EventMarks> {
    let placer = EventPlacer {
        scale,
        style,
        params,
        colours,
    };
    events
        .iter()
        .enumerate()
        .filter_map(|(index, event)| {
            let marks = match event.kind() {
                Ok(EventKind::Point { at }) => placer.point(index, event, at),
                Ok(EventKind::Span { start, end }) => placer.span(index, event, start, end),
                Err(error) => {
                    warn!("skipping event: {error}");
                    return None;
                }
            };
            if !marks.commands.iter().all(DrawCommand::is_finite) {
                warn!("skipping event `{}`: position is not finite", event.id);
                return None;
            }
            trace!("placed event `{}` as {:?}", event.id, marks.placement.kind);
            Some(marks)
        })
        .collect()
}

/// Everything needed to turn one event into draw commands
struct EventPlacer<'a> {
    scale: &'a TemporalScale,
    style: LayoutStyle,
    params: &'a LayoutParams,
    colours: &'a TimelineColours,
}

impl EventPlacer<'_> {
    /// `List`: the centre line of the event's own row
    fn row_centre_y(&self, index: usize) -> f64 {
        self.params.margin.top
            + self.params.list_first_row_offset_y
            + (index as f64 * self.params.list_row_step)
    }

    /// A marker with a vertical leader line ending in the label
    fn point(&self, index: usize, event: &Event, at: Date) -> EventMarks {
        let params = self.params;
        let style = &self.colours.point_event;
        let x = self.scale.x(at);

        let (centre_y, side) = match self.style {
            LayoutStyle::Banded => (params.axis_y(), Side::for_index(index)),
            LayoutStyle::List => (self.row_centre_y(index), Side::Above),
        };

        let (leader_end_y, label_y) = match side {
            Side::Above => {
                let leader_end_y = centre_y - params.leader_length;
                (leader_end_y, leader_end_y - params.label_gap)
            }
            Side::Below => {
                let leader_end_y = centre_y + params.leader_length + params.below_axis_clearance;
                let label_y = leader_end_y + params.label_gap + params.event_font_size_px;
                (leader_end_y, label_y)
            }
        };

        let commands = vec![
            DrawCommand::Line(LineOut {
                from: Point::new(x, centre_y),
                to: Point::new(x, leader_end_y),
                style: style.leader,
            }),
            DrawCommand::Circle(CircleOut {
                centre: Point::new(x, centre_y),
                radius: params.marker_radius,
                fill_colour: style.marker_colour,
            }),
            DrawCommand::Text(TextOut {
                position: Point::new(x, label_y),
                text: event.label.clone(),
                colour: style.text_colour,
                font_size: params.event_font_size_px,
                anchor: TextAnchor::Middle,
            }),
        ];

        EventMarks {
            placement: Placement {
                event_id: event.id.clone(),
                index,
                kind: MarkKind::Point(side),
                x,
            },
            commands,
        }
    }

    /// A bar from start to end with connectors up to the axis.  The label is
    /// centred in the bar, or under it if it won't fit.
    fn span(&self, index: usize, event: &Event, start: Date, end: Date) -> EventMarks {
        let params = self.params;
        let style = &self.colours.span_event;
        let axis_y = params.axis_y();

        let x = self.scale.x(start);
        let width = (self.scale.x(end) - x).max(params.min_bar_width);
        let bar_top = match self.style {
            LayoutStyle::Banded => axis_y + params.banded_bar_offset_y,
            LayoutStyle::List => self.row_centre_y(index) - (params.bar_height / 2.0),
        };
        let bar = PositionAndSize {
            position: Point::new(x, bar_top),
            width,
            height: params.bar_height,
        };

        let connector = |x: f64| {
            DrawCommand::Line(LineOut {
                from: Point::new(x, axis_y),
                to: Point::new(x, bar_top),
                style: style.connector,
            })
        };

        let font_size = params.font_size_px;
        let label_fits = approx_text_width(&event.label, font_size)
            + (2.0 * params.bar_text_padding)
            <= width;
        let (label_y, label_colour) = if label_fits {
            (
                baseline_for_centre(bar_top + (params.bar_height / 2.0), font_size),
                style.text_colour,
            )
        } else {
            (
                bar.max_y() + params.label_gap + font_size,
                style.outside_text_colour,
            )
        };

        let commands = vec![
            connector(x),
            connector(bar.max_x()),
            DrawCommand::Rect(FilledBox {
                position_and_size: bar,
                fill_colour: style.bar.fill_colour,
                corner_radius: params.bar_corner_radius,
                border_style: style.bar.border,
            }),
            DrawCommand::Text(TextOut {
                position: Point::new(bar.centre_x(), label_y),
                text: event.label.clone(),
                colour: label_colour,
                font_size,
                anchor: TextAnchor::Middle,
            }),
        ];

        EventMarks {
            placement: Placement {
                event_id: event.id.clone(),
                index,
                kind: MarkKind::Span,
                x,
            },
            commands,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Margin;
    use nenpyo_core::TimeRange;

    fn date(date: &str) -> Date {
        Date::parse(date).unwrap()
    }

    fn layout(events: &[Event], style: LayoutStyle) -> Vec<EventMarks> {
        let range = TimeRange::new(date("2024-01-01"), date("2024-01-11"));
        let scale = TemporalScale::new(&range, 800.0, Margin::uniform(50.0)).unwrap();
        layout_events(
            events,
            &scale,
            style,
            &LayoutParams::default(),
            &TimelineColours::default(),
        )
    }

    fn rects(marks: &EventMarks) -> Vec<&FilledBox> {
        marks
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    fn text(marks: &EventMarks) -> &TextOut {
        marks
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Text(text) => Some(text),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn point_event_group() {
        let marks = layout(
            &[Event::point("a", date("2024-01-06"), "Launch")],
            LayoutStyle::Banded,
        );
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].placement.x, 400.0);
        assert_eq!(marks[0].placement.kind, MarkKind::Point(Side::Above));
        assert!(matches!(marks[0].commands[0], DrawCommand::Line(_)));
        assert!(matches!(marks[0].commands[1], DrawCommand::Circle(_)));
        assert!(matches!(marks[0].commands[2], DrawCommand::Text(_)));

        let DrawCommand::Circle(circle) = &marks[0].commands[1] else {
            panic!("expected a circle");
        };
        assert_eq!(circle.centre, Point::new(400.0, 100.0));

        let label = text(&marks[0]);
        assert_eq!(label.text, "Launch");
        assert_eq!(label.position, Point::new(400.0, 65.0));
    }

    #[test]
    fn banded_points_alternate_sides() {
        let events: Vec<Event> = (0..4)
            .map(|i| Event::point(i, date("2024-01-05"), format!("Event {i}")))
            .collect();
        let marks = layout(&events, LayoutStyle::Banded);
        let sides: Vec<MarkKind> = marks.iter().map(|marks| marks.placement.kind).collect();
        assert_eq!(
            sides,
            vec![
                MarkKind::Point(Side::Above),
                MarkKind::Point(Side::Below),
                MarkKind::Point(Side::Above),
                MarkKind::Point(Side::Below),
            ]
        );

        let axis_y = LayoutParams::default().axis_y();
        assert!(text(&marks[0]).position.y < axis_y);
        assert!(text(&marks[1]).position.y > axis_y);

        // Below the axis the label clears the tick labels
        let tick_label_y = axis_y + LayoutParams::default().tick_label_offset_y;
        assert!(text(&marks[1]).position.y > tick_label_y);
    }

    #[test]
    fn alternation_follows_input_position() {
        // The skipped event at index 1 still counts
        let events = vec![
            Event::point("a", date("2024-01-02"), "A"),
            Event::span("b", date("2024-01-05"), date("2024-01-03"), "B"),
            Event::point("c", date("2024-01-04"), "C"),
        ];
        let marks = layout(&events, LayoutStyle::Banded);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[1].placement.index, 2);
        assert_eq!(marks[1].placement.kind, MarkKind::Point(Side::Above));
    }

    #[test]
    fn list_rows_step_down() {
        let events: Vec<Event> = (0..3)
            .map(|i| Event::point(i, date("2024-01-05"), "x"))
            .collect();
        let marks = layout(&events, LayoutStyle::List);
        let centres: Vec<f64> = marks
            .iter()
            .map(|marks| match &marks.commands[1] {
                DrawCommand::Circle(circle) => circle.centre.y,
                _ => panic!("expected a circle"),
            })
            .collect();
        assert_eq!(centres, vec![180.0, 240.0, 300.0]);
        assert!(
            marks
                .iter()
                .all(|marks| marks.placement.kind == MarkKind::Point(Side::Above))
        );
    }

    #[test]
    fn span_bar() {
        let marks = layout(
            &[Event::span("a", date("2024-01-02"), date("2024-01-06"), "Trial")],
            LayoutStyle::Banded,
        );
        assert_eq!(marks[0].placement.kind, MarkKind::Span);
        let bar = rects(&marks[0])[0];
        assert_eq!(bar.position_and_size.position, Point::new(120.0, 190.0));
        assert_eq!(bar.position_and_size.width, 280.0);

        // Connectors run from the axis to the top of the bar at both ends
        let connectors: Vec<&LineOut> = marks[0]
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line(line) => Some(line),
                _ => None,
            })
            .collect();
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].from, Point::new(120.0, 100.0));
        assert_eq!(connectors[0].to, Point::new(120.0, 190.0));
        assert_eq!(connectors[1].from.x, 400.0);

        // Label fits, so it's centred in the bar
        let label = text(&marks[0]);
        assert_eq!(label.position.x, 260.0);
        assert!(label.position.y > 190.0 && label.position.y < 210.0);
        assert_eq!(label.colour, TimelineColours::default().span_event.text_colour);
    }

    #[test]
    fn zero_length_span_has_minimum_width() {
        let marks = layout(
            &[Event::span("a", date("2024-01-03"), date("2024-01-03"), "")],
            LayoutStyle::Banded,
        );
        let bar = rects(&marks[0])[0];
        assert_eq!(bar.position_and_size.width, crate::MIN_BAR_WIDTH);
        assert!(bar.position_and_size.width > 0.0);
    }

    #[test]
    fn long_span_label_goes_under_the_bar() {
        let marks = layout(
            &[Event::span(
                "a",
                date("2024-01-03"),
                date("2024-01-03"),
                "A label far too long for a bar",
            )],
            LayoutStyle::Banded,
        );
        let bar = rects(&marks[0])[0];
        let label = text(&marks[0]);
        assert!(label.position.y > bar.position_and_size.max_y());
        assert_eq!(
            label.colour,
            TimelineColours::default().span_event.outside_text_colour
        );
    }

    #[test]
    fn list_span_sits_on_its_row() {
        let events = vec![
            Event::point("a", date("2024-01-02"), "A"),
            Event::span("b", date("2024-01-03"), date("2024-01-09"), "B"),
        ];
        let marks = layout(&events, LayoutStyle::List);
        let bar = rects(&marks[1])[0];
        // Row 1 is centred at 50 + 130 + 60
        assert_eq!(bar.position_and_size.position.y, 230.0);
    }

    #[test]
    fn malformed_events_skipped() {
        let no_start = Event {
            id: "none".to_string(),
            start: None,
            end: None,
            label: String::new(),
        };
        let events = vec![
            Event::span("inverted", date("2024-01-05"), date("2024-01-02"), "Bad"),
            no_start,
            Event::point("ok", date("2024-01-04"), "Good"),
        ];
        let marks = layout(&events, LayoutStyle::Banded);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].placement.event_id, "ok");
    }

    #[test]
    fn out_of_range_events_still_drawn() {
        let marks = layout(
            &[Event::span("a", date("2023-12-30"), date("2024-01-20"), "Wide")],
            LayoutStyle::Banded,
        );
        let bar = rects(&marks[0])[0];
        assert!(bar.position_and_size.position.x < 50.0);
        assert!(bar.position_and_size.max_x() > 750.0);
    }

    #[test]
    fn non_finite_geometry_skipped() {
        let range = TimeRange::new(date("2024-01-01"), date("2024-01-11"));
        let scale = TemporalScale::new(&range, 800.0, Margin::uniform(50.0)).unwrap();
        let params = LayoutParams {
            leader_length: f64::NAN,
            ..LayoutParams::default()
        };
        let events = vec![
            Event::point("a", date("2024-01-02"), "A"),
            Event::span("b", date("2024-01-03"), date("2024-01-09"), "B"),
        ];
        let marks = layout_events(
            &events,
            &scale,
            LayoutStyle::Banded,
            &params,
            &TimelineColours::default(),
        );
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].placement.event_id, "b");
    }
}
