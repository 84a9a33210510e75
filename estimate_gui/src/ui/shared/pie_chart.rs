//! Canvas drawing for the cost distribution pie chart
//!
//! Slices run clockwise from twelve o'clock in line order, colored from the
//! shared chart palette, with the percentage printed inside slices large
//! enough to hold it.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use estimate_core::calculations::breakdown::{chart_color, CostShare};

use crate::Message;

/// Slices smaller than this get no label
const MIN_LABEL_FRACTION: f64 = 0.05;

/// Segments per full turn when approximating the arc
const ARC_SEGMENTS: f32 = 96.0;

pub fn palette_color(index: usize) -> Color {
    let [r, g, b] = chart_color(index);
    Color::from_rgb8(r, g, b)
}

/// Canvas program for the pie chart
pub struct PieChart {
    shares: Vec<CostShare>,
}

impl PieChart {
    pub fn new(shares: Vec<CostShare>) -> Self {
        Self { shares }
    }

    /// Closed wedge from `start` to `end` (radians, clockwise from 12 o'clock).
    fn wedge(center: Point, radius: f32, start: f32, end: f32) -> Path {
        let steps = (((end - start) / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
        Path::new(|builder| {
            builder.move_to(center);
            for step in 0..=steps {
                let angle = start + (end - start) * step as f32 / steps as f32;
                builder.line_to(on_circle(center, radius, angle));
            }
            builder.close();
        })
    }
}

fn on_circle(center: Point, radius: f32, angle: f32) -> Point {
    // angle 0 points up
    let a = angle - FRAC_PI_2;
    Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

impl canvas::Program<Message> for PieChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - 8.0;
        let outline = theme.extended_palette().background.base.color;

        let total: f64 = self.shares.iter().map(|s| s.fraction).sum();
        if total <= 0.0 || radius <= 0.0 {
            // nothing to split: draw an empty ring
            let ring = Path::circle(center, radius.max(1.0));
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_color(Color::from_rgb(0.7, 0.7, 0.7))
                    .with_width(2.0),
            );
            return vec![frame.into_geometry()];
        }

        let mut start = 0.0_f32;
        for (i, share) in self.shares.iter().enumerate() {
            if share.fraction <= 0.0 {
                continue;
            }
            let sweep = share.fraction as f32 * TAU;
            let end = start + sweep;

            let slice = Self::wedge(center, radius, start, end);
            frame.fill(&slice, palette_color(i));
            frame.stroke(&slice, Stroke::default().with_color(outline).with_width(1.5));

            if share.fraction >= MIN_LABEL_FRACTION {
                let anchor = on_circle(center, radius * 0.65, start + sweep / 2.0);
                let label = Text {
                    content: format!("{:.0}%", share.percent()),
                    position: Point::new(anchor.x, anchor.y - 6.0),
                    color: Color::WHITE,
                    size: iced::Pixels(12.0),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                };
                frame.fill_text(label);
            }

            start = end;
        }

        vec![frame.into_geometry()]
    }
}
