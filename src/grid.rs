//! Coordinate grid overlay.
//!
//! Lines are placed at every multiple of the interval that fits in the
//! surface, so a `W x H` surface gets `floor(W / I) + 1` vertical and
//! `floor(H / I) + 1` horizontal lines, with a `"(x,y)"` label at each
//! intersection. The far edge carries a line exactly when the interval
//! divides the extent; no line is forced onto the edge otherwise.

use crate::color::Color;
use crate::geometry::Point;
use crate::surface::Surface;

/// Grid configuration resolved from the canvas config.
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Spacing between lines in pixels. Always positive.
    pub interval: u32,
    /// Line color; defaults to gray when the config names none.
    pub color: Color,
}

impl GridSpec {
    /// Draws grid lines and intersection labels over the whole surface.
    pub fn draw(&self, surface: &mut Surface) {
        let width = surface.width();
        let height = surface.height();

        for x in line_positions(width, self.interval) {
            surface.stroke_line(
                Point::new(f64::from(x), 0.0),
                Point::new(f64::from(x), f64::from(height)),
                self.color,
                1.0,
            );
        }
        for y in line_positions(height, self.interval) {
            surface.stroke_line(
                Point::new(0.0, f64::from(y)),
                Point::new(f64::from(width), f64::from(y)),
                self.color,
                1.0,
            );
        }

        for x in line_positions(width, self.interval) {
            for y in line_positions(height, self.interval) {
                surface.draw_text(
                    f64::from(x),
                    f64::from(y),
                    &format!("({x},{y})"),
                    Color::BLACK,
                );
            }
        }
    }
}

/// Line coordinates along one axis: `0, interval, ...` up to and including
/// `extent`.
pub fn line_positions(extent: u32, interval: u32) -> impl Iterator<Item = u32> {
    (0..=extent).step_by(interval.max(1) as usize)
}
