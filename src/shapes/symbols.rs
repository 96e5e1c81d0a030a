//! Symbol payloads: cross bars and the plus/minus/multiplication signs.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::Point;
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Cross made of two filled, outlined bars.
#[derive(Debug, Clone)]
pub struct Cross {
    center: Point,
    size: f64,
    thickness: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Cross {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Cross {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            thickness: p.int_min("thickness", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let half = self.thickness / 2.0;

        let vertical = [
            Point::new(x - half, y - self.size),
            Point::new(x + half, y - self.size),
            Point::new(x + half, y + self.size),
            Point::new(x - half, y + self.size),
        ];
        surface.polygon(&vertical, self.fill, self.outline, self.border);

        let horizontal = [
            Point::new(x - self.size, y - half),
            Point::new(x + self.size, y - half),
            Point::new(x + self.size, y + half),
            Point::new(x - self.size, y + half),
        ];
        surface.polygon(&horizontal, self.fill, self.outline, self.border);
    }
}

/// Shared payload for the stroked arithmetic signs. The kind decides which
/// strokes are drawn.
#[derive(Debug, Clone)]
pub struct Sign {
    center: Point,
    size: f64,
    thickness: f64,
    color: Color,
}

impl Sign {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        p.stroke_width()?;
        Ok(Sign {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            thickness: p.int_min("thickness", 0, 1)? as f64,
            color: p.color("fill_color")?,
        })
    }

    fn horizontal(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        surface.stroke_line(
            Point::new(x - self.size, y),
            Point::new(x + self.size, y),
            self.color,
            self.thickness,
        );
    }

    fn vertical(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        surface.stroke_line(
            Point::new(x, y - self.size),
            Point::new(x, y + self.size),
            self.color,
            self.thickness,
        );
    }

    pub fn draw_plus(&self, surface: &mut Surface) {
        self.vertical(surface);
        self.horizontal(surface);
    }

    pub fn draw_minus(&self, surface: &mut Surface) {
        self.horizontal(surface);
    }

    pub fn draw_times(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        surface.stroke_line(
            Point::new(x - self.size, y - self.size),
            Point::new(x + self.size, y + self.size),
            self.color,
            self.thickness,
        );
        surface.stroke_line(
            Point::new(x + self.size, y - self.size),
            Point::new(x - self.size, y + self.size),
            self.color,
            self.thickness,
        );
    }
}
