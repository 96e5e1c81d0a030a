//! Line-family payloads: straight, dashed, zigzag, wavy, and arrowhead
//! lines. All are pure strokes, so `border_width` must be at least 1.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// A single stroked segment.
#[derive(Debug, Clone)]
pub struct StraightLine {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
}

impl StraightLine {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(StraightLine {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.stroke_line(self.start, self.end, self.color, self.width);
    }
}

/// A segment stroked in alternating dashes of `dash_length` units.
#[derive(Debug, Clone)]
pub struct DashedLine {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    dash_length: f64,
}

impl DashedLine {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(DashedLine {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
            dash_length: p.int_min("dash_length", 10, 1)? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        for (from, to) in geometry::dash_segments(self.start, self.end, self.dash_length) {
            surface.stroke_line(from, to, self.color, self.width);
        }
    }
}

/// A segment stroked as a zigzag with alternating perpendicular offsets.
#[derive(Debug, Clone)]
pub struct ZigzagLine {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    height: f64,
    frequency: u32,
}

impl ZigzagLine {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(ZigzagLine {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
            height: p.int_min("zigzag_height", 10, 1)? as f64,
            frequency: p.count("zigzag_frequency", 5, 1)?,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points = geometry::zigzag_points(self.start, self.end, self.height, self.frequency);
        surface.stroke_polyline(&points, self.color, self.width);
    }
}

/// A segment stroked as a sine wave perpendicular to its direction.
#[derive(Debug, Clone)]
pub struct WavyLine {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    amplitude: f64,
    frequency: u32,
}

impl WavyLine {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(WavyLine {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
            amplitude: p.int_min("wave_amplitude", 10, 1)? as f64,
            frequency: p.count("wave_frequency", 3, 1)?,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points = geometry::wave_points(self.start, self.end, self.amplitude, self.frequency);
        surface.stroke_polyline(&points, self.color, self.width);
    }
}

/// A straight line with a filled arrowhead at the end, and optionally at
/// the start as well. Shared by the single and double arrowhead kinds.
#[derive(Debug, Clone)]
pub struct ArrowLine {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    arrow_size: f64,
    double: bool,
}

impl ArrowLine {
    pub fn from_params(p: &ShapeParams, double: bool) -> Result<Self, ValidationError> {
        Ok(ArrowLine {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
            arrow_size: p.int_min("arrow_size", 10, 1)? as f64,
            double,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.stroke_line(self.start, self.end, self.color, self.width);

        let Some((ux, uy, _)) = geometry::unit_direction(self.start, self.end) else {
            return;
        };
        let head = geometry::arrowhead(self.end, ux, uy, self.arrow_size);
        surface.fill_polygon(&head, self.color);
        if self.double {
            let tail = geometry::arrowhead(self.start, -ux, -uy, self.arrow_size);
            surface.fill_polygon(&tail, self.color);
        }
    }
}
