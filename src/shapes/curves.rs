//! Curve payloads: spiral, helix, sine wave pattern, and the recursive
//! fractal tree.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Upper bound on fractal recursion depth; branch count is `2^levels - 1`.
pub const MAX_FRACTAL_LEVELS: i64 = 12;

/// Archimedean spiral stroked as a polyline.
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point,
    max_radius: f64,
    turns: u32,
    color: Color,
    width: f64,
}

impl Spiral {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Spiral {
            center: p.point("center")?,
            max_radius: p.int_min("max_radius", 0, 1)? as f64,
            turns: p.count("turns", 3, 1)?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points = geometry::spiral_points(self.center, self.max_radius, self.turns);
        surface.stroke_polyline(&points, self.color, self.width);
    }
}

/// Side-on helix projection stroked as a polyline.
#[derive(Debug, Clone)]
pub struct Helix {
    center: Point,
    radius: f64,
    height: f64,
    turns: u32,
    color: Color,
    width: f64,
}

impl Helix {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Helix {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            turns: p.count("turns", 3, 1)?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points = geometry::helix_points(self.center, self.radius, self.height, self.turns);
        surface.stroke_polyline(&points, self.color, self.width);
    }
}

/// Horizontal sine wave stroked across `width` pixels.
#[derive(Debug, Clone)]
pub struct SineWave {
    start: Point,
    width: f64,
    amplitude: f64,
    frequency: u32,
    color: Color,
    stroke: f64,
}

impl SineWave {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(SineWave {
            start: p.point("start")?,
            width: p.int_min("width", 0, 1)? as f64,
            amplitude: p.int_min("amplitude", 0, 1)? as f64,
            frequency: p.count("frequency", 1, 1)?,
            color: p.color("fill_color")?,
            stroke: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points =
            geometry::sine_wave_points(self.start, self.width, self.amplitude, self.frequency);
        surface.stroke_polyline(&points, self.color, self.stroke);
    }
}

/// Binary fractal tree grown upward from its base. Branch stroke width
/// tapers with depth.
#[derive(Debug, Clone)]
pub struct FractalTree {
    base: Point,
    height: f64,
    levels: u32,
    angle: f64,
    color: Color,
    width: i64,
}

impl FractalTree {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(FractalTree {
            base: p.point("base")?,
            height: p.int_min("height", 0, 1)? as f64,
            levels: p.int_range("levels", 4, 1, MAX_FRACTAL_LEVELS)? as u32,
            angle: p.int_min("angle", 45, 1)? as f64,
            color: p.color("fill_color")?,
            width: p.stroke_width()?,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        for branch in geometry::fractal_branches(self.base, self.height, self.levels, self.angle) {
            let stroke = 1.max(self.width - i64::from(branch.level) + 1) as f64;
            surface.stroke_line(branch.start, branch.end, self.color, stroke);
        }
    }
}
