//! Polygon-family payloads: explicit coordinate polygons, regular n-gons,
//! and the fixed quadrilaterals (rhombus, parallelogram, trapezoid,
//! diamond) plus the three-point triangle.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Polygon from an explicit list of at least three vertices.
#[derive(Debug, Clone)]
pub struct CoordinatePolygon {
    points: Vec<Point>,
    fill: Color,
    outline: Color,
    border: f64,
}

impl CoordinatePolygon {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(CoordinatePolygon {
            points: p.point_list("coordinates", 3)?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.polygon(&self.points, self.fill, self.outline, self.border);
    }
}

/// Regular n-gon. Also backs the pentagon, hexagon, and octagon kinds,
/// which fix the side count instead of reading `n_sides`.
#[derive(Debug, Clone)]
pub struct RegularPolygon {
    center: Point,
    radius: f64,
    sides: u32,
    rotation: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl RegularPolygon {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        let sides = p.count("n_sides", 6, 3)?;
        Self::build(p, sides)
    }

    pub fn with_sides(p: &ShapeParams, sides: u32) -> Result<Self, ValidationError> {
        Self::build(p, sides)
    }

    fn build(p: &ShapeParams, sides: u32) -> Result<Self, ValidationError> {
        Ok(RegularPolygon {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            sides,
            rotation: p.int_or("rotation", 0)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points =
            geometry::regular_polygon_points(self.center, self.radius, self.sides, self.rotation);
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Triangle from three explicit vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    points: [Point; 3],
    fill: Color,
    outline: Color,
    border: f64,
}

impl Triangle {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Triangle {
            points: [p.point("point1")?, p.point("point2")?, p.point("point3")?],
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.polygon(&self.points, self.fill, self.outline, self.border);
    }
}

/// Rhombus with independent diagonals, optionally rotated about its center.
#[derive(Debug, Clone)]
pub struct Rhombus {
    center: Point,
    width: f64,
    height: f64,
    rotation: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Rhombus {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Rhombus {
            center: p.point("center")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            rotation: p.int_or("rotation", 0)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let mut points = vec![
            Point::new(x, y - self.height / 2.0),
            Point::new(x + self.width / 2.0, y),
            Point::new(x, y + self.height / 2.0),
            Point::new(x - self.width / 2.0, y),
        ];
        if self.rotation != 0.0 {
            for point in &mut points {
                *point = geometry::rotate_point(*point, self.center, self.rotation);
            }
        }
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Parallelogram: a rectangle whose top edge is shifted by `skew`.
#[derive(Debug, Clone)]
pub struct Parallelogram {
    start: Point,
    width: f64,
    height: f64,
    skew: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Parallelogram {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Parallelogram {
            start: p.point("start")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            skew: p.int_or("skew", 0)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.start.x, self.start.y);
        let points = [
            Point::new(x + self.skew, y),
            Point::new(x + self.width + self.skew, y),
            Point::new(x + self.width, y + self.height),
            Point::new(x, y + self.height),
        ];
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Trapezoid with the narrower top edge centered over the bottom edge.
#[derive(Debug, Clone)]
pub struct Trapezoid {
    start: Point,
    bottom_width: f64,
    top_width: f64,
    height: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Trapezoid {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Trapezoid {
            start: p.point("start")?,
            bottom_width: p.int_min("bottom_width", 0, 1)? as f64,
            top_width: p.int_min("top_width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.start.x, self.start.y);
        let top_offset = ((self.bottom_width - self.top_width) / 2.0).floor();
        let points = [
            Point::new(x + top_offset, y),
            Point::new(x + top_offset + self.top_width, y),
            Point::new(x + self.bottom_width, y + self.height),
            Point::new(x, y + self.height),
        ];
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Diamond: the four axis-aligned points at distance `size` from center.
#[derive(Debug, Clone)]
pub struct Diamond {
    center: Point,
    size: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Diamond {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Diamond {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let points = [
            Point::new(x, y - self.size),
            Point::new(x + self.size, y),
            Point::new(x, y + self.size),
            Point::new(x - self.size, y),
        ];
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}
