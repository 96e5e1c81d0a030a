//! Basic filled shapes: rectangle, square, circle, ellipse.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::Point;
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Axis-aligned rectangle spanned by two corner points.
#[derive(Debug, Clone)]
pub struct Rectangle {
    start: Point,
    end: Point,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Rectangle {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Rectangle {
            start: p.point("start")?,
            end: p.point("end")?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        draw_rect(surface, self.start, self.end, self.fill, self.outline, self.border);
    }
}

/// Axis-aligned square anchored at its top-left corner.
#[derive(Debug, Clone)]
pub struct Square {
    start: Point,
    size: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Square {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Square {
            start: p.point("start")?,
            size: p.int_min("size", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let end = Point::new(self.start.x + self.size, self.start.y + self.size);
        draw_rect(surface, self.start, end, self.fill, self.outline, self.border);
    }
}

/// Circle described by center and radius.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
    radius: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Circle {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Circle {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let a = Point::new(self.center.x - self.radius, self.center.y - self.radius);
        let b = Point::new(self.center.x + self.radius, self.center.y + self.radius);
        surface.ellipse(a, b, self.fill, self.outline, self.border);
    }
}

/// Ellipse inscribed in the bounding box spanned by two corner points.
#[derive(Debug, Clone)]
pub struct Ellipse {
    start: Point,
    end: Point,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Ellipse {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Ellipse {
            start: p.point("start")?,
            end: p.point("end")?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.ellipse(self.start, self.end, self.fill, self.outline, self.border);
    }
}

pub(crate) fn draw_rect(
    surface: &mut Surface,
    a: Point,
    b: Point,
    fill: Color,
    outline: Color,
    border: f64,
) {
    let corners = [
        a,
        Point::new(b.x, a.y),
        b,
        Point::new(a.x, b.y),
    ];
    surface.polygon(&corners, fill, outline, border);
}
