//! Arrow payloads: block, curved, and circular arrows.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Filled arrow combining a rectangular shaft and triangular head.
#[derive(Debug, Clone)]
pub struct BlockArrow {
    start: Point,
    end: Point,
    shaft_width: f64,
    head_width: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl BlockArrow {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(BlockArrow {
            start: p.point("start")?,
            end: p.point("end")?,
            shaft_width: p.int_min("shaft_width", 0, 1)? as f64,
            head_width: p.int_min("head_width", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        if let Some(points) =
            geometry::block_arrow_points(self.start, self.end, self.shaft_width, self.head_width)
        {
            surface.polygon(&points, self.fill, self.outline, self.border);
        }
    }
}

/// Quadratic Bezier arc with an arrowhead following the end tangent.
#[derive(Debug, Clone)]
pub struct CurvedArrow {
    start: Point,
    end: Point,
    curve_height: f64,
    arrow_size: f64,
    color: Color,
    width: f64,
}

impl CurvedArrow {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(CurvedArrow {
            start: p.point("start")?,
            end: p.point("end")?,
            curve_height: p.int_min("curve_height", 0, 1)? as f64,
            arrow_size: p.int_min("arrow_size", 10, 1)? as f64,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        // Control point sits above the chord midpoint by curve_height.
        let control = Point::new(
            ((self.start.x + self.end.x) / 2.0).floor(),
            ((self.start.y + self.end.y) / 2.0).floor() - self.curve_height,
        );
        let points = geometry::quad_bezier_points(self.start, control, self.end, 50);
        surface.stroke_polyline(&points, self.color, self.width);

        let last = points[points.len() - 1];
        let prev = points[points.len() - 2];
        if let Some((ux, uy, _)) = geometry::unit_direction(prev, last) {
            let head = geometry::arrowhead(self.end, ux, uy, self.arrow_size);
            surface.fill_polygon(&head, self.color);
        }
    }
}

/// Circular arc with an arrowhead along the tangent at the end angle.
#[derive(Debug, Clone)]
pub struct CircularArrow {
    center: Point,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    arrow_size: f64,
    color: Color,
    width: f64,
}

impl CircularArrow {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(CircularArrow {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            start_angle: p.int_or("start_angle", 0)? as f64,
            end_angle: p.int_or("end_angle", 270)? as f64,
            arrow_size: p.int_min("arrow_size", 10, 1)? as f64,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points =
            geometry::arc_points(self.center, self.radius, self.start_angle, self.end_angle);
        surface.stroke_polyline(&points, self.color, self.width);

        let end_rad = self.end_angle.to_radians();
        let tip = Point::new(
            self.center.x + self.radius * end_rad.cos(),
            self.center.y + self.radius * end_rad.sin(),
        );
        let tangent = end_rad + std::f64::consts::FRAC_PI_2;
        let head = geometry::arrowhead(tip, tangent.cos(), tangent.sin(), self.arrow_size);
        surface.fill_polygon(&head, self.color);
    }
}
