//! Callout payloads: elliptical bubbles with pointers toward a target.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Elliptical bubble with a triangular pointer toward `pointer_tip`.
#[derive(Debug, Clone)]
pub struct CalloutBubble {
    center: Point,
    width: f64,
    height: f64,
    pointer_tip: Point,
    fill: Color,
    outline: Color,
    border: f64,
}

impl CalloutBubble {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(CalloutBubble {
            center: p.point("center")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            pointer_tip: p.point("pointer_tip")?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        surface.ellipse(
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y + hh),
            self.fill,
            self.outline,
            self.border,
        );

        // Base of the pointer sits just inside the ellipse edge toward
        // the tip.
        let angle = (self.pointer_tip.y - y).atan2(self.pointer_tip.x - x);
        let base = Point::new(
            x + hw * angle.cos() * 0.8,
            y + hh * angle.sin() * 0.8,
        );
        let pointer_size = (self.width.min(self.height) / 8.0).floor();
        let side1 = angle + std::f64::consts::FRAC_PI_6;
        let side2 = angle - std::f64::consts::FRAC_PI_6;
        let triangle = [
            self.pointer_tip,
            Point::new(base.x + pointer_size * side1.cos(), base.y + pointer_size * side1.sin()),
            Point::new(base.x + pointer_size * side2.cos(), base.y + pointer_size * side2.sin()),
        ];
        surface.polygon(&triangle, self.fill, self.outline, self.border);
    }
}

/// Cloud-like bubble with bumps and a trail of shrinking circles toward
/// `pointer_direction`.
#[derive(Debug, Clone)]
pub struct ThoughtBubble {
    center: Point,
    width: f64,
    height: f64,
    pointer_direction: Point,
    fill: Color,
    outline: Color,
    border: f64,
}

impl ThoughtBubble {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(ThoughtBubble {
            center: p.point("center")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            pointer_direction: p.point("pointer_direction")?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        surface.ellipse(
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y + hh),
            self.fill,
            self.outline,
            self.border,
        );

        let bump_size = (self.width.min(self.height) / 6.0).floor();
        for i in 0..4 {
            let angle = std::f64::consts::TAU * f64::from(i) / 4.0;
            let bx = x + (self.width / 3.0) * angle.cos();
            let by = y + (self.height / 3.0) * angle.sin();
            surface.ellipse(
                Point::new(bx - bump_size, by - bump_size),
                Point::new(bx + bump_size, by + bump_size),
                self.fill,
                self.outline,
                self.border,
            );
        }

        if let Some((ux, uy, _)) = geometry::unit_direction(self.center, self.pointer_direction) {
            for i in 0..3 {
                let distance = hw + f64::from(i + 1) * 20.0;
                let size = 3.0f64.max(8.0 - f64::from(i) * 2.0);
                let cx = x + ux * distance;
                let cy = y + uy * distance;
                surface.ellipse(
                    Point::new(cx - size, cy - size),
                    Point::new(cx + size, cy + size),
                    self.fill,
                    self.outline,
                    self.border,
                );
            }
        }
    }
}

/// Ellipse joined to its target by a line ending in a small dot.
#[derive(Debug, Clone)]
pub struct OvalCallout {
    center: Point,
    width: f64,
    height: f64,
    callout_point: Point,
    fill: Color,
    outline: Color,
    border: f64,
}

impl OvalCallout {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(OvalCallout {
            center: p.point("center")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            callout_point: p.point("callout_point")?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        surface.ellipse(
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y + hh),
            self.fill,
            self.outline,
            self.border,
        );

        surface.stroke_line(self.center, self.callout_point, self.outline, self.border.max(1.0));

        let dot = 3.0;
        surface.ellipse(
            Point::new(self.callout_point.x - dot, self.callout_point.y - dot),
            Point::new(self.callout_point.x + dot, self.callout_point.y + dot),
            self.fill,
            self.outline,
            self.border,
        );
    }
}
