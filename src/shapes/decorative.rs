//! Decorative payloads: heart, cloud, star, speech bubble, banner ribbon,
//! flower, butterfly, tree, sun, moon, lightning bolt.
//!
//! The compound shapes (cloud, flower, tree, butterfly) are built from
//! overlapping ellipses whose offsets are fixed fractions of the size
//! parameter.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

const YELLOW: Color = Color::rgb(255, 255, 0);

/// Heart outline from the classic parametric curve, filled as a closed
/// polygon.
#[derive(Debug, Clone)]
pub struct Heart {
    center: Point,
    size: f64,
    rotation: f64,
    num_points: u32,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Heart {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Heart {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            rotation: p.int_or("rotation_angle", 0)? as f64,
            num_points: p.count("num_points", 100, 3)?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points =
            geometry::heart_points(self.center, self.size, self.rotation, self.num_points);
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Cloud built from four overlapping ellipses.
#[derive(Debug, Clone)]
pub struct Cloud {
    center: Point,
    size: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Cloud {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Cloud {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let s = self.size;
        let puffs = [
            // Main body, then left, right, and top puffs.
            (x - s, y - s / 2.0, x + s, y + s / 2.0),
            (x - s / 2.0, y - s / 3.0, x + s / 3.0, y + s / 3.0),
            (x - s / 3.0, y - s / 3.0, x + s / 2.0, y + s / 3.0),
            (x - s / 3.0, y - s, x + s / 3.0, y),
        ];
        for (left, top, right, bottom) in puffs {
            surface.ellipse(
                Point::new(left, top),
                Point::new(right, bottom),
                self.fill,
                self.outline,
                self.border,
            );
        }
    }
}

/// Star polygon with alternating outer and inner vertices.
#[derive(Debug, Clone)]
pub struct Star {
    center: Point,
    size: f64,
    num_points: u32,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Star {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Star {
            center: p.point("center")?,
            size: p.int_min("size", 0, 1)? as f64,
            num_points: p.count("num_points", 5, 3)?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let points = geometry::star_points(self.center, self.size, self.num_points);
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Rectangular speech bubble with a triangular tail below.
#[derive(Debug, Clone)]
pub struct SpeechBubble {
    start: Point,
    end: Point,
    tail_size: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl SpeechBubble {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(SpeechBubble {
            start: p.point("start")?,
            end: p.point("end")?,
            tail_size: p.int_min("tail_size", 10, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        super::basic::draw_rect(surface, self.start, self.end, self.fill, self.outline, self.border);

        let center_x = ((self.start.x + self.end.x) / 2.0).floor();
        let tail = [
            Point::new(center_x - self.tail_size, self.end.y),
            Point::new(center_x + self.tail_size, self.end.y),
            Point::new(center_x, self.end.y + self.tail_size),
        ];
        surface.polygon(&tail, self.fill, self.outline, self.border);
    }
}

/// Banner ribbon: a rectangle whose right edge comes to a point.
#[derive(Debug, Clone)]
pub struct BannerRibbon {
    start: Point,
    width: f64,
    height: f64,
    tail_length: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl BannerRibbon {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(BannerRibbon {
            start: p.point("start")?,
            width: p.int_min("width", 0, 1)? as f64,
            height: p.int_min("height", 0, 1)? as f64,
            tail_length: p.int_min("tail_length", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.start.x, self.start.y);
        let points = [
            Point::new(x, y),
            Point::new(x + self.width - self.tail_length, y),
            Point::new(x + self.width, y + self.height / 2.0),
            Point::new(x + self.width - self.tail_length, y + self.height),
            Point::new(x, y + self.height),
        ];
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}

/// Flower: petal ellipses arranged around a central disc.
#[derive(Debug, Clone)]
pub struct Flower {
    center: Point,
    petal_size: f64,
    num_petals: u32,
    fill: Color,
    outline: Color,
    center_color: Color,
    border: f64,
}

impl Flower {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Flower {
            center: p.point("center")?,
            petal_size: p.int_min("petal_size", 0, 1)? as f64,
            num_petals: p.count("num_petals", 6, 3)?,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            center_color: p.color_or("center_color", YELLOW)?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        for i in 0..self.num_petals {
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(self.num_petals);
            let px = x + self.petal_size * 0.7 * angle.cos();
            let py = y + self.petal_size * 0.7 * angle.sin();
            surface.ellipse(
                Point::new(px - self.petal_size / 3.0, py - self.petal_size / 2.0),
                Point::new(px + self.petal_size / 3.0, py + self.petal_size / 2.0),
                self.fill,
                self.outline,
                self.border,
            );
        }
        let center_size = self.petal_size / 3.0;
        surface.ellipse(
            Point::new(x - center_size, y - center_size),
            Point::new(x + center_size, y + center_size),
            self.center_color,
            self.outline,
            self.border,
        );
    }
}

/// Butterfly: two large upper wings, two smaller lower wings, a body line,
/// and antennae.
#[derive(Debug, Clone)]
pub struct Butterfly {
    center: Point,
    wing_size: f64,
    fill: Color,
    outline: Color,
    body_color: Color,
    border: f64,
}

impl Butterfly {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Butterfly {
            center: p.point("center")?,
            wing_size: p.int_min("wing_size", 0, 1)? as f64,
            fill: p.color("fill_color")?,
            outline: p.color("outline_color")?,
            body_color: p.color_or("body_color", Color::BLACK)?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let w = self.wing_size;
        let lower = w / 2.0;

        let wings = [
            (x - w - w / 2.0, y - w, x - 5.0, y - 5.0),
            (x + 5.0, y - w, x + w + w / 2.0, y - 5.0),
            (x - w, y + 5.0, x - 5.0, y + lower + 5.0),
            (x + 5.0, y + 5.0, x + w, y + lower + 5.0),
        ];
        for (left, top, right, bottom) in wings {
            surface.ellipse(
                Point::new(left, top),
                Point::new(right, bottom),
                self.fill,
                self.outline,
                self.border,
            );
        }

        let body_width = 3.0f64.max(self.border + 1.0);
        surface.stroke_line(
            Point::new(x, y - w),
            Point::new(x, y + lower),
            self.body_color,
            body_width,
        );

        let antenna = w / 3.0;
        surface.stroke_line(
            Point::new(x - 2.0, y - w),
            Point::new(x - 5.0, y - w - antenna),
            self.body_color,
            1.0,
        );
        surface.stroke_line(
            Point::new(x + 2.0, y - w),
            Point::new(x + 5.0, y - w - antenna),
            self.body_color,
            1.0,
        );
    }
}

/// Tree: rectangular trunk below a crown of five overlapping ellipses.
#[derive(Debug, Clone)]
pub struct Tree {
    base: Point,
    height: f64,
    crown_width: f64,
    trunk_color: Color,
    crown_color: Color,
    outline: Color,
    border: f64,
}

impl Tree {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Tree {
            base: p.point("base")?,
            height: p.int_min("height", 0, 1)? as f64,
            crown_width: p.int_min("crown_width", 0, 1)? as f64,
            trunk_color: p.color_or("trunk_color", Color::rgb(139, 69, 19))?,
            crown_color: p.color_or("crown_color", Color::rgb(34, 139, 34))?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.base.x, self.base.y);
        let trunk_width = self.crown_width / 6.0;
        let trunk_height = self.height / 3.0;

        let trunk = [
            Point::new(x - trunk_width, y),
            Point::new(x + trunk_width, y),
            Point::new(x + trunk_width, y - trunk_height),
            Point::new(x - trunk_width, y - trunk_height),
        ];
        surface.polygon(&trunk, self.trunk_color, self.outline, self.border);

        let crown_y = y - trunk_height - self.crown_width / 3.0;
        let half = self.crown_width / 2.0;
        surface.ellipse(
            Point::new(x - half, crown_y - half),
            Point::new(x + half, crown_y + half),
            self.crown_color,
            self.outline,
            self.border,
        );
        let extra = self.crown_width / 3.0;
        for i in 0..4 {
            let angle = std::f64::consts::TAU * f64::from(i) / 4.0;
            let ox = self.crown_width / 4.0 * angle.cos();
            let oy = self.crown_width / 4.0 * angle.sin();
            surface.ellipse(
                Point::new(x + ox - extra / 2.0, crown_y + oy - extra / 2.0),
                Point::new(x + ox + extra / 2.0, crown_y + oy + extra / 2.0),
                self.crown_color,
                self.outline,
                self.border,
            );
        }
    }
}

/// Sun: a disc surrounded by radial ray lines.
#[derive(Debug, Clone)]
pub struct Sun {
    center: Point,
    radius: f64,
    num_rays: u32,
    ray_length: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Sun {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Sun {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            num_rays: p.count("num_rays", 8, 4)?,
            ray_length: p.int_min("ray_length", 0, 1)? as f64,
            fill: p.color_or("fill_color", YELLOW)?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let ray_width = 2.0f64.max(self.border);
        for i in 0..self.num_rays {
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(self.num_rays);
            let from = Point::new(x + self.radius * angle.cos(), y + self.radius * angle.sin());
            let to = Point::new(
                x + (self.radius + self.ray_length) * angle.cos(),
                y + (self.radius + self.ray_length) * angle.sin(),
            );
            surface.stroke_line(from, to, self.fill, ray_width);
        }
        surface.ellipse(
            Point::new(x - self.radius, y - self.radius),
            Point::new(x + self.radius, y + self.radius),
            self.fill,
            self.outline,
            self.border,
        );
    }
}

/// Moon: a full disc, or a crescent formed by blending a translucent
/// shadow disc offset by the phase.
#[derive(Debug, Clone)]
pub struct Moon {
    center: Point,
    radius: f64,
    phase_offset: i64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl Moon {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(Moon {
            center: p.point("center")?,
            radius: p.int_min("radius", 0, 1)? as f64,
            phase_offset: p.int_or("phase_offset", 0)?,
            fill: p.color_or("fill_color", Color::rgb(255, 255, 224))?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.center.x, self.center.y);
        let a = Point::new(x - self.radius, y - self.radius);
        let b = Point::new(x + self.radius, y + self.radius);
        surface.ellipse(a, b, self.fill, self.outline, self.border);

        if self.phase_offset != 0 {
            let shadow_x = x + (self.phase_offset.unsigned_abs() as f64 * self.radius / 100.0);
            surface.fill_ellipse_alpha(
                Point::new(shadow_x - self.radius, y - self.radius),
                Point::new(shadow_x + self.radius, y + self.radius),
                Color::BLACK,
                200,
            );
        }
    }
}

/// Lightning bolt: a fixed eleven-point polygon scaled by width and height.
#[derive(Debug, Clone)]
pub struct LightningBolt {
    start: Point,
    height: f64,
    width: f64,
    fill: Color,
    outline: Color,
    border: f64,
}

impl LightningBolt {
    pub fn from_params(p: &ShapeParams) -> Result<Self, ValidationError> {
        Ok(LightningBolt {
            start: p.point("start")?,
            height: p.int_min("height", 0, 1)? as f64,
            width: p.int_min("width", 0, 1)? as f64,
            fill: p.color_or("fill_color", YELLOW)?,
            outline: p.color("outline_color")?,
            border: p.outline_width()? as f64,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let (x, y) = (self.start.x, self.start.y);
        let (w, h) = (self.width, self.height);
        let points = [
            Point::new(x, y),
            Point::new(x + w / 3.0, y + h / 3.0),
            Point::new(x - w / 6.0, y + h / 3.0),
            Point::new(x + w / 6.0, y + 2.0 * h / 3.0),
            Point::new(x - w / 3.0, y + 2.0 * h / 3.0),
            Point::new(x, y + h),
            Point::new(x + w / 4.0, y + 2.0 * h / 3.0),
            Point::new(x + w / 2.0, y + 2.0 * h / 3.0),
            Point::new(x + w / 6.0, y + h / 3.0),
            Point::new(x + w / 2.0, y + h / 3.0),
            Point::new(x + w / 3.0, y),
        ];
        surface.polygon(&points, self.fill, self.outline, self.border);
    }
}
