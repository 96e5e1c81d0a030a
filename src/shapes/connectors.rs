//! Elbow connectors: two perpendicular segments through the corner point
//! `(end.x, start.y)`, with zero, one, or two arrowheads.

use crate::color::Color;
use crate::error::ValidationError;
use crate::geometry::{self, Point};
use crate::params::ShapeParams;
use crate::surface::Surface;

/// Which ends of a connector carry an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeads {
    None,
    End,
    Both,
}

/// Right-angle connector routed horizontally first, then vertically.
#[derive(Debug, Clone)]
pub struct ElbowConnector {
    start: Point,
    end: Point,
    color: Color,
    width: f64,
    arrow_size: f64,
    heads: ArrowHeads,
}

impl ElbowConnector {
    pub fn from_params(p: &ShapeParams, heads: ArrowHeads) -> Result<Self, ValidationError> {
        let arrow_size = match heads {
            ArrowHeads::None => 10.0,
            _ => p.int_min("arrow_size", 10, 1)? as f64,
        };
        Ok(ElbowConnector {
            start: p.point("start")?,
            end: p.point("end")?,
            color: p.color("fill_color")?,
            width: p.stroke_width()? as f64,
            arrow_size,
            heads,
        })
    }

    pub fn draw(&self, surface: &mut Surface) {
        let corner = Point::new(self.end.x, self.start.y);
        surface.stroke_line(self.start, corner, self.color, self.width);
        surface.stroke_line(corner, self.end, self.color, self.width);

        if matches!(self.heads, ArrowHeads::End | ArrowHeads::Both) {
            // Head direction follows the final segment, corner to end.
            if let Some((ux, uy, _)) = geometry::unit_direction(corner, self.end) {
                let head = geometry::arrowhead(self.end, ux, uy, self.arrow_size);
                surface.fill_polygon(&head, self.color);
            }
        }
        if self.heads == ArrowHeads::Both {
            // Tail head points back along the first segment.
            if let Some((ux, uy, _)) = geometry::unit_direction(corner, self.start) {
                let tail = geometry::arrowhead(self.start, ux, uy, self.arrow_size);
                surface.fill_polygon(&tail, self.color);
            }
        }
    }
}
