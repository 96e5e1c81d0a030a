//! Raster surface and primitive drawing operations.
//!
//! `Surface` wraps a `tiny-skia` pixmap and exposes the small primitive set
//! the shape model draws with: stroked lines and polylines, filled and
//! outlined polygons and ellipses, and fixed-position text labels. Geometry
//! outside the pixel bounds is clipped here, never an error.

use std::path::Path;

use image::RgbImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::color::Color;
use crate::error::DrawError;
use crate::geometry::Point;
use crate::text;

/// The mutable pixel buffer shapes draw onto. Dimensions are fixed at
/// construction.
#[derive(Debug)]
pub struct Surface {
    pixmap: Pixmap,
    background: Color,
}

impl Surface {
    /// Allocates a surface filled with the background color.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, DrawError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(DrawError::SurfaceAllocation { width, height })?;
        pixmap.fill(background.to_skia());
        Ok(Surface { pixmap, background })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixmap.fill(self.background.to_skia());
    }

    /// Strokes a single line segment.
    pub fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.stroke_polyline(&[from, to], color, width);
    }

    /// Strokes an open polyline through the given points.
    pub fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let Some(path) = build_path(points, false) else {
            return;
        };
        let paint = solid_paint(color, 255);
        let stroke = Stroke {
            width: width.max(1.0) as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fills a closed polygon with no outline.
    pub fn fill_polygon(&mut self, points: &[Point], fill: Color) {
        let Some(path) = build_path(points, true) else {
            return;
        };
        let paint = solid_paint(fill, 255);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Fills a closed polygon and strokes its outline when `border > 0`.
    pub fn polygon(&mut self, points: &[Point], fill: Color, outline: Color, border: f64) {
        self.fill_polygon(points, fill);
        if border > 0.0 {
            let Some(path) = build_path(points, true) else {
                return;
            };
            let paint = solid_paint(outline, 255);
            let stroke = Stroke {
                width: border as f32,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Fills and outlines the ellipse inscribed in the bounding box spanned
    /// by two corner points.
    pub fn ellipse(&mut self, corner_a: Point, corner_b: Point, fill: Color, outline: Color, border: f64) {
        let Some(path) = oval_path(corner_a, corner_b) else {
            return;
        };
        let paint = solid_paint(fill, 255);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        if border > 0.0 {
            let paint = solid_paint(outline, 255);
            let stroke = Stroke {
                width: border as f32,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Fills an ellipse with a translucent color, blending over what is
    /// already drawn. Used for shadow effects.
    pub fn fill_ellipse_alpha(&mut self, corner_a: Point, corner_b: Point, color: Color, alpha: u8) {
        let Some(path) = oval_path(corner_a, corner_b) else {
            return;
        };
        let paint = solid_paint(color, alpha);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Draws a small text label with its top-left corner at `(x, y)`.
    ///
    /// Glyphs come from the system font located at startup; when none is
    /// available the call is a no-op (a warning is logged once).
    pub fn draw_text(&mut self, x: f64, y: f64, label: &str, color: Color) {
        let Some(font) = text::label_font() else {
            return;
        };
        let scale = rusttype::Scale::uniform(text::LABEL_SIZE);
        let ascent = font.v_metrics(scale).ascent;
        let origin = rusttype::point(x as f32, y as f32 + ascent);

        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let data = self.pixmap.data_mut();

        for glyph in font.layout(label, scale, origin) {
            let Some(bounds) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounds.min.x;
                let py = gy as i32 + bounds.min.y;
                if px < 0 || py < 0 || px >= width || py >= height || coverage <= 0.0 {
                    return;
                }
                let idx = ((py * width + px) * 4) as usize;
                data[idx] = blend(data[idx], color.r, coverage);
                data[idx + 1] = blend(data[idx + 1], color.g, coverage);
                data[idx + 2] = blend(data[idx + 2], color.b, coverage);
                data[idx + 3] = 255;
            });
        }
    }

    /// Reads back one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let idx = ((y * self.pixmap.width() + x) * 4) as usize;
        let data = self.pixmap.data();
        Some(Color::rgb(data[idx], data[idx + 1], data[idx + 2]))
    }

    /// Raw RGBA pixel data, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Converts the surface to an RGB image, dropping alpha.
    pub fn to_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            image::Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    /// Encodes and writes the surface to `path`; the format is inferred
    /// from the file extension.
    pub fn save(&self, path: &Path) -> Result<(), DrawError> {
        self.to_image().save(path).map_err(|source| DrawError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn solid_paint(color: Color, alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia_with_alpha(alpha));
    paint.anti_alias = true;
    paint
}

fn build_path(points: &[Point], close: bool) -> Option<tiny_skia::Path> {
    if points.len() < 2 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x as f32, points[0].y as f32);
    for p in &points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

fn oval_path(corner_a: Point, corner_b: Point) -> Option<tiny_skia::Path> {
    let left = corner_a.x.min(corner_b.x) as f32;
    let top = corner_a.y.min(corner_b.y) as f32;
    let right = corner_a.x.max(corner_b.x) as f32;
    let bottom = corner_a.y.max(corner_b.y) as f32;
    let rect = Rect::from_ltrb(left, top, right, bottom)?;
    PathBuilder::from_oval(rect)
}

fn blend(under: u8, over: u8, coverage: f32) -> u8 {
    (f32::from(over) * coverage + f32::from(under) * (1.0 - coverage)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_background() {
        let surface = Surface::new(10, 8, Color::rgb(200, 10, 30)).unwrap();
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(200, 10, 30)));
        assert_eq!(surface.pixel(9, 7), Some(Color::rgb(200, 10, 30)));
        assert_eq!(surface.pixel(10, 0), None);
    }

    #[test]
    fn test_zero_sized_surface_fails() {
        assert!(Surface::new(0, 10, Color::WHITE).is_err());
    }

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut surface = Surface::new(20, 20, Color::WHITE).unwrap();
        let square = [
            Point::new(2.0, 2.0),
            Point::new(18.0, 2.0),
            Point::new(18.0, 18.0),
            Point::new(2.0, 18.0),
        ];
        surface.fill_polygon(&square, Color::rgb(255, 0, 0));
        assert_eq!(surface.pixel(10, 10), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_clear_restores_background() {
        let mut surface = Surface::new(10, 10, Color::WHITE).unwrap();
        surface.stroke_line(Point::new(0.0, 5.0), Point::new(10.0, 5.0), Color::BLACK, 2.0);
        surface.clear();
        assert_eq!(surface.pixel(5, 5), Some(Color::WHITE));
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut surface = Surface::new(10, 10, Color::WHITE).unwrap();
        surface.stroke_line(
            Point::new(100.0, 100.0),
            Point::new(200.0, 200.0),
            Color::BLACK,
            3.0,
        );
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(surface.pixel(x, y), Some(Color::WHITE));
            }
        }
    }
}
