//! Canvas pipeline: collect shape records, validate them into shapes, and
//! render the scene onto a raster surface.
//!
//! Shapes are kept in insertion order and drawn with the painter's
//! algorithm; later shapes cover earlier ones. The grid, when enabled, is
//! painted before any shape so shapes always appear on top of it.

use std::path::Path;

use image::RgbImage;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::color::Color;
use crate::config::{self, CanvasConfig};
use crate::error::CanvasError;
use crate::params::ShapeParams;
use crate::shapes::{self, Shape, ShapeKind};
use crate::surface::Surface;

/// How a batch add reacts to an invalid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPolicy {
    /// Stop at the first invalid record and report it.
    Strict,
    /// Log and skip invalid records, keeping the valid ones.
    #[default]
    Lenient,
}

/// Summary of canvas state for introspection and logging.
#[derive(Debug, Serialize)]
pub struct CanvasInfo {
    pub size: (u32, u32),
    pub background_color: Color,
    pub show_grid: bool,
    pub line_interval: Option<u32>,
    pub shapes_count: usize,
    pub supported_shapes: Vec<&'static str>,
}

/// A drawing surface plus the ordered list of shapes to render onto it.
#[derive(Debug)]
pub struct Canvas {
    config: CanvasConfig,
    surface: Surface,
    shapes: Vec<Shape>,
    policy: AddPolicy,
}

impl Canvas {
    /// Creates an empty canvas from a resolved configuration.
    pub fn new(config: CanvasConfig) -> Result<Self, CanvasError> {
        let surface = Surface::new(config.width, config.height, config.background)?;
        debug!(
            width = config.width,
            height = config.height,
            "canvas created"
        );
        Ok(Canvas {
            config,
            surface,
            shapes: Vec::new(),
            policy: AddPolicy::default(),
        })
    }

    /// A plain canvas with no grid, for programmatic use.
    pub fn blank(width: u32, height: u32, background: Color) -> Result<Self, CanvasError> {
        Canvas::new(CanvasConfig::new(width, height, background))
    }

    /// Builds a canvas from a configuration document, adding any shape
    /// records it declares under the canvas's add policy.
    pub fn from_value(value: &Value) -> Result<Self, CanvasError> {
        let (config, records) = config::parse(value)?;
        let mut canvas = Canvas::new(config)?;
        canvas.add_records(&records)?;
        Ok(canvas)
    }

    /// Builds a canvas from a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, CanvasError> {
        let (config, records) = config::load_file(path)?;
        let mut canvas = Canvas::new(config)?;
        canvas.add_records(&records)?;
        Ok(canvas)
    }

    /// Sets the policy applied to batch adds.
    pub fn with_policy(mut self, policy: AddPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Validates one raw record and appends the resulting shape.
    pub fn add_shape(&mut self, record: Value) -> Result<&mut Self, CanvasError> {
        let params = ShapeParams::from_value(record)?;
        self.add_params(&params)?;
        Ok(self)
    }

    /// Adds a batch of raw records under the canvas's [`AddPolicy`].
    /// Returns the number of shapes actually added.
    pub fn add_shapes(&mut self, records: &[Value]) -> Result<usize, CanvasError> {
        let mut added = 0;
        for record in records {
            let outcome = ShapeParams::from_value(record.clone())
                .map_err(CanvasError::from)
                .and_then(|params| self.add_params(&params));
            match outcome {
                Ok(()) => added += 1,
                Err(err) => match self.policy {
                    AddPolicy::Strict => return Err(err),
                    AddPolicy::Lenient => {
                        warn!(error = %err, "skipping invalid shape record");
                    }
                },
            }
        }
        Ok(added)
    }

    /// Adds a batch of pre-wrapped records under the canvas's [`AddPolicy`].
    /// Returns the number of shapes actually added.
    pub fn add_records(&mut self, records: &[ShapeParams]) -> Result<usize, CanvasError> {
        let mut added = 0;
        for params in records {
            match self.add_params(params) {
                Ok(()) => added += 1,
                Err(err) => match self.policy {
                    AddPolicy::Strict => return Err(err),
                    AddPolicy::Lenient => {
                        warn!(error = %err, "skipping invalid shape record");
                    }
                },
            }
        }
        Ok(added)
    }

    fn add_params(&mut self, params: &ShapeParams) -> Result<(), CanvasError> {
        let shape = shapes::create(params)?;
        debug!(kind = %shape.kind(), "shape added");
        self.shapes.push(shape);
        Ok(())
    }

    /// Forgets all added shapes and resets the surface to the background.
    pub fn clear(&mut self) -> &mut Self {
        self.shapes.clear();
        self.surface.clear();
        self
    }

    /// Disables the coordinate grid regardless of configuration.
    pub fn hide_grid(&mut self) -> &mut Self {
        self.config.show_grid = false;
        self
    }

    /// Renders the scene: background, then the grid if enabled, then every
    /// shape in insertion order.
    pub fn render(&mut self) -> &mut Self {
        self.surface.clear();
        if let Some(grid) = self.config.grid() {
            grid.draw(&mut self.surface);
        }
        for shape in &self.shapes {
            shape.draw(&mut self.surface);
        }
        info!(shapes = self.shapes.len(), "canvas rendered");
        self
    }

    /// The rendered scene as an RGB image.
    pub fn image(&self) -> RgbImage {
        self.surface.to_image()
    }

    /// Writes the rendered scene to `path`; the format is inferred from the
    /// file extension.
    pub fn save(&self, path: &Path) -> Result<(), CanvasError> {
        self.surface.save(path)?;
        info!(path = %path.display(), "canvas saved");
        Ok(())
    }

    /// A structured summary of the canvas.
    pub fn info(&self) -> CanvasInfo {
        CanvasInfo {
            size: (self.config.width, self.config.height),
            background_color: self.config.background,
            show_grid: self.config.grid().is_some(),
            line_interval: self.config.line_interval,
            shapes_count: self.shapes.len(),
            supported_shapes: ShapeKind::supported_tags(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_batch_keeps_valid_records() {
        let mut canvas = Canvas::blank(50, 50, Color::WHITE).unwrap();
        let records = vec![
            json!({"type": "circle", "center": [25, 25], "radius": 10}),
            json!({"type": "warp_core", "center": [0, 0]}),
            json!({"type": "square", "start": [5, 5], "size": 10}),
        ];
        let added = canvas.add_shapes(&records).unwrap();
        assert_eq!(added, 2);
        assert_eq!(canvas.shape_count(), 2);
    }

    #[test]
    fn test_strict_batch_stops_at_first_error() {
        let mut canvas = Canvas::blank(50, 50, Color::WHITE)
            .unwrap()
            .with_policy(AddPolicy::Strict);
        let records = vec![
            json!({"type": "circle", "center": [25, 25], "radius": 10}),
            json!({"type": "warp_core"}),
            json!({"type": "square", "start": [5, 5], "size": 10}),
        ];
        assert!(canvas.add_shapes(&records).is_err());
        assert_eq!(canvas.shape_count(), 1);
    }

    #[test]
    fn test_info_reports_configuration() {
        let canvas = Canvas::blank(120, 80, Color::WHITE).unwrap();
        let info = canvas.info();
        assert_eq!(info.size, (120, 80));
        assert!(!info.show_grid);
        assert_eq!(info.shapes_count, 0);
        assert_eq!(info.supported_shapes.len(), 48);
    }
}
