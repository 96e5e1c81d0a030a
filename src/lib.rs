//! Declarative 2D shape rendering onto a raster canvas.
//!
//! Scenes are described as flat JSON records: a configuration object fixes
//! the canvas size, background, and optional coordinate grid, and each shape
//! record carries a `type` tag plus the parameters for that kind. Records
//! are validated into typed shape instances when added, then rendered in
//! insertion order with the painter's algorithm.
//!
//! ```no_run
//! use serde_json::json;
//! use shape_canvas::{Canvas, Color};
//!
//! # fn main() -> Result<(), shape_canvas::CanvasError> {
//! let mut canvas = Canvas::blank(400, 300, Color::WHITE)?;
//! canvas.add_shape(json!({
//!     "type": "circle",
//!     "center": [200, 150],
//!     "radius": 60,
//!     "fill_color": [255, 0, 0]
//! }))?;
//! canvas.render().save(std::path::Path::new("out.png"))?;
//! # Ok(())
//! # }
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod params;
pub mod shapes;
pub mod surface;
mod text;

pub use canvas::{AddPolicy, Canvas, CanvasInfo};
pub use color::Color;
pub use config::CanvasConfig;
pub use error::{CanvasError, ConfigError, DrawError, ShapeError, ValidationError};
pub use geometry::Point;
pub use grid::GridSpec;
pub use params::ShapeParams;
pub use shapes::{Shape, ShapeKind};
pub use surface::Surface;

/// Initializes the tracing subscriber for binaries. Honors `RUST_LOG`,
/// defaulting to INFO (DEBUG when `verbose` is set).
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
