//! Error types for the shape-canvas library.
//!
//! Each layer has its own error enum: configuration loading, shape parameter
//! validation, shape resolution, and drawing. `CanvasError` is the umbrella
//! returned by the canvas pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating canvas configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("Invalid JSON in configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required top-level key is absent.
    #[error("Missing required configuration key '{key}'")]
    MissingKey {
        /// Name of the absent key.
        key: &'static str,
    },

    /// A top-level key is present but malformed.
    #[error("Invalid value for configuration key '{key}': {reason}")]
    InvalidKey {
        /// Name of the offending key.
        key: &'static str,
        /// What was expected.
        reason: String,
    },
}

/// Errors raised when a shape record's parameters fail type or range checks.
///
/// Every variant names the offending parameter key so callers can report
/// which field of which record was rejected.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required parameter is absent.
    #[error("Missing required parameter '{key}'")]
    MissingKey {
        /// Name of the absent parameter.
        key: String,
    },

    /// A parameter is present but has the wrong shape or type.
    #[error("Invalid value for '{key}': expected {expected}")]
    InvalidValue {
        /// Name of the offending parameter.
        key: String,
        /// Description of the expected form.
        expected: &'static str,
    },

    /// An integer parameter is below its documented minimum.
    #[error("Value for '{key}' must be >= {min}")]
    BelowMinimum {
        /// Name of the offending parameter.
        key: String,
        /// The minimum allowed value.
        min: i64,
    },

    /// An integer parameter is above its documented maximum.
    #[error("Value for '{key}' must be <= {max}")]
    AboveMaximum {
        /// Name of the offending parameter.
        key: String,
        /// The maximum allowed value.
        max: i64,
    },

    /// A color parameter is not a triple of integers in [0, 255].
    #[error("Color values for '{key}' must be integers between 0 and 255")]
    InvalidColor {
        /// Name of the offending parameter.
        key: String,
    },

    /// A point-list parameter has fewer entries than required.
    #[error("'{key}' must be a list of at least {min} points")]
    TooFewPoints {
        /// Name of the offending parameter.
        key: String,
        /// Minimum number of points.
        min: usize,
    },
}

/// Errors raised while resolving a shape record into a shape instance.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The record has no `type` key.
    #[error("Shape record must contain a 'type' field")]
    MissingType,

    /// The `type` tag does not name a registered shape kind.
    #[error("Unknown shape type: {tag}")]
    UnknownType {
        /// The unrecognized tag.
        tag: String,
    },

    /// The tag resolved but the record's parameters failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors raised while drawing to or exporting the raster surface.
#[derive(Error, Debug)]
pub enum DrawError {
    /// The backing pixmap could not be allocated.
    #[error("Failed to allocate {width}x{height} surface")]
    SurfaceAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Writing the rendered image to disk failed.
    #[error("Failed to save canvas to {path}: {source}")]
    Save {
        /// Destination path.
        path: PathBuf,
        /// Underlying encoder or I/O error.
        source: image::ImageError,
    },
}

/// Umbrella error for canvas pipeline operations.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Draw(#[from] DrawError),
}

impl From<ValidationError> for CanvasError {
    fn from(err: ValidationError) -> Self {
        CanvasError::Shape(ShapeError::Invalid(err))
    }
}
