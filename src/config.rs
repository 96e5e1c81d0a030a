//! Canvas configuration loading.
//!
//! A configuration document is a JSON object with the canvas dimensions,
//! background color, optional grid settings, and an optional `shapes` array
//! of raw shape records. Parsing is strict about the keys it knows and
//! ignores keys it does not.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::color::Color;
use crate::error::ConfigError;
use crate::grid::GridSpec;
use crate::params::ShapeParams;

/// Resolved canvas configuration.
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color painted before anything else.
    pub background: Color,
    /// Grid line spacing; `None` disables the grid entirely.
    pub line_interval: Option<u32>,
    /// Grid line color; gray when unspecified.
    pub line_color: Option<Color>,
    /// Whether the grid is drawn. Defaults to true exactly when a
    /// `line_interval` is configured.
    pub show_grid: bool,
}

impl CanvasConfig {
    /// A plain canvas with no grid.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        CanvasConfig {
            width,
            height,
            background,
            line_interval: None,
            line_color: None,
            show_grid: false,
        }
    }

    /// The grid to draw, if any.
    pub fn grid(&self) -> Option<GridSpec> {
        if !self.show_grid {
            return None;
        }
        self.line_interval.map(|interval| GridSpec {
            interval,
            color: self.line_color.unwrap_or(Color::GRAY),
        })
    }

    /// Parses the canvas portion of a configuration object.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::InvalidKey {
            key: "canvas",
            reason: "configuration must be a JSON object".into(),
        })?;

        let (width, height) = match object.get("canvas_size") {
            None => return Err(ConfigError::MissingKey { key: "canvas_size" }),
            Some(value) => parse_size(value)?,
        };

        let background = match object.get("background_color") {
            None => {
                return Err(ConfigError::MissingKey {
                    key: "background_color",
                })
            }
            Some(value) => parse_rgb(value, "background_color")?,
        };

        let line_interval = match object.get("line_interval") {
            None => None,
            Some(value) => Some(parse_positive(value, "line_interval")?),
        };

        let line_color = match object.get("line_color") {
            None => None,
            Some(value) => Some(parse_line_color(value)?),
        };

        let show_grid = match object.get("show_grid") {
            None => line_interval.is_some(),
            Some(value) => value.as_bool().ok_or(ConfigError::InvalidKey {
                key: "show_grid",
                reason: "expected a boolean".into(),
            })?,
        };

        Ok(CanvasConfig {
            width,
            height,
            background,
            line_interval,
            line_color,
            show_grid,
        })
    }
}

/// Parses a full configuration document: the canvas settings plus any
/// declared shape records.
pub fn parse(value: &Value) -> Result<(CanvasConfig, Vec<ShapeParams>), ConfigError> {
    let config = CanvasConfig::from_value(value)?;

    let mut records = Vec::new();
    if let Some(shapes) = value.get("shapes") {
        let entries = shapes.as_array().ok_or(ConfigError::InvalidKey {
            key: "shapes",
            reason: "expected an array of shape records".into(),
        })?;
        for entry in entries {
            let map = entry
                .as_object()
                .cloned()
                .ok_or(ConfigError::InvalidKey {
                    key: "shapes",
                    reason: "each shape record must be a JSON object".into(),
                })?;
            records.push(ShapeParams::new(map));
        }
    }

    debug!(
        width = config.width,
        height = config.height,
        shapes = records.len(),
        "parsed canvas configuration"
    );
    Ok((config, records))
}

/// Reads and parses a configuration file.
pub fn load_file(path: &Path) -> Result<(CanvasConfig, Vec<ShapeParams>), ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text)?;
    parse(&value)
}

fn parse_size(value: &Value) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidKey {
        key: "canvas_size",
        reason: "expected a [width, height] pair of positive integers".into(),
    };
    let pair = value.as_array().filter(|v| v.len() == 2).ok_or_else(invalid)?;
    let width = pair[0].as_u64().and_then(|v| u32::try_from(v).ok());
    let height = pair[1].as_u64().and_then(|v| u32::try_from(v).ok());
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(invalid()),
    }
}

fn parse_rgb(value: &Value, key: &'static str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidKey {
        key,
        reason: "expected an [r, g, b] triple of integers in 0..=255".into(),
    };
    let triple = value.as_array().filter(|v| v.len() == 3).ok_or_else(invalid)?;
    let mut rgb = [0u8; 3];
    for (slot, channel) in rgb.iter_mut().zip(triple) {
        *slot = channel
            .as_i64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(invalid)?;
    }
    Ok(rgb.into())
}

fn parse_positive(value: &Value, key: &'static str) -> Result<u32, ConfigError> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
        .ok_or(ConfigError::InvalidKey {
            key,
            reason: "expected a positive integer".into(),
        })
}

fn parse_line_color(value: &Value) -> Result<Color, ConfigError> {
    match value {
        Value::String(name) => Color::from_name(name).ok_or(ConfigError::InvalidKey {
            key: "line_color",
            reason: format!("unknown color name '{name}'"),
        }),
        _ => parse_rgb(value, "line_color"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_config() {
        let value = json!({"canvas_size": [400, 300], "background_color": [255, 255, 255]});
        let (config, records) = parse(&value).unwrap();
        assert_eq!((config.width, config.height), (400, 300));
        assert_eq!(config.background, Color::WHITE);
        assert!(!config.show_grid);
        assert!(config.grid().is_none());
        assert!(records.is_empty());
    }

    #[test]
    fn test_grid_enabled_by_interval() {
        let value = json!({
            "canvas_size": [200, 200],
            "background_color": [0, 0, 0],
            "line_interval": 50,
            "line_color": "lightgray"
        });
        let (config, _) = parse(&value).unwrap();
        assert!(config.show_grid);
        let grid = config.grid().unwrap();
        assert_eq!(grid.interval, 50);
        assert_eq!(grid.color, Color::rgb(211, 211, 211));
    }

    #[test]
    fn test_show_grid_override() {
        let value = json!({
            "canvas_size": [200, 200],
            "background_color": [0, 0, 0],
            "line_interval": 50,
            "show_grid": false
        });
        let (config, _) = parse(&value).unwrap();
        assert!(config.grid().is_none());
    }

    #[test]
    fn test_missing_canvas_size() {
        let value = json!({"background_color": [0, 0, 0]});
        assert!(matches!(
            parse(&value),
            Err(ConfigError::MissingKey { key: "canvas_size" })
        ));
    }

    #[test]
    fn test_rejects_bad_size_and_color() {
        let bad_size = json!({"canvas_size": [0, 300], "background_color": [0, 0, 0]});
        assert!(matches!(
            parse(&bad_size),
            Err(ConfigError::InvalidKey { key: "canvas_size", .. })
        ));

        let bad_color = json!({"canvas_size": [10, 10], "background_color": [300, 0, 0]});
        assert!(matches!(
            parse(&bad_color),
            Err(ConfigError::InvalidKey { key: "background_color", .. })
        ));

        let bad_name = json!({
            "canvas_size": [10, 10],
            "background_color": [0, 0, 0],
            "line_color": "nonesuch"
        });
        assert!(matches!(
            parse(&bad_name),
            Err(ConfigError::InvalidKey { key: "line_color", .. })
        ));
    }

    #[test]
    fn test_shape_records_carried_through() {
        let value = json!({
            "canvas_size": [100, 100],
            "background_color": [255, 255, 255],
            "shapes": [
                {"type": "circle", "center": [50, 50], "radius": 10}
            ]
        });
        let (_, records) = parse(&value).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].type_tag().unwrap(), "circle");
    }
}
