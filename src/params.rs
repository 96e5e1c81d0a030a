//! Typed extraction from raw JSON shape records.
//!
//! A shape record arrives as an open JSON object. `ShapeParams` wraps it and
//! provides the extraction helpers shape constructors use to pull out points,
//! colors, and bounded integers, producing a [`ValidationError`] that names
//! the offending key on any mismatch.

use serde_json::{Map, Value};

use crate::color::Color;
use crate::error::{ShapeError, ValidationError};
use crate::geometry::Point;

/// A raw shape record: the `type` tag plus variant-specific parameters.
///
/// Records are never mutated after construction; shape payloads copy the
/// resolved values out during validation.
/// Upper bound on count-like parameters (vertex counts, petals, rays,
/// turns, sampling frequencies). Counts size sample buffers, so values
/// above this are rejected at validation instead of overflowing later
/// arithmetic.
pub const MAX_COUNT: i64 = 1000;

#[derive(Debug, Clone)]
pub struct ShapeParams {
    map: Map<String, Value>,
}

impl ShapeParams {
    pub fn new(map: Map<String, Value>) -> Self {
        ShapeParams { map }
    }

    /// Wraps a JSON value, requiring it to be an object.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(map) => Ok(ShapeParams { map }),
            _ => Err(ShapeError::MissingType),
        }
    }

    /// The `type` tag selecting the shape kind.
    pub fn type_tag(&self) -> Result<&str, ShapeError> {
        self.map
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ShapeError::MissingType)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// A required `[x, y]` point.
    pub fn point(&self, key: &str) -> Result<Point, ValidationError> {
        match self.get(key) {
            None => Err(ValidationError::MissingKey { key: key.into() }),
            Some(value) => parse_point(value).ok_or_else(|| ValidationError::InvalidValue {
                key: key.into(),
                expected: "an [x, y] pair",
            }),
        }
    }

    /// A required list of `[x, y]` points with at least `min` entries.
    pub fn point_list(&self, key: &str, min: usize) -> Result<Vec<Point>, ValidationError> {
        let values = match self.get(key) {
            None => return Err(ValidationError::MissingKey { key: key.into() }),
            Some(Value::Array(values)) => values,
            Some(_) => {
                return Err(ValidationError::InvalidValue {
                    key: key.into(),
                    expected: "a list of [x, y] pairs",
                })
            }
        };
        if values.len() < min {
            return Err(ValidationError::TooFewPoints {
                key: key.into(),
                min,
            });
        }
        values
            .iter()
            .map(|value| {
                parse_point(value).ok_or_else(|| ValidationError::InvalidValue {
                    key: key.into(),
                    expected: "a list of [x, y] pairs",
                })
            })
            .collect()
    }

    /// An RGB triple, falling back to `default` when the key is absent.
    pub fn color_or(&self, key: &str, default: Color) -> Result<Color, ValidationError> {
        let value = match self.get(key) {
            None => return Ok(default),
            Some(value) => value,
        };
        let channels = value
            .as_array()
            .filter(|values| values.len() == 3)
            .ok_or_else(|| ValidationError::InvalidValue {
                key: key.into(),
                expected: "an [r, g, b] triple",
            })?;
        let mut rgb = [0u8; 3];
        for (slot, channel) in rgb.iter_mut().zip(channels) {
            *slot = channel
                .as_i64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| ValidationError::InvalidColor { key: key.into() })?;
        }
        Ok(rgb.into())
    }

    /// An RGB triple defaulting to black, the common case for
    /// `fill_color` / `outline_color`.
    pub fn color(&self, key: &str) -> Result<Color, ValidationError> {
        self.color_or(key, Color::BLACK)
    }

    /// An integer with a default, no bound.
    pub fn int_or(&self, key: &str, default: i64) -> Result<i64, ValidationError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.as_i64().ok_or_else(|| ValidationError::InvalidValue {
                key: key.into(),
                expected: "an integer",
            }),
        }
    }

    /// An integer with a default and an inclusive minimum. Absent keys take
    /// the default and are then bound-checked, so a missing required value
    /// with default 0 and minimum 1 is reported as below minimum.
    pub fn int_min(&self, key: &str, default: i64, min: i64) -> Result<i64, ValidationError> {
        let value = self.int_or(key, default)?;
        if value < min {
            return Err(ValidationError::BelowMinimum {
                key: key.into(),
                min,
            });
        }
        Ok(value)
    }

    /// Border width for pure stroke shapes: required to be at least 1, and
    /// a missing value fails that bound rather than silently defaulting.
    pub fn stroke_width(&self) -> Result<i64, ValidationError> {
        self.int_min("border_width", 0, 1)
    }

    /// Border width for filled shapes: validated non-negative, defaulting
    /// to 1 when absent. An explicit 0 keeps the fill and drops the outline.
    pub fn outline_width(&self) -> Result<i64, ValidationError> {
        self.int_min("border_width", 0, 0)?;
        self.int_or("border_width", 1)
    }

    /// A count-like integer (vertices, petals, rays, turns, frequencies):
    /// bounded below by `min` and above by [`MAX_COUNT`], returned as the
    /// `u32` the geometry generators size their sample buffers with.
    pub fn count(&self, key: &str, default: i64, min: i64) -> Result<u32, ValidationError> {
        Ok(self.int_range(key, default, min, MAX_COUNT)? as u32)
    }

    /// An integer bounded on both sides.
    pub fn int_range(
        &self,
        key: &str,
        default: i64,
        min: i64,
        max: i64,
    ) -> Result<i64, ValidationError> {
        let value = self.int_min(key, default, min)?;
        if value > max {
            return Err(ValidationError::AboveMaximum {
                key: key.into(),
                max,
            });
        }
        Ok(value)
    }
}

fn parse_point(value: &Value) -> Option<Point> {
    let pair = value.as_array().filter(|values| values.len() == 2)?;
    let x = pair[0].as_f64()?;
    let y = pair[1].as_f64()?;
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> ShapeParams {
        ShapeParams::from_value(value).unwrap()
    }

    #[test]
    fn test_point_extraction() {
        let p = params(json!({"type": "circle", "center": [10, 20]}));
        assert_eq!(p.point("center").unwrap(), Point::new(10.0, 20.0));
        assert!(matches!(
            p.point("missing"),
            Err(ValidationError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_color_channel_bounds() {
        let p = params(json!({"type": "x", "fill_color": [256, 0, 0]}));
        assert!(matches!(
            p.color("fill_color"),
            Err(ValidationError::InvalidColor { .. })
        ));

        let p = params(json!({"type": "x", "fill_color": [10, 20, 30]}));
        assert_eq!(p.color("fill_color").unwrap(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_color_defaults_when_absent() {
        let p = params(json!({"type": "x"}));
        assert_eq!(p.color("fill_color").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_count_is_capped_and_converted() {
        let p = params(json!({"type": "star", "num_points": 7}));
        assert_eq!(p.count("num_points", 5, 3).unwrap(), 7);

        // Values past the cap fail validation instead of truncating when
        // narrowed to u32.
        let p = params(json!({"type": "star", "num_points": 4_294_967_298i64}));
        assert!(matches!(
            p.count("num_points", 5, 3),
            Err(ValidationError::AboveMaximum { .. })
        ));
        let p = params(json!({"type": "star", "num_points": MAX_COUNT + 1}));
        assert!(matches!(
            p.count("num_points", 5, 3),
            Err(ValidationError::AboveMaximum { .. })
        ));
    }

    #[test]
    fn test_point_list_error_shapes() {
        let p = params(json!({"type": "polygon_with_coordinates"}));
        assert!(matches!(
            p.point_list("coordinates", 3),
            Err(ValidationError::MissingKey { .. })
        ));

        let p = params(json!({"type": "polygon_with_coordinates", "coordinates": 5}));
        assert!(matches!(
            p.point_list("coordinates", 3),
            Err(ValidationError::InvalidValue { .. })
        ));

        let p = params(json!({"type": "polygon_with_coordinates", "coordinates": [[0, 0], [1, 1]]}));
        assert!(matches!(
            p.point_list("coordinates", 3),
            Err(ValidationError::TooFewPoints { .. })
        ));
    }

    #[test]
    fn test_int_minimum_applies_to_default() {
        let p = params(json!({"type": "circle"}));
        assert!(matches!(
            p.int_min("radius", 0, 1),
            Err(ValidationError::BelowMinimum { .. })
        ));
    }
}
