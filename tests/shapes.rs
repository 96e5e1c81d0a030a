//! Factory and validation behavior for shape records.

use serde_json::json;

use shape_canvas::params::ShapeParams;
use shape_canvas::{shapes, ShapeError, ShapeKind, ValidationError};

fn create(record: serde_json::Value) -> Result<shape_canvas::Shape, ShapeError> {
    let params = ShapeParams::from_value(record)?;
    shapes::create(&params)
}

#[test]
fn test_create_basic_shapes() {
    let circle = create(json!({
        "type": "circle",
        "center": [100, 100],
        "radius": 40,
        "fill_color": [255, 0, 0]
    }))
    .unwrap();
    assert_eq!(circle.kind(), ShapeKind::Circle);

    let rect = create(json!({
        "type": "rectangle",
        "start": [10, 10],
        "end": [60, 40]
    }))
    .unwrap();
    assert_eq!(rect.kind(), ShapeKind::Rectangle);

    let line = create(json!({
        "type": "straight_line",
        "start": [0, 0],
        "end": [50, 50],
        "border_width": 2
    }))
    .unwrap();
    assert_eq!(line.kind(), ShapeKind::StraightLine);
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = create(json!({"type": "dodecahedron", "center": [0, 0]})).unwrap_err();
    match err {
        ShapeError::UnknownType { tag } => assert_eq!(tag, "dodecahedron"),
        other => panic!("expected UnknownType, got {other:?}"),
    }
}

#[test]
fn test_missing_type_is_rejected() {
    assert!(matches!(
        create(json!({"center": [0, 0], "radius": 10})),
        Err(ShapeError::MissingType)
    ));
    // A record that is not an object fails the same way.
    assert!(matches!(
        ShapeParams::from_value(json!([1, 2, 3])),
        Err(ShapeError::MissingType)
    ));
}

#[test]
fn test_supported_tags_cover_registry() {
    let tags = ShapeKind::supported_tags();
    assert_eq!(tags.len(), 48);
    assert!(tags.contains(&"circle"));
    assert!(tags.contains(&"elbow_connector_with_double_arrowhead"));
    assert!(tags.contains(&"fractal_tree"));
}

#[test]
fn test_stroke_shapes_require_border_width() {
    // No default stroke width for pure line shapes.
    let err = create(json!({
        "type": "straight_line",
        "start": [0, 0],
        "end": [50, 50]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::BelowMinimum { .. })
    ));
}

#[test]
fn test_filled_shapes_default_border_width() {
    // Filled shapes outline at width 1 when no border is given.
    assert!(create(json!({
        "type": "circle",
        "center": [50, 50],
        "radius": 20
    }))
    .is_ok());

    // But a negative width is still invalid.
    let err = create(json!({
        "type": "circle",
        "center": [50, 50],
        "radius": 20,
        "border_width": -1
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::BelowMinimum { .. })
    ));
}

#[test]
fn test_zero_radius_is_rejected() {
    let err = create(json!({
        "type": "circle",
        "center": [50, 50],
        "radius": 0
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::BelowMinimum { .. })
    ));
}

#[test]
fn test_color_channels_are_bounded() {
    let err = create(json!({
        "type": "circle",
        "center": [50, 50],
        "radius": 20,
        "fill_color": [0, 300, 0]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::InvalidColor { .. })
    ));
}

#[test]
fn test_polygon_needs_three_coordinates() {
    let err = create(json!({
        "type": "polygon_with_coordinates",
        "coordinates": [[0, 0], [10, 10]]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::TooFewPoints { .. })
    ));
}

#[test]
fn test_fixed_ngons_ignore_n_sides() {
    // Pentagon needs no side count; it is fixed by the kind.
    let pentagon = create(json!({
        "type": "pentagon",
        "center": [100, 100],
        "radius": 40
    }))
    .unwrap();
    assert_eq!(pentagon.kind(), ShapeKind::Pentagon);

    // The generic regular polygon defaults to six sides and rejects fewer
    // than three.
    assert!(create(json!({
        "type": "regular_polygon",
        "center": [100, 100],
        "radius": 40
    }))
    .is_ok());
    let err = create(json!({
        "type": "regular_polygon",
        "center": [100, 100],
        "radius": 40,
        "n_sides": 2
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::BelowMinimum { .. })
    ));
}

#[test]
fn test_fractal_levels_are_capped() {
    assert!(create(json!({
        "type": "fractal_tree",
        "base": [100, 190],
        "height": 60,
        "levels": 12,
        "border_width": 3
    }))
    .is_ok());

    let err = create(json!({
        "type": "fractal_tree",
        "base": [100, 190],
        "height": 60,
        "levels": 13,
        "border_width": 3
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::AboveMaximum { .. })
    ));
}

#[test]
fn test_oversized_counts_fail_at_creation() {
    // Counts size sample buffers, so a huge turn count must be rejected
    // when the record is resolved, not discovered while drawing.
    let err = create(json!({
        "type": "spiral",
        "center": [100, 100],
        "max_radius": 60,
        "turns": 100_000_000,
        "border_width": 2
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::AboveMaximum { .. })
    ));

    // A count past u32::MAX must not wrap into a small value that then
    // passes the minimum check.
    let err = create(json!({
        "type": "star",
        "center": [100, 100],
        "size": 50,
        "num_points": 4_294_967_298i64
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::AboveMaximum { .. })
    ));
}

#[test]
fn test_non_array_coordinates_are_invalid_value() {
    let err = create(json!({
        "type": "polygon_with_coordinates",
        "coordinates": 5
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::InvalidValue { .. })
    ));
}

#[test]
fn test_malformed_point_is_rejected() {
    let err = create(json!({
        "type": "circle",
        "center": [50],
        "radius": 20
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::Invalid(ValidationError::InvalidValue { .. })
    ));
}
