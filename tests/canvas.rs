//! End-to-end canvas rendering tests.

use serde_json::{json, Value};

use shape_canvas::{AddPolicy, Canvas, Color};

fn has_ink(canvas: &Canvas) -> bool {
    let background = canvas.surface().background();
    canvas
        .surface()
        .data()
        .chunks_exact(4)
        .any(|px| px[0] != background.r || px[1] != background.g || px[2] != background.b)
}

#[test]
fn test_blank_canvas_is_background_color() {
    let mut canvas = Canvas::blank(40, 30, Color::WHITE).unwrap();
    canvas.render();
    assert!(!has_ink(&canvas));
    assert_eq!(canvas.surface().pixel(0, 0), Some(Color::WHITE));
    assert_eq!(canvas.surface().pixel(39, 29), Some(Color::WHITE));
}

#[test]
fn test_red_circle_renders_at_center() {
    let mut canvas = Canvas::blank(400, 300, Color::WHITE).unwrap();
    canvas
        .add_shape(json!({
            "type": "circle",
            "center": [200, 150],
            "radius": 60,
            "fill_color": [255, 0, 0],
            "outline_color": [255, 0, 0]
        }))
        .unwrap();
    canvas.render();
    assert_eq!(canvas.surface().pixel(200, 150), Some(Color::rgb(255, 0, 0)));
    assert_eq!(canvas.surface().pixel(0, 0), Some(Color::WHITE));
}

#[test]
fn test_later_shapes_paint_over_earlier_ones() {
    let mut canvas = Canvas::blank(100, 100, Color::WHITE).unwrap();
    canvas
        .add_shape(json!({
            "type": "rectangle",
            "start": [10, 10],
            "end": [90, 90],
            "fill_color": [255, 0, 0],
            "border_width": 0
        }))
        .unwrap();
    canvas
        .add_shape(json!({
            "type": "rectangle",
            "start": [30, 30],
            "end": [70, 70],
            "fill_color": [0, 0, 255],
            "border_width": 0
        }))
        .unwrap();
    canvas.render();
    assert_eq!(canvas.surface().pixel(50, 50), Some(Color::rgb(0, 0, 255)));
    assert_eq!(canvas.surface().pixel(15, 15), Some(Color::rgb(255, 0, 0)));
}

#[test]
fn test_grid_lines_are_painted_under_shapes() {
    let config = json!({
        "canvas_size": [200, 200],
        "background_color": [255, 255, 255],
        "line_interval": 50,
        "shapes": [{
            "type": "rectangle",
            "start": [30, 30],
            "end": [170, 170],
            "fill_color": [0, 200, 0],
            "border_width": 0
        }]
    });
    let mut canvas = Canvas::from_value(&config).unwrap();
    canvas.render();

    // The grid line at x = 100 crosses the rectangle; inside the rectangle
    // the fill must cover it completely.
    assert_eq!(canvas.surface().pixel(100, 100), Some(Color::rgb(0, 200, 0)));

    // Outside the rectangle some pixel near the line deviates from the
    // background.
    let near_line = (99..=101).any(|x| {
        canvas.surface().pixel(x, 10) != Some(Color::WHITE)
    });
    assert!(near_line);
}

#[test]
fn test_no_grid_without_interval() {
    let config = json!({
        "canvas_size": [120, 120],
        "background_color": [255, 255, 255]
    });
    let mut canvas = Canvas::from_value(&config).unwrap();
    canvas.render();
    assert!(!has_ink(&canvas));
}

#[test]
fn test_hide_grid_overrides_config() {
    let config = json!({
        "canvas_size": [120, 120],
        "background_color": [255, 255, 255],
        "line_interval": 40
    });
    let mut canvas = Canvas::from_value(&config).unwrap();
    canvas.hide_grid();
    canvas.render();
    assert!(!has_ink(&canvas));
}

#[test]
fn test_clear_resets_shapes_and_pixels() {
    let mut canvas = Canvas::blank(60, 60, Color::WHITE).unwrap();
    canvas
        .add_shape(json!({
            "type": "square",
            "start": [10, 10],
            "size": 40,
            "fill_color": [0, 0, 0]
        }))
        .unwrap();
    canvas.render();
    assert_eq!(canvas.shape_count(), 1);
    assert!(has_ink(&canvas));

    canvas.clear();
    assert_eq!(canvas.shape_count(), 0);
    assert!(!has_ink(&canvas));

    // Rendering after clear stays empty.
    canvas.render();
    assert!(!has_ink(&canvas));
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.png");

    let mut canvas = Canvas::blank(80, 50, Color::WHITE).unwrap();
    canvas
        .add_shape(json!({
            "type": "rectangle",
            "start": [0, 0],
            "end": [80, 50],
            "fill_color": [10, 20, 30],
            "border_width": 0
        }))
        .unwrap();
    canvas.render().save(&path).unwrap();

    let reloaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(reloaded.dimensions(), (80, 50));
    assert_eq!(reloaded.get_pixel(40, 25), &image::Rgb([10, 20, 30]));
}

#[test]
fn test_from_file_loads_config_and_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    std::fs::write(
        &path,
        serde_json::to_string(&json!({
            "canvas_size": [150, 100],
            "background_color": [255, 255, 255],
            "shapes": [
                {"type": "circle", "center": [75, 50], "radius": 20, "fill_color": [0, 0, 255]}
            ]
        }))
        .unwrap(),
    )
    .unwrap();

    let mut canvas = Canvas::from_file(&path).unwrap();
    assert_eq!(canvas.shape_count(), 1);
    canvas.render();
    assert_eq!(canvas.surface().pixel(75, 50), Some(Color::rgb(0, 0, 255)));

    let info = canvas.info();
    assert_eq!(info.size, (150, 100));
    assert_eq!(info.shapes_count, 1);
    assert_eq!(info.supported_shapes.len(), 48);
}

#[test]
fn test_missing_file_reports_path() {
    let err = Canvas::from_file(std::path::Path::new("/nonexistent/scene.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/scene.json"));
}

#[test]
fn test_lenient_policy_skips_bad_records() {
    let mut canvas = Canvas::blank(100, 100, Color::WHITE).unwrap();
    let records = vec![
        json!({"type": "circle", "center": [50, 50], "radius": 10}),
        json!({"type": "no_such_shape"}),
        json!({"type": "circle", "center": [50, 50], "radius": 0}),
        json!({"type": "diamond", "center": [50, 50], "size": 20}),
    ];
    let added = canvas.add_shapes(&records).unwrap();
    assert_eq!(added, 2);
    assert_eq!(canvas.shape_count(), 2);
}

#[test]
fn test_strict_policy_fails_fast() {
    let mut canvas = Canvas::blank(100, 100, Color::WHITE)
        .unwrap()
        .with_policy(AddPolicy::Strict);
    let records = vec![
        json!({"type": "circle", "center": [50, 50], "radius": 10}),
        json!({"type": "no_such_shape"}),
        json!({"type": "diamond", "center": [50, 50], "size": 20}),
    ];
    assert!(canvas.add_shapes(&records).is_err());
    assert_eq!(canvas.shape_count(), 1);
}

/// One valid sample record per registered kind, sized to fit a 200x200
/// canvas.
fn sample_records() -> Vec<Value> {
    vec![
        json!({"type": "straight_line", "start": [20, 20], "end": [180, 180], "border_width": 3}),
        json!({"type": "dashed_line", "start": [20, 100], "end": [180, 100], "border_width": 2, "dash_length": 10}),
        json!({"type": "zigzag_line", "start": [20, 60], "end": [180, 60], "border_width": 2}),
        json!({"type": "wavy_line", "start": [20, 140], "end": [180, 140], "border_width": 2}),
        json!({"type": "line_with_arrowhead", "start": [20, 20], "end": [180, 100], "border_width": 2, "arrow_size": 12}),
        json!({"type": "line_with_double_arrowhead", "start": [20, 180], "end": [180, 100], "border_width": 2, "arrow_size": 12}),
        json!({"type": "elbow_connector", "start": [20, 20], "end": [150, 150], "border_width": 2}),
        json!({"type": "elbow_connector_with_arrowhead", "start": [20, 20], "end": [150, 150], "border_width": 2, "arrow_size": 10}),
        json!({"type": "elbow_connector_with_double_arrowhead", "start": [20, 20], "end": [150, 150], "border_width": 2, "arrow_size": 10}),
        json!({"type": "rectangle", "start": [40, 40], "end": [160, 120]}),
        json!({"type": "square", "start": [50, 50], "size": 60}),
        json!({"type": "circle", "center": [100, 100], "radius": 40}),
        json!({"type": "ellipse", "start": [40, 60], "end": [160, 140]}),
        json!({"type": "polygon_with_coordinates", "coordinates": [[50, 50], [150, 60], [100, 150]]}),
        json!({"type": "regular_polygon", "center": [100, 100], "radius": 40}),
        json!({"type": "triangle", "point1": [50, 150], "point2": [150, 150], "point3": [100, 50]}),
        json!({"type": "pentagon", "center": [100, 100], "radius": 40}),
        json!({"type": "hexagon", "center": [100, 100], "radius": 40}),
        json!({"type": "octagon", "center": [100, 100], "radius": 40}),
        json!({"type": "rhombus", "center": [100, 100], "width": 80, "height": 50}),
        json!({"type": "parallelogram", "start": [40, 60], "width": 80, "height": 50, "skew": 20}),
        json!({"type": "trapezoid", "start": [40, 60], "bottom_width": 100, "top_width": 60, "height": 50}),
        json!({"type": "diamond", "center": [100, 100], "size": 40}),
        json!({"type": "heart", "center": [100, 100], "size": 3}),
        json!({"type": "cloud", "center": [100, 100], "size": 50}),
        json!({"type": "star", "center": [100, 100], "size": 50}),
        json!({"type": "speech_bubble_rectangle", "start": [40, 40], "end": [160, 120], "tail_size": 15}),
        json!({"type": "banner_ribbon", "start": [30, 70], "width": 140, "height": 50, "tail_length": 30}),
        json!({"type": "flower", "center": [100, 100], "petal_size": 30}),
        json!({"type": "butterfly", "center": [100, 100], "wing_size": 40}),
        json!({"type": "tree", "base": [100, 180], "height": 120, "crown_width": 80}),
        json!({"type": "sun", "center": [100, 100], "radius": 30, "ray_length": 20}),
        json!({"type": "moon", "center": [100, 100], "radius": 30, "phase_offset": 30}),
        json!({"type": "lightning_bolt", "start": [90, 30], "width": 60, "height": 120}),
        json!({"type": "block_arrow", "start": [30, 100], "end": [170, 100], "shaft_width": 20, "head_width": 40}),
        json!({"type": "curved_arrow", "start": [30, 150], "end": [170, 150], "curve_height": 60, "border_width": 2}),
        json!({"type": "circular_arrow", "center": [100, 100], "radius": 50, "border_width": 2}),
        json!({"type": "callout_bubble", "center": [100, 80], "width": 100, "height": 60, "pointer_tip": [160, 160]}),
        json!({"type": "thought_bubble", "center": [80, 80], "width": 80, "height": 50, "pointer_direction": [160, 160]}),
        json!({"type": "oval_callout", "center": [100, 80], "width": 100, "height": 60, "callout_point": [160, 160]}),
        json!({"type": "cross", "center": [100, 100], "size": 50, "thickness": 20}),
        json!({"type": "plus_sign", "center": [100, 100], "size": 50, "thickness": 10, "border_width": 2}),
        json!({"type": "minus_sign", "center": [100, 100], "size": 50, "thickness": 10, "border_width": 2}),
        json!({"type": "multiplication_sign", "center": [100, 100], "size": 50, "thickness": 10, "border_width": 2}),
        json!({"type": "spiral", "center": [100, 100], "max_radius": 60, "border_width": 2}),
        json!({"type": "helix", "center": [100, 100], "radius": 30, "height": 100, "border_width": 2}),
        json!({"type": "sine_wave_pattern", "start": [20, 100], "width": 160, "amplitude": 30, "border_width": 2}),
        json!({"type": "fractal_tree", "base": [100, 190], "height": 60, "levels": 5, "border_width": 3}),
    ]
}

#[test]
fn test_every_kind_renders_visible_output() {
    let records = sample_records();
    assert_eq!(records.len(), 48);

    for record in records {
        let tag = record["type"].as_str().unwrap().to_string();
        let mut canvas = Canvas::blank(200, 200, Color::WHITE)
            .unwrap()
            .with_policy(AddPolicy::Strict);
        canvas
            .add_shape(record)
            .unwrap_or_else(|err| panic!("{tag}: {err}"));
        canvas.render();
        assert!(has_ink(&canvas), "{tag} drew nothing");
    }
}
