//! Pure geometry generators for the shape model.
//!
//! Everything in this module computes point sequences from parameters and
//! never touches the drawing surface. Canvas coordinates have the origin at
//! top-left with y increasing downward; out-of-range coordinates are legal
//! and clipped later by the primitive layer.

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Rotates `point` around `center` by `angle_degrees` (positive is clockwise
/// on screen, since y grows downward).
pub fn rotate_point(point: Point, center: Point, angle_degrees: f64) -> Point {
    let angle = angle_degrees.to_radians();
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point::new(
        dx * cos - dy * sin + center.x,
        dx * sin + dy * cos + center.y,
    )
}

/// Unit direction vector and length from `start` to `end`, or `None` for a
/// zero-length segment.
pub fn unit_direction(start: Point, end: Point) -> Option<(f64, f64, f64)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return None;
    }
    Some((dx / length, dy / length, length))
}

/// Vertices of a regular n-gon: vertex `i` sits at angle
/// `2*pi*i/n + rotation` from the center at distance `radius`.
pub fn regular_polygon_points(
    center: Point,
    radius: f64,
    sides: u32,
    rotation_degrees: f64,
) -> Vec<Point> {
    let rotation = rotation_degrees.to_radians();
    (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(sides) + rotation;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Star outline: `2 * num_points` vertices alternating between the outer
/// radius `size` and the inner radius `size * 0.4`.
pub fn star_points(center: Point, size: f64, num_points: u32) -> Vec<Point> {
    let total = num_points * 2;
    (0..total)
        .map(|i| {
            let angle = std::f64::consts::TAU * f64::from(i) / f64::from(total);
            let radius = if i % 2 == 0 { size } else { size * 0.4 };
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Heart outline from the classic parametric curve
/// `x = 16 sin^3 t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`,
/// scaled by `size`, sampled at `num_points` steps over one period and
/// rotated about the center.
pub fn heart_points(
    center: Point,
    size: f64,
    rotation_degrees: f64,
    num_points: u32,
) -> Vec<Point> {
    (0..num_points)
        .map(|i| {
            let t = std::f64::consts::TAU * f64::from(i) / f64::from(num_points);
            let x = size * 16.0 * t.sin().powi(3);
            let y = size
                * (13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos());
            rotate_point(
                Point::new(x + center.x, y + center.y),
                center,
                rotation_degrees,
            )
        })
        .collect()
}

/// Drawn segments of a dashed line. Walks the segment alternating draw/skip
/// strides of `min(dash_length, remaining)`, so the final dash never
/// overshoots the endpoint. A zero-length segment yields no dashes.
pub fn dash_segments(start: Point, end: Point, dash_length: f64) -> Vec<(Point, Point)> {
    let Some((ux, uy, length)) = unit_direction(start, end) else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut travelled = 0.0;
    let mut drawing = true;
    let mut current = start;

    while travelled < length {
        let stride = dash_length.min(length - travelled);
        let next = Point::new(
            start.x + (travelled + stride) * ux,
            start.y + (travelled + stride) * uy,
        );
        if drawing {
            segments.push((current, next));
        }
        current = next;
        travelled += stride;
        drawing = !drawing;
    }
    segments
}

/// Polyline for a zigzag between two points: `frequency - 1` interior
/// vertices offset perpendicular to the segment, alternating sides.
pub fn zigzag_points(start: Point, end: Point, height: f64, frequency: u32) -> Vec<Point> {
    let Some((ux, uy, _)) = unit_direction(start, end) else {
        return Vec::new();
    };
    let (px, py) = (-uy, ux);
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let mut points = Vec::with_capacity(frequency as usize + 1);
    points.push(start);
    for i in 1..frequency {
        let t = f64::from(i) / f64::from(frequency);
        let offset = if i % 2 == 1 { height } else { -height };
        points.push(Point::new(
            start.x + t * dx + offset * px,
            start.y + t * dy + offset * py,
        ));
    }
    points.push(end);
    points
}

/// Polyline for a sinusoidal line between two points. The sample count is
/// `max(20, length / 5)` so longer lines stay smooth.
pub fn wave_points(start: Point, end: Point, amplitude: f64, frequency: u32) -> Vec<Point> {
    let Some((ux, uy, length)) = unit_direction(start, end) else {
        return Vec::new();
    };
    let (px, py) = (-uy, ux);
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let samples = 20.max((length / 5.0) as u32);

    (0..=samples)
        .map(|i| {
            let t = f64::from(i) / f64::from(samples);
            let offset = amplitude * (std::f64::consts::TAU * f64::from(frequency) * t).sin();
            Point::new(
                start.x + t * dx + offset * px,
                start.y + t * dy + offset * py,
            )
        })
        .collect()
}

/// Filled arrowhead triangle for a line arriving at `tip` with unit
/// direction `(ux, uy)`: the two base corners sit `size` back along the
/// direction, offset `size * 0.5` along the perpendicular `(-uy, ux)`.
pub fn arrowhead(tip: Point, ux: f64, uy: f64, size: f64) -> [Point; 3] {
    let base_x = tip.x - size * ux;
    let base_y = tip.y - size * uy;
    let half = size * 0.5;
    [
        tip,
        Point::new(base_x - half * uy, base_y + half * ux),
        Point::new(base_x + half * uy, base_y - half * ux),
    ]
}

/// Samples a quadratic Bezier curve into `segments + 1` points.
pub fn quad_bezier_points(start: Point, control: Point, end: Point, segments: u32) -> Vec<Point> {
    (0..=segments)
        .map(|i| {
            let t = f64::from(i) / f64::from(segments);
            let u = 1.0 - t;
            Point::new(
                u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
                u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
            )
        })
        .collect()
}

/// Samples a circular arc from `start_degrees` to `end_degrees` (screen
/// convention: 0 at three o'clock, increasing clockwise).
pub fn arc_points(center: Point, radius: f64, start_degrees: f64, end_degrees: f64) -> Vec<Point> {
    let span = end_degrees - start_degrees;
    let segments = ((span.abs() / 3.0).ceil() as u32).max(8);
    (0..=segments)
        .map(|i| {
            let angle =
                (start_degrees + span * f64::from(i) / f64::from(segments)).to_radians();
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Polyline of an Archimedean spiral: radius grows linearly from zero to
/// `max_radius` over `turns` revolutions, 50 samples per turn.
pub fn spiral_points(center: Point, max_radius: f64, turns: u32) -> Vec<Point> {
    let samples = turns * 50;
    (0..samples)
        .map(|i| {
            let progress = f64::from(i) / f64::from(samples);
            let angle = std::f64::consts::TAU * f64::from(turns) * progress;
            let radius = max_radius * progress;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Polyline of a helix seen side-on (orthographic projection): x oscillates
/// with the winding angle while y advances linearly across `height`,
/// 30 samples per turn.
pub fn helix_points(center: Point, radius: f64, height: f64, turns: u32) -> Vec<Point> {
    let samples = turns * 30;
    (0..samples)
        .map(|i| {
            let progress = f64::from(i) / f64::from(samples);
            let angle = std::f64::consts::TAU * f64::from(turns) * progress;
            Point::new(
                center.x + radius * angle.cos(),
                center.y - height / 2.0 + height * progress,
            )
        })
        .collect()
}

/// Polyline of a horizontal sine wave starting at `start`, one sample per
/// pixel of `width`.
pub fn sine_wave_points(start: Point, width: f64, amplitude: f64, frequency: u32) -> Vec<Point> {
    let samples = width.max(1.0) as u32;
    (0..=samples)
        .map(|i| {
            let progress = f64::from(i) / f64::from(samples);
            Point::new(
                start.x + width * progress,
                start.y
                    + amplitude
                        * (std::f64::consts::TAU * f64::from(frequency) * progress).sin(),
            )
        })
        .collect()
}

/// One drawn branch of a fractal tree. `level` counts down toward the leaf
/// branches and controls the stroke width.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub start: Point,
    pub end: Point,
    pub level: u32,
}

/// Generates the branch segments of a binary fractal tree rooted at `base`,
/// growing straight up. Each branch spawns two children rotated by
/// `spread_degrees` with length scaled by 0.7; recursion stops when the
/// level reaches zero, so `levels = L` yields exactly `2^L - 1` segments.
pub fn fractal_branches(base: Point, length: f64, levels: u32, spread_degrees: f64) -> Vec<Branch> {
    let mut branches = Vec::with_capacity((1usize << levels.min(24)) - 1);
    grow_branch(&mut branches, base, 90.0, length, levels, spread_degrees);
    branches
}

fn grow_branch(
    branches: &mut Vec<Branch>,
    start: Point,
    direction_degrees: f64,
    length: f64,
    level: u32,
    spread_degrees: f64,
) {
    if level == 0 {
        return;
    }
    let direction = direction_degrees.to_radians();
    // Screen y grows downward, so an upward branch subtracts the sine term.
    let end = Point::new(
        start.x + length * direction.cos(),
        start.y - length * direction.sin(),
    );
    branches.push(Branch { start, end, level });

    if level > 1 {
        let child_length = length * 0.7;
        grow_branch(
            branches,
            end,
            direction_degrees + spread_degrees,
            child_length,
            level - 1,
            spread_degrees,
        );
        grow_branch(
            branches,
            end,
            direction_degrees - spread_degrees,
            child_length,
            level - 1,
            spread_degrees,
        );
    }
}

/// Seven-vertex outline of a block arrow: rectangular shaft plus triangular
/// head. The head length is `min(0.3 * length, head_width)`; the remainder
/// of the segment is shaft. Returns `None` for a zero-length arrow.
pub fn block_arrow_points(
    start: Point,
    end: Point,
    shaft_width: f64,
    head_width: f64,
) -> Option<Vec<Point>> {
    let (ux, uy, length) = unit_direction(start, end)?;
    let (px, py) = (-uy, ux);

    let head_length = (length * 0.3).min(head_width);
    let shaft_length = length - head_length;

    let shaft_end = Point::new(start.x + ux * shaft_length, start.y + uy * shaft_length);
    let half_shaft = shaft_width / 2.0;
    let half_head = head_width / 2.0;

    Some(vec![
        Point::new(start.x + px * half_shaft, start.y + py * half_shaft),
        Point::new(shaft_end.x + px * half_shaft, shaft_end.y + py * half_shaft),
        Point::new(shaft_end.x + px * half_head, shaft_end.y + py * half_head),
        end,
        Point::new(shaft_end.x - px * half_head, shaft_end.y - py * half_head),
        Point::new(shaft_end.x - px * half_shaft, shaft_end.y - py * half_shaft),
        Point::new(start.x - px * half_shaft, start.y - py * half_shaft),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_regular_polygon_vertices_on_circle() {
        let center = Point::new(50.0, 50.0);
        for sides in 3..=12 {
            let points = regular_polygon_points(center, 20.0, sides, 15.0);
            assert_eq!(points.len(), sides as usize);
            for p in &points {
                assert!((center.distance_to(p) - 20.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_star_alternates_radii() {
        let center = Point::new(0.0, 0.0);
        let points = star_points(center, 10.0, 5);
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((center.distance_to(p) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_dash_segments_never_overshoot() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(95.0, 0.0);
        let segments = dash_segments(start, end, 10.0);
        // 95 units split into ten strides of 10 and one of 5; every other
        // stride is drawn.
        assert_eq!(segments.len(), 5);
        for (a, b) in &segments {
            assert!(a.x <= 95.0 + EPS && b.x <= 95.0 + EPS);
            assert!((b.x - a.x - 10.0).abs() < EPS || (b.x - a.x - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn test_dash_segments_degenerate_line() {
        let p = Point::new(5.0, 5.0);
        assert!(dash_segments(p, p, 10.0).is_empty());
    }

    #[test]
    fn test_fractal_branch_count() {
        for levels in 1..=8 {
            let branches = fractal_branches(Point::new(0.0, 0.0), 100.0, levels, 45.0);
            assert_eq!(branches.len(), (1 << levels) - 1);
        }
    }

    #[test]
    fn test_fractal_root_grows_upward() {
        let branches = fractal_branches(Point::new(10.0, 100.0), 40.0, 1, 45.0);
        let root = branches[0];
        assert!((root.end.x - 10.0).abs() < EPS);
        assert!((root.end.y - 60.0).abs() < EPS);
    }

    #[test]
    fn test_bezier_endpoints() {
        let points = quad_bezier_points(
            Point::new(0.0, 0.0),
            Point::new(50.0, -40.0),
            Point::new(100.0, 0.0),
            50,
        );
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[50], Point::new(100.0, 0.0));
        // Control point pulls the midpoint upward.
        assert!(points[25].y < 0.0);
    }

    #[test]
    fn test_block_arrow_has_seven_vertices() {
        let points = block_arrow_points(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            10.0,
            30.0,
        )
        .unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[3], Point::new(100.0, 0.0));
    }

    #[test]
    fn test_block_arrow_zero_length() {
        let p = Point::new(1.0, 1.0);
        assert!(block_arrow_points(p, p, 10.0, 30.0).is_none());
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let rotated = rotate_point(Point::new(10.0, 0.0), Point::new(0.0, 0.0), 90.0);
        assert!((rotated.x - 0.0).abs() < EPS);
        assert!((rotated.y - 10.0).abs() < EPS);
    }

    #[test]
    fn test_wave_sample_count_scales_with_length() {
        let short = wave_points(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 5.0, 3);
        assert_eq!(short.len(), 21);
        let long = wave_points(Point::new(0.0, 0.0), Point::new(500.0, 0.0), 5.0, 3);
        assert_eq!(long.len(), 101);
    }

    #[test]
    fn test_helix_spans_height() {
        let points = helix_points(Point::new(0.0, 0.0), 10.0, 60.0, 3);
        assert_eq!(points.len(), 90);
        assert!((points[0].y - (-30.0)).abs() < EPS);
        assert!(points.last().unwrap().y < 30.0);
    }
}
