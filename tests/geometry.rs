//! Property tests for the pure geometry generators.

use proptest::prelude::*;

use shape_canvas::geometry::{
    dash_segments, fractal_branches, quad_bezier_points, regular_polygon_points, star_points,
    zigzag_points,
};
use shape_canvas::Point;

const EPS: f64 = 1e-6;

proptest! {
    #[test]
    fn prop_regular_polygon_vertices_equidistant(
        sides in 3u32..=32,
        radius in 1.0f64..200.0,
        rotation in -360.0f64..360.0,
        cx in -100.0f64..500.0,
        cy in -100.0f64..500.0,
    ) {
        let center = Point::new(cx, cy);
        let points = regular_polygon_points(center, radius, sides, rotation);
        prop_assert_eq!(points.len(), sides as usize);
        for p in &points {
            prop_assert!((center.distance_to(p) - radius).abs() < EPS);
        }
    }

    #[test]
    fn prop_dash_segments_stay_within_line(
        length in 1.0f64..500.0,
        dash in 1.0f64..50.0,
    ) {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(length, 0.0);
        let segments = dash_segments(start, end, dash);
        prop_assert!(!segments.is_empty());

        let mut drawn = 0.0;
        for (a, b) in &segments {
            prop_assert!(a.x >= -EPS && b.x <= length + EPS);
            prop_assert!(b.x >= a.x);
            drawn += b.x - a.x;
        }
        prop_assert!(drawn <= length + EPS);
        // First stride always draws from the start point.
        prop_assert!((segments[0].0.x).abs() < EPS);
    }

    #[test]
    fn prop_zigzag_preserves_endpoints(
        x0 in -100.0f64..300.0,
        y0 in -100.0f64..300.0,
        dx in 1.0f64..300.0,
        height in 1.0f64..50.0,
        frequency in 1u32..20,
    ) {
        let start = Point::new(x0, y0);
        let end = Point::new(x0 + dx, y0 + dx / 2.0);
        let points = zigzag_points(start, end, height, frequency);
        prop_assert_eq!(points[0], start);
        prop_assert_eq!(*points.last().unwrap(), end);
        prop_assert_eq!(points.len(), frequency as usize + 1);
    }

    #[test]
    fn prop_star_radii_alternate(
        size in 1.0f64..200.0,
        num_points in 3u32..=16,
    ) {
        let center = Point::new(0.0, 0.0);
        let points = star_points(center, size, num_points);
        prop_assert_eq!(points.len(), 2 * num_points as usize);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { size } else { size * 0.4 };
            prop_assert!((center.distance_to(p) - expected).abs() < EPS);
        }
    }

    #[test]
    fn prop_bezier_hits_both_endpoints(
        x1 in -200.0f64..200.0,
        y1 in -200.0f64..200.0,
        cx in -200.0f64..200.0,
        cy in -200.0f64..200.0,
        x2 in -200.0f64..200.0,
        y2 in -200.0f64..200.0,
    ) {
        let start = Point::new(x1, y1);
        let control = Point::new(cx, cy);
        let end = Point::new(x2, y2);
        let points = quad_bezier_points(start, control, end, 50);
        prop_assert_eq!(points.len(), 51);
        prop_assert!(points[0].distance_to(&start) < EPS);
        prop_assert!(points[50].distance_to(&end) < EPS);
    }

    #[test]
    fn prop_fractal_branch_count_is_exact(levels in 1u32..=10) {
        let branches = fractal_branches(Point::new(0.0, 0.0), 100.0, levels, 30.0);
        prop_assert_eq!(branches.len(), (1usize << levels) - 1);
        // Child branches shrink by the fixed 0.7 ratio, so every branch is
        // at most as long as the trunk.
        let trunk = branches[0].start.distance_to(&branches[0].end);
        for branch in &branches {
            prop_assert!(branch.start.distance_to(&branch.end) <= trunk + EPS);
        }
    }
}
