use approx::assert_relative_eq;
use lifelines::core::geometry::ProjectedPoint;
use lifelines::core::{DEFAULT_TENSION, smooth_path};

fn point(x: f64, y: f64) -> ProjectedPoint {
    ProjectedPoint {
        x,
        y,
        event_index: 0,
    }
}

#[test]
fn empty_and_singleton_inputs_yield_an_empty_path() {
    let empty = smooth_path(&[], DEFAULT_TENSION);
    assert!(empty.is_empty());
    assert_eq!(empty.to_svg(), "");

    let single = smooth_path(&[point(10.0, 20.0)], DEFAULT_TENSION);
    assert!(single.is_empty());
    assert_eq!(single.to_svg(), "");
}

#[test]
fn two_points_produce_exactly_one_cubic_segment() {
    let p1 = point(0.0, 0.0);
    let p2 = point(100.0, 50.0);
    let path = smooth_path(&[p1, p2], DEFAULT_TENSION);

    assert_eq!(path.segments.len(), 1);
    let segment = path.segments[0];

    // Neighbor clamping makes p0 = p1 and p3 = p2.
    assert_relative_eq!(segment.cp1_x, p1.x + (p2.x - p1.x) * DEFAULT_TENSION);
    assert_relative_eq!(segment.cp1_y, p1.y + (p2.y - p1.y) * DEFAULT_TENSION);
    assert_relative_eq!(segment.cp2_x, p2.x - (p2.x - p1.x) * DEFAULT_TENSION);
    assert_relative_eq!(segment.cp2_y, p2.y - (p2.y - p1.y) * DEFAULT_TENSION);
    assert_relative_eq!(segment.end_x, p2.x);
    assert_relative_eq!(segment.end_y, p2.y);
}

#[test]
fn interior_segments_use_cardinal_control_points() {
    let points = [
        point(0.0, 0.0),
        point(10.0, 40.0),
        point(20.0, 10.0),
        point(30.0, 60.0),
    ];
    let tension = 0.3;
    let path = smooth_path(&points, tension);
    assert_eq!(path.segments.len(), 3);

    // Middle segment between points[1] and points[2] sees real neighbors.
    let segment = path.segments[1];
    assert_relative_eq!(
        segment.cp1_x,
        points[1].x + (points[2].x - points[0].x) * tension
    );
    assert_relative_eq!(
        segment.cp1_y,
        points[1].y + (points[2].y - points[0].y) * tension
    );
    assert_relative_eq!(
        segment.cp2_x,
        points[2].x - (points[3].x - points[1].x) * tension
    );
    assert_relative_eq!(
        segment.cp2_y,
        points[2].y - (points[3].y - points[1].y) * tension
    );
}

#[test]
fn path_starts_at_the_first_point_and_visits_every_point() {
    let points: Vec<ProjectedPoint> = (0..7)
        .map(|i| point(i as f64 * 12.5, (i % 3) as f64 * 40.0))
        .collect();
    let path = smooth_path(&points, DEFAULT_TENSION);

    assert_eq!(path.start, Some((points[0].x, points[0].y)));
    assert_eq!(path.segments.len(), points.len() - 1);
    for (segment, original) in path.segments.iter().zip(points.iter().skip(1)) {
        assert_relative_eq!(segment.end_x, original.x);
        assert_relative_eq!(segment.end_y, original.y);
    }
}

#[test]
fn svg_output_is_byte_identical_for_identical_inputs() {
    let points: Vec<ProjectedPoint> = (0..9)
        .map(|i| point(i as f64 * 33.3, (i * i) as f64 * 1.7))
        .collect();

    let first = smooth_path(&points, DEFAULT_TENSION).to_svg();
    let second = smooth_path(&points, DEFAULT_TENSION).to_svg();
    assert_eq!(first, second);
    assert!(first.starts_with("M 0 0 C "));
}

#[test]
fn tension_zero_collapses_control_points_onto_endpoints() {
    let points = [point(0.0, 0.0), point(50.0, 20.0), point(100.0, 0.0)];
    let path = smooth_path(&points, 0.0);

    for (segment, pair) in path.segments.iter().zip(points.windows(2)) {
        assert_relative_eq!(segment.cp1_x, pair[0].x);
        assert_relative_eq!(segment.cp1_y, pair[0].y);
        assert_relative_eq!(segment.cp2_x, pair[1].x);
        assert_relative_eq!(segment.cp2_y, pair[1].y);
    }
}
