//! Segment crossing test for the snake rule.
//!
//! "Crossing" is narrower than intersecting. Two segments that only share
//! an endpoint do not cross — that is how consecutive path segments
//! connect. A segment whose endpoint lands in the *middle* of another
//! segment does cross it; otherwise a path could thread through a single
//! point without penalty.
//!
//! Longitude is X and latitude is Y on a flat plane. This ignores the
//! earth's curvature, which is undetectable at the scale of one game area.

use geo::Line;

use crate::geom::tolerance::{same, same_point};

/// Whether two segments cross under the snake rule's definition.
///
/// Both segments must have positive length.
pub fn segments_cross(a: Line, b: Line) -> bool {
    debug_assert!(!same_point(a.start_point(), a.end_point()), "degenerate segment");
    debug_assert!(!same_point(b.start_point(), b.end_point()), "degenerate segment");

    let (a0, a1) = a.points();
    let (b0, b1) = b.points();
    if same_point(a0, b0) || same_point(a0, b1) || same_point(a1, b0) || same_point(a1, b1) {
        // Sharing a tip, not crossing.
        return false;
    }

    // A segment is vertical (purely north-south) if its longitude is constant.
    let a_vertical = same(a.start.x, a.end.x);
    let b_vertical = same(b.start.x, b.end.x);
    if a_vertical && b_vertical {
        // Parallel vertical segments.
        return false;
    }
    if a_vertical {
        return crosses_vertical(a, b);
    }
    if b_vertical {
        return crosses_vertical(b, a);
    }

    let a_slope = slope(a);
    let b_slope = slope(b);
    if same(a_slope, b_slope) {
        // Parallel.
        return false;
    }

    // Non-parallel, so the containing lines meet somewhere. Solve the two
    // y = slope * x + intercept equations for the intersection longitude.
    let a_intercept = a.start.y - a_slope * a.start.x;
    let b_intercept = b.start.y - b_slope * b.start.x;
    let x = -(a_intercept - b_intercept) / (a_slope - b_slope);

    if same(x, a.start.x) || same(x, a.end.x) || same(x, b.start.x) || same(x, b.end.x) {
        // An endpoint of one segment lands in the middle of the other.
        return true;
    }
    let inside_a = x > a.start.x.min(a.end.x) && x < a.start.x.max(a.end.x);
    let inside_b = x > b.start.x.min(b.end.x) && x < b.start.x.max(b.end.x);
    inside_a && inside_b
}

/// Crossing test for a vertical segment against a non-vertical one.
fn crosses_vertical(vertical: Line, other: Line) -> bool {
    let x = vertical.start.x;
    if other.start.x.max(other.end.x) < x || other.start.x.min(other.end.x) > x {
        // The sloped segment stays entirely to one side of the vertical.
        return false;
    }
    let y_at_x = slope(other) * (x - other.start.x) + other.start.y;
    if same(y_at_x, vertical.start.y) || same(y_at_x, vertical.end.y) {
        // The vertical segment's tip sits on the sloped segment.
        return true;
    }
    y_at_x > vertical.start.y.min(vertical.end.y) && y_at_x < vertical.start.y.max(vertical.end.y)
}

/// Slope of a non-vertical segment, longitude as X and latitude as Y.
fn slope(line: Line) -> f64 {
    (line.end.y - line.start.y) / (line.end.x - line.start.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
        Line::new(Coord { x: x0, y: y0 }, Coord { x: x1, y: y1 })
    }

    #[test]
    fn test_diagonals_cross() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(0.0, 1.0, 1.0, 0.0);
        assert!(segments_cross(a, b));
        assert!(segments_cross(b, a));
    }

    #[test]
    fn test_shared_endpoint_does_not_cross() {
        // Consecutive path segments share exactly one tip.
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(1.0, 1.0, 2.0, 0.0);
        assert!(!segments_cross(a, b));
        assert!(!segments_cross(b, a));

        // Doubling straight back along the same segment is also tip-sharing.
        let back = line(1.0, 1.0, 0.0, 0.0);
        assert!(!segments_cross(a, back));
    }

    #[test]
    fn test_endpoint_on_interior_crosses() {
        // Vertical segment ending on the middle of a horizontal one.
        let a = line(0.0, 0.0, 2.0, 0.0);
        let b = line(1.0, 0.0, 1.0, 1.0);
        assert!(segments_cross(a, b));
        assert!(segments_cross(b, a));

        // Sloped segment ending on the middle of another sloped one.
        let c = line(0.0, 0.0, 2.0, 2.0);
        let d = line(1.0, 1.0, 2.0, 0.0);
        assert!(segments_cross(c, d));
        assert!(segments_cross(d, c));
    }

    #[test]
    fn test_sloped_tip_on_vertical_interior_crosses() {
        let vertical = line(1.0, -1.0, 1.0, 1.0);
        let touching = line(0.0, 0.0, 1.0, 0.0);
        assert!(segments_cross(vertical, touching));
        assert!(segments_cross(touching, vertical));
    }

    #[test]
    fn test_parallel_never_cross() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(0.0, 0.5, 1.0, 1.5);
        assert!(!segments_cross(a, b));

        let v1 = line(0.0, 0.0, 0.0, 1.0);
        let v2 = line(0.5, 0.0, 0.5, 1.0);
        assert!(!segments_cross(v1, v2));

        let h1 = line(0.0, 0.0, 1.0, 0.0);
        let h2 = line(0.0, 0.5, 1.0, 0.5);
        assert!(!segments_cross(h1, h2));
    }

    #[test]
    fn test_vertical_against_sloped() {
        let vertical = line(1.0, -1.0, 1.0, 1.0);

        // Passes through the vertical's interior.
        assert!(segments_cross(vertical, line(0.0, -0.5, 2.0, 0.5)));
        // Meets the vertical's line above the segment.
        assert!(!segments_cross(vertical, line(0.0, 2.0, 2.0, 3.0)));
        // Never reaches the vertical's longitude.
        assert!(!segments_cross(vertical, line(2.0, 0.0, 3.0, 1.0)));
    }

    #[test]
    fn test_disjoint_segments_do_not_cross() {
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(3.0, 0.0, 5.0, -4.0);
        assert!(!segments_cross(a, b));
        assert!(!segments_cross(b, a));
    }

    #[test]
    fn test_lines_would_cross_but_segments_do_not() {
        // The containing lines meet at (0.75, 0.75), outside both spans.
        let a = line(0.0, 0.0, 0.5, 0.5);
        let b = line(1.0, 0.5, 2.0, -0.5);
        assert!(!segments_cross(a, b));
        assert!(!segments_cross(b, a));
    }

    #[test]
    fn test_near_parallel_resolved_by_tolerance() {
        // Slopes differ by less than the tolerance: treated as parallel.
        let a = line(0.0, 0.0, 1.0, 1.0);
        let b = line(0.0, 0.5, 1.0, 1.5000000001);
        assert!(!segments_cross(a, b));
    }

    #[test]
    fn test_campus_scale_coordinates() {
        // Same shapes at real lat/lng magnitudes.
        let a = line(-88.230, 40.100, -88.228, 40.102);
        let b = line(-88.230, 40.102, -88.228, 40.100);
        assert!(segments_cross(a, b));

        let c = line(-88.230, 40.100, -88.228, 40.100);
        let d = line(-88.230, 40.101, -88.228, 40.101);
        assert!(!segments_cross(c, d));
    }
}
