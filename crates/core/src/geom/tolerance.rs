//! Tolerance-based comparison for coordinates and derived values.
//!
//! Slopes and intercepts in the crossing test go through a subtraction and
//! a division before they are compared, so exact float equality is too
//! brittle. Every comparison in the geometry code goes through the single
//! shared tolerance defined here.

use geo::Point;

/// Shared tolerance for coordinate, slope, and intercept comparisons, in
/// degrees. About 0.1 m of latitude; two distinct targets are never placed
/// this close together, while the round-off from one subtraction and one
/// division on campus-scale coordinates is orders of magnitude smaller.
pub const COORD_TOLERANCE: f64 = 1e-6;

/// Whether two values are equal within [`COORD_TOLERANCE`].
pub fn same(a: f64, b: f64) -> bool {
    (a - b).abs() < COORD_TOLERANCE
}

/// Whether two points coincide within [`COORD_TOLERANCE`] on both axes.
pub fn same_point(a: Point, b: Point) -> bool {
    same(a.x(), b.x()) && same(a.y(), b.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_within_tolerance() {
        assert!(same(40.106659, 40.106659));
        assert!(same(40.106659, 40.1066595));
        assert!(!same(40.106659, 40.106669));
    }

    #[test]
    fn test_same_is_symmetric() {
        assert_eq!(same(1.0, 1.0000005), same(1.0000005, 1.0));
        assert_eq!(same(-88.2, -88.3), same(-88.3, -88.2));
    }

    #[test]
    fn test_same_point_requires_both_axes() {
        let a = Point::new(-88.228199, 40.106659);
        assert!(same_point(a, Point::new(-88.228199, 40.106659)));
        assert!(!same_point(a, Point::new(-88.228199, 40.107)));
        assert!(!same_point(a, Point::new(-88.229, 40.106659)));
    }
}
