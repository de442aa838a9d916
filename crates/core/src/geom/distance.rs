//! Planar distance approximation for campus-scale coordinates.
//!
//! The range query only ever compares distances of a few tens of meters, so
//! lat/lng are scaled to meters with fixed per-degree factors instead of a
//! geodesic formula. At game scale the difference is far smaller than GPS
//! accuracy.

use geo::Point;

/// Meters per degree of latitude.
const LAT_METERS_PER_DEGREE: f64 = 111_000.0;

/// Meters per degree of longitude at the game area's latitude.
const LNG_METERS_PER_DEGREE: f64 = 81_000.0;

/// Approximate distance in meters between two points.
pub fn distance_meters(a: Point, b: Point) -> f64 {
    let north = (a.y() - b.y()) * LAT_METERS_PER_DEGREE;
    let east = (a.x() - b.x()) * LNG_METERS_PER_DEGREE;
    (north * north + east * east).sqrt()
}
