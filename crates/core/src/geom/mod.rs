//! Planar geometry over lat/lng coordinates.

pub mod crossing;
pub mod distance;
pub mod tolerance;

pub use crossing::segments_cross;
pub use distance::distance_meters;
pub use tolerance::{COORD_TOLERANCE, same, same_point};
