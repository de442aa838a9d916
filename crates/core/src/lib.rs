//! # snake-hunt-core
//!
//! Rule engine for a location-based capture-the-target game: a player
//! physically walks near fixed waypoints, and the engine decides which
//! unvisited target the current position can claim and whether claiming it
//! is legal under the snake rule (a new connecting segment may not cross
//! any previously committed one).
//!
//! ## Features
//!
//! - **Exact crossing semantics**: shared endpoints never cross, an
//!   endpoint landing mid-segment always does
//! - **Tolerance-protected geometry**: one shared epsilon for coordinates,
//!   slopes, and intercepts
//! - **Ordered capture path**: contiguous fill, no duplicates, one slot per
//!   target
//! - **GeoJSON game definitions**: targets and capture radius from a
//!   FeatureCollection
//!
//! ## Example
//!
//! ```
//! use snake_hunt_core::prelude::*;
//! use geo::Point;
//!
//! let targets = TargetSet::new(vec![
//!     Target::new("Alma Mater", Point::new(-88.228199, 40.106659)),
//!     Target::new("Illini Union", Point::new(-88.227263, 40.109551)),
//! ]);
//!
//! let mut session = TargetModeSession::with_targets(targets, 20.0);
//!
//! // Standing at the first target claims it.
//! let capture = session.on_location_update(Point::new(-88.228199, 40.106659));
//! assert_eq!(capture, Some(CaptureEvent { target: 0, slot: 0 }));
//!
//! // A sample far from every remaining target claims nothing.
//! assert_eq!(session.on_location_update(Point::new(-88.228199, 40.106659)), None);
//! ```

pub mod capture;
pub mod config;
pub mod geom;
pub mod session;
pub mod target;

// Re-exports for convenience
pub mod prelude {
    pub use crate::capture::{CapturePath, can_capture, find_capturable_target};
    pub use crate::config::{DEFAULT_PROXIMITY_THRESHOLD_M, GameDefinition, GameDefinitionError};
    pub use crate::geom::{distance_meters, segments_cross};
    pub use crate::session::{CaptureEvent, GameState, TargetModeSession};
    pub use crate::target::{Target, TargetSet};
}

pub use prelude::*;
