//! The two pure queries that gate a capture: proximity and the snake rule.
//!
//! Neither function mutates its arguments; recording the capture afterwards
//! is [`CapturePath::record`]'s job, composed by the session in the order
//! range query → snake rule → record.

use geo::{Line, Point};
use tracing::debug;

use crate::capture::path::CapturePath;
use crate::geom::{distance_meters, segments_cross};
use crate::target::TargetSet;

/// Finds an unvisited target within `radius_m` meters of `position`.
///
/// Scans in ascending index order and returns the first hit, so when
/// several targets are in range the lowest index wins — deterministic for
/// a given input. Returns `None` when nothing qualifies, including when
/// the target set is empty or the path is already full.
pub fn find_capturable_target(
    targets: &TargetSet,
    path: &CapturePath,
    position: Point,
    radius_m: f64,
) -> Option<usize> {
    debug_assert!(radius_m >= 0.0, "negative capture radius");

    for (index, target) in targets.iter().enumerate() {
        if path.contains(index) {
            continue;
        }
        let distance = distance_meters(position, target.position);
        if distance <= radius_m {
            debug!(index, distance_m = distance, "unvisited target in range");
            return Some(index);
        }
    }
    None
}

/// Whether capturing `candidate` would keep the path legal under the snake
/// rule.
///
/// Only the segment from the last captured target to the candidate needs
/// checking: every committed segment was validated the same way when it
/// was added, so the newest segment is the only one that can introduce a
/// crossing. With zero or one captures there is no segment yet and any
/// target is permitted.
///
/// The candidate must be a valid, not-yet-captured target index.
pub fn can_capture(targets: &TargetSet, path: &CapturePath, candidate: usize) -> bool {
    debug_assert!(candidate < targets.len(), "candidate {candidate} out of bounds");
    debug_assert!(!path.contains(candidate), "candidate {candidate} already captured");

    let Some(last) = path.last() else {
        return true;
    };
    if path.len() == 1 {
        // One captured point, no segments to cross yet.
        return true;
    }

    let new_segment = Line::new(targets.position(last), targets.position(candidate));
    for committed in path.segments(targets) {
        if segments_cross(new_segment, committed) {
            debug!(candidate, "snake rule violated");
            return false;
        }
    }
    true
}
