//! The ordered record of one player's captures.

use geo::Line;
use itertools::Itertools;

use crate::target::TargetSet;

/// The ordered sequence of targets one player has captured, with one slot
/// per target in the game.
///
/// Slots fill strictly left to right: the filled prefix holds target
/// indices in capture order and every empty slot sits after every filled
/// one. Stored as a filled prefix plus a capacity, so the invariant holds
/// by construction rather than by sentinel values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturePath {
    capacity: usize,
    visited: Vec<usize>,
}

impl CapturePath {
    /// Creates an empty path with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            visited: Vec::with_capacity(capacity),
        }
    }

    /// Number of targets captured so far.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether every slot is filled, meaning no further captures are
    /// possible.
    pub fn is_full(&self) -> bool {
        self.visited.len() == self.capacity
    }

    /// Whether `target` is already on the path.
    pub fn contains(&self, target: usize) -> bool {
        self.visited.contains(&target)
    }

    /// The most recently captured target, if any.
    pub fn last(&self) -> Option<usize> {
        self.visited.last().copied()
    }

    /// The captured target indices, in capture order.
    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    /// Records a capture in the first empty slot and returns that slot's
    /// index, or `None` — with the path untouched — if every slot is
    /// already filled.
    ///
    /// This is the only mutator of the path. Running the range query and
    /// the snake rule first is the caller's job.
    pub fn record(&mut self, target: usize) -> Option<usize> {
        debug_assert!(!self.contains(target), "target {target} captured twice");
        if self.is_full() {
            return None;
        }
        self.visited.push(target);
        Some(self.visited.len() - 1)
    }

    /// The committed connecting segments, in capture order.
    pub fn segments<'a>(&'a self, targets: &'a TargetSet) -> impl Iterator<Item = Line> + 'a {
        self.visited
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| Line::new(targets.position(from), targets.position(to)))
    }
}
