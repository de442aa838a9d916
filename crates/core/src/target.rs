//! The fixed waypoint set for one game area.

use std::sync::Arc;

use geo::Point;

/// A fixed geographic waypoint a player can capture.
#[derive(Clone, Debug)]
pub struct Target {
    pub name: Arc<str>,
    pub position: Point,
}

impl Target {
    pub fn new(name: impl AsRef<str>, position: Point) -> Self {
        Self {
            name: name.as_ref().into(),
            position,
        }
    }
}

/// The immutable, ordered target list for one game.
///
/// The engine refers to targets by index into this list; names exist for
/// configuration and presentation only.
#[derive(Clone, Debug, Default)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    pub fn new(targets: Vec<Target>) -> Self {
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// Position of the target at `index`. The index must be valid.
    pub fn position(&self, index: usize) -> Point {
        self.targets[index].position
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }
}
