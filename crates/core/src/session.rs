//! Single-player target-mode session.
//!
//! Owns one target set and one capture path and turns raw location samples
//! into capture decisions. Each update runs the range query, then the snake
//! rule, then records the capture — in that order, one sample at a time.
//! Multiplayer synchronization and rendering sit outside this crate and
//! drive the session through [`TargetModeSession::on_location_update`].

use geo::{Line, Point};
use tracing::info;

use crate::capture::{CapturePath, can_capture, find_capturable_target};
use crate::config::GameDefinition;
use crate::target::TargetSet;

/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    Paused,
    Running,
    Ended,
}

/// A successful capture: which target, and which path slot it filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureEvent {
    pub target: usize,
    pub slot: usize,
}

/// One player's game against a fixed target set.
pub struct TargetModeSession {
    targets: TargetSet,
    path: CapturePath,
    proximity_threshold_m: f64,
    state: GameState,
}

impl TargetModeSession {
    /// Starts a running session from a parsed game definition.
    pub fn new(definition: &GameDefinition) -> Self {
        Self::with_targets(definition.targets.clone(), definition.proximity_threshold_m)
    }

    pub fn with_targets(targets: TargetSet, proximity_threshold_m: f64) -> Self {
        debug_assert!(proximity_threshold_m > 0.0, "non-positive capture radius");
        let path = CapturePath::new(targets.len());
        let state = if path.is_full() {
            // A game with no targets has nothing left to play.
            GameState::Ended
        } else {
            GameState::Running
        };
        Self {
            targets,
            path,
            proximity_threshold_m,
            state,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn path(&self) -> &CapturePath {
        &self.path
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn pause(&mut self) {
        if self.state == GameState::Running {
            self.state = GameState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Running;
        }
    }

    /// Feeds one location sample through the capture pipeline.
    ///
    /// Returns the capture that happened, if any. A sample out of range of
    /// every unvisited target, or whose capture would break the snake rule,
    /// changes nothing. Samples are ignored unless the session is running;
    /// the final capture ends the game.
    pub fn on_location_update(&mut self, position: Point) -> Option<CaptureEvent> {
        if self.state != GameState::Running {
            return None;
        }

        let target = find_capturable_target(
            &self.targets,
            &self.path,
            position,
            self.proximity_threshold_m,
        )?;
        if !can_capture(&self.targets, &self.path, target) {
            return None;
        }
        let slot = self.path.record(target)?;

        let name = self.targets.get(target).map(|t| t.name.as_ref()).unwrap_or("?");
        info!(index = target, slot, name, "captured target");
        if self.path.is_full() {
            self.state = GameState::Ended;
            info!("all targets captured, game over");
        }
        Some(CaptureEvent { target, slot })
    }

    /// The committed connecting segments in capture order, for rendering.
    pub fn captured_polyline(&self) -> Vec<Line> {
        self.path.segments(&self.targets).collect()
    }
}
