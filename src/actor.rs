//! Per-tick snapshot of the actor running the jump goal.
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// What the goal needs to know about its actor on a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorState {
    /// Feet position in world space.
    pub position: DVec3,
    /// Horizontal extent of the actor's collision box.
    pub width: f64,
    /// Whether the actor stands on solid footing this tick.
    pub on_ground: bool,
    /// Position of the pursuit target, if any.
    #[serde(default)]
    pub target: Option<DVec3>,
    /// Current velocity in blocks per tick.
    #[serde(default)]
    pub velocity: DVec3,
}

impl ActorState {
    /// A grounded, stationary actor without a target.
    #[must_use]
    pub const fn new(position: DVec3, width: f64) -> Self {
        Self {
            position,
            width,
            on_ground: true,
            target: None,
            velocity: DVec3::ZERO,
        }
    }

    /// Returns the snapshot chasing `target`.
    #[must_use]
    pub const fn with_target(mut self, target: DVec3) -> Self {
        self.target = Some(target);
        self
    }

    /// Returns the snapshot with the grounded flag replaced.
    #[must_use]
    pub const fn with_ground(mut self, on_ground: bool) -> Self {
        self.on_ground = on_ground;
        self
    }

    /// Straight-line distance to the target.
    #[must_use]
    pub fn distance_to_target(&self) -> Option<f64> {
        self.target.map(|target| self.position.distance(target))
    }
}
