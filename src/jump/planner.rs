//! Terrain-bound jump planner.

use glam::DVec3;
use log::{debug, trace};

use super::{JumpCommand, JumpSettings};
use crate::terrain::{BlockCoordinate, TerrainClassifier};
use crate::vector_math::{line_points, rotate_about_axis};

/// Geometric jump reasoning over an injected terrain capability.
///
/// The planner borrows its terrain and settings; it holds no state of its own
/// and every query is deterministic for a fixed terrain.
#[derive(Debug, Clone, Copy)]
pub struct JumpPlanner<'a, T: ?Sized> {
    pub(super) terrain: &'a T,
    pub(super) settings: &'a JumpSettings,
}

impl<'a, T: TerrainClassifier + ?Sized> JumpPlanner<'a, T> {
    /// Binds the planner to a terrain and its settings.
    #[must_use]
    pub const fn new(terrain: &'a T, settings: &'a JumpSettings) -> Self {
        Self { terrain, settings }
    }

    /// The settings the planner was built with.
    #[must_use]
    pub const fn settings(&self) -> &JumpSettings {
        self.settings
    }

    /// Tries every configured heading around `target_direction` and returns
    /// the first feasible jump.
    ///
    /// `target_direction` must be a unit vector on the horizontal plane.
    #[must_use]
    pub fn plan(&self, position: DVec3, width: f64, target_direction: DVec3) -> Option<JumpCommand> {
        self.settings.angles.iter().find_map(|&angle| {
            let direction = rotate_about_axis(target_direction, DVec3::Y, angle);
            let command = self.try_jump(position, width, direction)?;
            debug!(
                "jump at {angle} degrees from {position:?}: horizontal {:.3}, vertical {:.3}",
                command.horizontal_speed, command.vertical_speed
            );
            Some(JumpCommand {
                angle_offset: angle,
                ..command
            })
        })
    }

    /// Attempts a jump along a single heading.
    ///
    /// The short lookahead line ahead of the actor must cross an obstacle and a
    /// landing spot must be reachable under the velocity cap.
    #[must_use]
    pub fn try_jump(&self, position: DVec3, width: f64, direction: DVec3) -> Option<JumpCommand> {
        if !self.gap_ahead(position, direction) {
            return None;
        }
        let speed = self.solve_jump_velocity(position, width, direction)?;
        Some(JumpCommand {
            angle_offset: 0.0,
            direction,
            target: position + direction,
            horizontal_speed: speed,
            vertical_speed: speed.min(self.settings.max_vertical_velocity),
        })
    }

    /// Whether any sample of the lookahead line stands over an obstacle.
    #[must_use]
    pub fn gap_ahead(&self, position: DVec3, direction: DVec3) -> bool {
        let end = position + direction * self.settings.lookahead_length;
        line_points(position, end, self.settings.lookahead_samples)
            .into_iter()
            .map(BlockCoordinate::containing)
            .any(|cell| {
                let blocked = self.has_obstacle(cell, self.settings.min_gap_size);
                trace!("sample {cell:?}: obstacle {blocked}");
                blocked
            })
    }
}
