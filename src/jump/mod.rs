//! Jump-to-target decision making.
//!
//! [`JumpPlanner`] holds the geometric reasoning: probing for gaps and
//! hazards ahead of the actor, searching a staircase of landing spots and
//! solving the take-off speed. [`JumpToTargetGoal`] wraps it in the per-tick
//! goal contract the host scheduler polls.
//!
//! No path search is involved. Failure to find a jump is the normal outcome
//! on most ticks and is reported as `None`.

mod goal;
mod obstacle;
mod planner;
mod settings;
mod staircase;

pub use goal::{GoalControl, GoalPhase, JumpToTargetGoal};
pub use planner::JumpPlanner;
pub use settings::{JumpPhysics, JumpSettings, SettingsError};
pub use staircase::staircase_order;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A leap chosen for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpCommand {
    /// Heading offset from the target direction, in degrees.
    pub angle_offset: f64,
    /// Unit horizontal direction of the leap.
    pub direction: DVec3,
    /// Point one block ahead along `direction` the actor leaps towards.
    pub target: DVec3,
    /// Take-off speed along `direction`, in blocks per tick.
    pub horizontal_speed: f64,
    /// `min(horizontal_speed, max_vertical_velocity)`.
    pub vertical_speed: f64,
}
