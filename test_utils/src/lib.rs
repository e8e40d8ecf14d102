//! Fixtures shared by the integration tests.
//!
//! Worlds are built on [`GridTerrain`] with the ground's top block at
//! [`GROUND_TOP`], so actors stand at `y = 64`. Trenches and hazard strips
//! run along the z axis one block ahead of [`START`], inside the reach of the
//! gap check.

pub mod navigation;
pub mod terrain;

pub use navigation::StubNavigation;
pub use terrain::{flat_ground, hazard_strip, trench, GROUND_TOP};

use glam::DVec3;
use lunge::ActorState;

/// Feet position of the chasing actor.
pub const START: DVec3 = DVec3::new(0.3, 64.0, 0.5);
/// Position of the chased target, ten blocks along +X.
pub const TARGET: DVec3 = DVec3::new(10.3, 64.0, 0.5);
/// Collision width of a zombie-sized actor.
pub const WIDTH: f64 = 0.6;

/// A grounded actor at [`START`] chasing [`TARGET`].
///
/// # Examples
/// ```
/// let actor = test_utils::chaser();
/// assert_eq!(actor.target, Some(test_utils::TARGET));
/// ```
pub fn chaser() -> ActorState {
    ActorState::new(START, WIDTH).with_target(TARGET)
}
