//! Leap application.
//!
//! The goal hands a [`JumpCommand`] to a [`Locomotion`] implementation; the
//! helpers here turn it into a velocity impulse.

use glam::DVec3;

use crate::actor::ActorState;
use crate::jump::JumpCommand;
use crate::vector_math::horizontal_direction;
use crate::LEAP_LIFT_THRESHOLD;

/// Applies leaps to the actor.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait Locomotion {
    /// Launches the actor according to `command`.
    fn leap(&mut self, actor: &ActorState, command: &JumpCommand);
}

/// Velocity change for a leap from `position` towards `target`.
///
/// The horizontal part points at the target on the horizontal plane and has
/// magnitude `horizontal`. Lift is only added while the actor is not already
/// rising faster than [`LEAP_LIFT_THRESHOLD`], so repeated leaps do not stack
/// height.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use lunge::locomotion::leap_impulse;
/// let impulse = leap_impulse(DVec3::ZERO, DVec3::new(2.0, 5.0, 0.0), 0.5, 0.4, DVec3::ZERO);
/// assert_eq!(impulse, DVec3::new(0.5, 0.4, 0.0));
/// ```
#[must_use]
pub fn leap_impulse(
    position: DVec3,
    target: DVec3,
    horizontal: f64,
    vertical: f64,
    current_velocity: DVec3,
) -> DVec3 {
    let planar = horizontal_direction(position, target).unwrap_or(DVec3::ZERO) * horizontal;
    let lift = if current_velocity.y < LEAP_LIFT_THRESHOLD {
        vertical
    } else {
        0.0
    };
    DVec3::new(planar.x, lift, planar.z)
}

/// Locomotion that adds the leap impulse to a velocity.
#[derive(Debug)]
pub struct ImpulseLocomotion<'a> {
    velocity: &'a mut DVec3,
}

impl<'a> ImpulseLocomotion<'a> {
    /// Wraps the velocity the impulse is added to.
    #[must_use]
    pub const fn new(velocity: &'a mut DVec3) -> Self {
        Self { velocity }
    }
}

impl Locomotion for ImpulseLocomotion<'_> {
    fn leap(&mut self, actor: &ActorState, command: &JumpCommand) {
        let impulse = leap_impulse(
            actor.position,
            command.target,
            command.horizontal_speed,
            command.vertical_speed,
            *self.velocity,
        );
        *self.velocity += impulse;
    }
}
