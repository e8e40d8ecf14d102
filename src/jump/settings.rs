//! Tunables for the jump goal.
//!
//! Every value except the per-actor velocity cap defaults to the constants in
//! [`crate::constants`]. Settings deserialise from JSON so scenarios can tweak
//! them without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    JUMP_ANGLES, LANDING_OFFSET, LOOKAHEAD_LENGTH, LOOKAHEAD_SAMPLES, MAX_VERTICAL_VELOCITY,
    MIN_ENTITY_DISTANCE, MIN_GAP_SIZE, MIN_JUMP_VELOCITY, SPEED_GRAVITY, SPEED_INTERCEPT,
    SPEED_SCALE, SPEED_VERTICAL_IMPACT, STAIRCASE_STEPS, TARGET_ACQUIRE_DELAY,
};

/// Rejected settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A gap must be at least one block deep.
    #[error("min_gap_size must be at least 1, got {0}")]
    GapTooShallow(i32),
    /// The lookahead line needs both of its end points.
    #[error("lookahead_samples must be at least 2, got {0}")]
    TooFewLookaheadSamples(usize),
    /// The lookahead line must point somewhere.
    #[error("lookahead_length must be positive, got {0}")]
    NonPositiveLookahead(f64),
    /// The staircase search depth is negative.
    #[error("staircase_steps must not be negative, got {0}")]
    NegativeStaircase(i32),
    /// The speed floor is not positive or lies above the cap.
    #[error("jump velocities must satisfy 0 < min ({min}) <= max ({max})")]
    VelocityRange {
        /// Configured `min_jump_velocity`.
        min: f64,
        /// Configured `max_jump_velocity`.
        max: f64,
    },
    /// The vertical ceiling is not positive.
    #[error("max_vertical_velocity must be positive, got {0}")]
    NonPositiveVertical(f64),
    /// The heading list is empty.
    #[error("at least one jump angle is required")]
    NoAngles,
}

/// Empirical take-off speed model.
///
/// `speed = intercept + scale * (gravity * L² + vertical_impact * H) / L`
/// for a jump of horizontal length `L` and height change `H`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpPhysics {
    /// Base speed added to every jump.
    pub intercept: f64,
    /// Scale of the length and height term.
    pub scale: f64,
    /// Weight of the squared length.
    pub gravity: f64,
    /// Weight of the height change.
    pub vertical_impact: f64,
}

impl Default for JumpPhysics {
    fn default() -> Self {
        Self {
            intercept: SPEED_INTERCEPT,
            scale: SPEED_SCALE,
            gravity: SPEED_GRAVITY,
            vertical_impact: SPEED_VERTICAL_IMPACT,
        }
    }
}

impl JumpPhysics {
    /// Raw take-off speed for a jump of `length` and `height`.
    ///
    /// # Examples
    /// ```
    /// use lunge::JumpPhysics;
    /// let speed = JumpPhysics::default().required_speed(2.0, 0.0);
    /// assert!((speed - (0.2 + 0.14 * 1.2 * 2.0)).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn required_speed(&self, length: f64, height: f64) -> f64 {
        self.intercept
            + self.scale * (length.powi(2) * self.gravity + self.vertical_impact * height) / length
    }
}

/// Configuration of a single jump-to-target goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpSettings {
    /// Per-actor cap; a jump needing this speed or more is abandoned.
    pub max_jump_velocity: f64,
    /// Floor applied to every accepted take-off speed.
    #[serde(default = "defaults::min_jump_velocity")]
    pub min_jump_velocity: f64,
    /// Ceiling of the vertical take-off speed.
    #[serde(default = "defaults::max_vertical_velocity")]
    pub max_vertical_velocity: f64,
    /// Depth in blocks an open column needs to count as a gap.
    #[serde(default = "defaults::min_gap_size")]
    pub min_gap_size: i32,
    /// Targets this close are left to ordinary locomotion.
    #[serde(default = "defaults::min_entity_distance")]
    pub min_entity_distance: f64,
    /// Ticks a target must be held before a jump is considered.
    #[serde(default = "defaults::target_acquire_delay")]
    pub target_acquire_delay: u32,
    /// Length of the lookahead line ahead of the actor.
    #[serde(default = "defaults::lookahead_length")]
    pub lookahead_length: f64,
    /// Samples on the lookahead line, both ends included.
    #[serde(default = "defaults::lookahead_samples")]
    pub lookahead_samples: usize,
    /// Largest `depth + height` visited by the landing search.
    #[serde(default = "defaults::staircase_steps")]
    pub staircase_steps: i32,
    /// Forward distance of the nearest landing candidate.
    #[serde(default = "defaults::landing_offset")]
    pub landing_offset: f64,
    /// Heading offsets in degrees, tried in order.
    #[serde(default = "defaults::angles")]
    pub angles: Vec<f64>,
    /// Take-off speed model.
    #[serde(default)]
    pub physics: JumpPhysics,
}

mod defaults {
    use super::*;

    pub const fn min_jump_velocity() -> f64 {
        MIN_JUMP_VELOCITY
    }
    pub const fn max_vertical_velocity() -> f64 {
        MAX_VERTICAL_VELOCITY
    }
    pub const fn min_gap_size() -> i32 {
        MIN_GAP_SIZE
    }
    pub const fn min_entity_distance() -> f64 {
        MIN_ENTITY_DISTANCE
    }
    pub const fn target_acquire_delay() -> u32 {
        TARGET_ACQUIRE_DELAY
    }
    pub const fn lookahead_length() -> f64 {
        LOOKAHEAD_LENGTH
    }
    pub const fn lookahead_samples() -> usize {
        LOOKAHEAD_SAMPLES
    }
    pub const fn staircase_steps() -> i32 {
        STAIRCASE_STEPS
    }
    pub const fn landing_offset() -> f64 {
        LANDING_OFFSET
    }
    pub fn angles() -> Vec<f64> {
        JUMP_ANGLES.to_vec()
    }
}

impl JumpSettings {
    /// Default settings for an actor whose leaps are capped at
    /// `max_jump_velocity`.
    #[must_use]
    pub fn new(max_jump_velocity: f64) -> Self {
        Self {
            max_jump_velocity,
            min_jump_velocity: MIN_JUMP_VELOCITY,
            max_vertical_velocity: MAX_VERTICAL_VELOCITY,
            min_gap_size: MIN_GAP_SIZE,
            min_entity_distance: MIN_ENTITY_DISTANCE,
            target_acquire_delay: TARGET_ACQUIRE_DELAY,
            lookahead_length: LOOKAHEAD_LENGTH,
            lookahead_samples: LOOKAHEAD_SAMPLES,
            staircase_steps: STAIRCASE_STEPS,
            landing_offset: LANDING_OFFSET,
            angles: JUMP_ANGLES.to_vec(),
            physics: JumpPhysics::default(),
        }
    }

    /// Checks the settings for values the planner cannot work with.
    ///
    /// # Errors
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_gap_size < 1 {
            return Err(SettingsError::GapTooShallow(self.min_gap_size));
        }
        if self.lookahead_samples < 2 {
            return Err(SettingsError::TooFewLookaheadSamples(self.lookahead_samples));
        }
        if self.lookahead_length.is_nan() || self.lookahead_length <= 0.0 {
            return Err(SettingsError::NonPositiveLookahead(self.lookahead_length));
        }
        if self.staircase_steps < 0 {
            return Err(SettingsError::NegativeStaircase(self.staircase_steps));
        }
        if !(self.min_jump_velocity > 0.0 && self.min_jump_velocity <= self.max_jump_velocity) {
            return Err(SettingsError::VelocityRange {
                min: self.min_jump_velocity,
                max: self.max_jump_velocity,
            });
        }
        if self.max_vertical_velocity.is_nan() || self.max_vertical_velocity <= 0.0 {
            return Err(SettingsError::NonPositiveVertical(self.max_vertical_velocity));
        }
        if self.angles.is_empty() {
            return Err(SettingsError::NoAngles);
        }
        Ok(())
    }

    /// Applies the velocity cap and floor to a raw take-off speed.
    ///
    /// Speeds at or above the cap are rejected; anything slower is raised to
    /// at least `min_jump_velocity`.
    ///
    /// # Examples
    /// ```
    /// use lunge::JumpSettings;
    /// let settings = JumpSettings::new(1.0);
    /// assert_eq!(settings.clamp_speed(0.35), Some(0.4));
    /// assert_eq!(settings.clamp_speed(0.7), Some(0.7));
    /// assert_eq!(settings.clamp_speed(1.0), None);
    /// ```
    #[must_use]
    pub fn clamp_speed(&self, raw: f64) -> Option<f64> {
        (raw < self.max_jump_velocity).then(|| raw.max(self.min_jump_velocity))
    }
}
