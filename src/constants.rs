//! Tuning constants for the jump-to-target goal.
//!
//! The values were tuned by hand against one host's movement model. They seed
//! the defaults of [`crate::JumpSettings`] and are not derived from physical
//! law.

/// Smallest horizontal take-off speed a successful jump reports.
pub const MIN_JUMP_VELOCITY: f64 = 0.4;
/// Ceiling for the vertical take-off speed, applied independently of the
/// horizontal speed.
pub const MAX_VERTICAL_VELOCITY: f64 = 0.6;
/// Minimum depth, in blocks, of an open column before it counts as a gap.
pub const MIN_GAP_SIZE: i32 = 2;
/// Targets closer than this are left to ordinary locomotion.
pub const MIN_ENTITY_DISTANCE: f64 = 2.5;
/// Consecutive ticks a target must be held before jumping is considered.
pub const TARGET_ACQUIRE_DELAY: u32 = 5;

/// Length of the lookahead line walked ahead of the actor.
pub const LOOKAHEAD_LENGTH: f64 = 1.2;
/// Number of evenly spaced samples on the lookahead line, both ends included.
pub const LOOKAHEAD_SAMPLES: usize = 4;
/// Largest `depth + height` sum visited by the staircase landing search.
pub const STAIRCASE_STEPS: i32 = 4;
/// Forward distance of the nearest landing candidate.
pub const LANDING_OFFSET: f64 = 2.5;
/// Heading offsets, in degrees, tried in order around the target direction.
pub const JUMP_ANGLES: [f64; 5] = [0.0, 30.0, -30.0, 60.0, -60.0];

/// Base take-off speed added to every jump.
pub const SPEED_INTERCEPT: f64 = 0.2;
/// Scale applied to the distance/height term of the speed model.
pub const SPEED_SCALE: f64 = 0.14;
/// Weight of the squared jump length.
pub const SPEED_GRAVITY: f64 = 1.2;
/// Weight of the height difference between take-off and landing.
pub const SPEED_VERTICAL_IMPACT: f64 = 0.8;

/// Vertical drop from the actor's feet to the traced jump line.
pub const TRACE_DROP: f64 = 0.5;
/// Upward speed above which a leap adds no further lift.
pub const LEAP_LIFT_THRESHOLD: f64 = 0.1;
