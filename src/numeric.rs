//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains when continuous positions are snapped onto the block lattice.

/// Floor the value and clamp it into the `i32` domain.
///
/// Non-finite inputs map to `0` so a corrupt position cannot produce a
/// far-away lattice cell.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let floored = value.floor();
    let clamped = floored.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Convert a sample count into the `f64` domain for interpolation.
#[expect(
    clippy::cast_precision_loss,
    reason = "Sample counts are tiny; precision loss is impossible in practice."
)]
#[must_use]
pub const fn count_to_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive(1.7, 1)]
    #[case::negative(-0.2, -1)]
    #[case::exact(64.0, 64)]
    #[case::nan(f64::NAN, 0)]
    #[case::huge(1e12, i32::MAX)]
    #[case::tiny(-1e12, i32::MIN)]
    fn floors_into_lattice(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(floor_to_i32(value), expected);
    }
}
