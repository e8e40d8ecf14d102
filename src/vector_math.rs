//! Basic vector math helper functions.
//! Plane projection, axis rotation and line sampling on `DVec3`.
use glam::{DQuat, DVec3};

use crate::numeric::count_to_f64;

/// Removes the component of `vector` along `normal`.
///
/// `normal` need not be unit length. A zero normal leaves the vector
/// unchanged.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use lunge::vector_math::plane_project;
/// let flat = plane_project(DVec3::new(3.0, 5.0, 4.0), DVec3::Y);
/// assert_eq!(flat, DVec3::new(3.0, 0.0, 4.0));
/// ```
#[must_use]
pub fn plane_project(vector: DVec3, normal: DVec3) -> DVec3 {
    let length_squared = normal.length_squared();
    if length_squared == 0.0 {
        return vector;
    }
    vector - normal * (vector.dot(normal) / length_squared)
}

/// Rotates `vector` by `degrees` around `axis` following the right-hand rule.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use lunge::vector_math::rotate_about_axis;
/// let turned = rotate_about_axis(DVec3::X, DVec3::Y, 90.0);
/// assert!((turned - DVec3::NEG_Z).length() < 1e-9);
/// ```
#[must_use]
pub fn rotate_about_axis(vector: DVec3, axis: DVec3, degrees: f64) -> DVec3 {
    let Some(unit_axis) = axis.try_normalize() else {
        return vector;
    };
    DQuat::from_axis_angle(unit_axis, degrees.to_radians()) * vector
}

/// Returns `points` evenly spaced samples from `start` to `end`, both ends
/// included.
///
/// Fewer than two points degenerate to the start alone (or nothing for zero).
#[must_use]
pub fn line_points(start: DVec3, end: DVec3, points: usize) -> Vec<DVec3> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / count_to_f64(points - 1);
            (0..points)
                .map(|i| start + step * count_to_f64(i))
                .collect()
        }
    }
}

/// Unit direction from `from` to `to` flattened onto the horizontal plane.
///
/// Returns `None` when the two points are vertically aligned or not finite.
#[must_use]
pub fn horizontal_direction(from: DVec3, to: DVec3) -> Option<DVec3> {
    plane_project(to - from, DVec3::Y).try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::quarter_left(90.0, DVec3::NEG_Z)]
    #[case::quarter_right(-90.0, DVec3::Z)]
    #[case::half(180.0, DVec3::NEG_X)]
    #[case::none(0.0, DVec3::X)]
    fn rotates_around_vertical(#[case] degrees: f64, #[case] expected: DVec3) {
        let turned = rotate_about_axis(DVec3::X, DVec3::Y, degrees);
        assert_relative_eq!(turned.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(turned.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(turned.z, expected.z, epsilon = 1e-9);
    }

    #[test]
    fn rotation_preserves_length() {
        let vector = DVec3::new(0.6, 0.0, 0.8);
        for degrees in [30.0, -30.0, 60.0, -60.0] {
            let turned = rotate_about_axis(vector, DVec3::Y, degrees);
            assert_relative_eq!(turned.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(turned.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn line_points_include_both_ends() {
        let points = line_points(DVec3::ZERO, DVec3::new(1.2, 0.0, 0.0), 4);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 4);
        for (actual, expected) in xs.iter().zip([0.0, 0.4, 0.8, 1.2]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case::none(0, 0)]
    #[case::single(1, 1)]
    fn degenerate_line_sampling(#[case] points: usize, #[case] expected: usize) {
        assert_eq!(line_points(DVec3::ZERO, DVec3::ONE, points).len(), expected);
    }

    #[test]
    fn horizontal_direction_ignores_height() {
        let direction = horizontal_direction(DVec3::ZERO, DVec3::new(3.0, 10.0, 4.0))
            .expect("direction should exist");
        assert_relative_eq!(direction.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(direction.y, 0.0);
        assert_relative_eq!(direction.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn horizontal_direction_rejects_vertical_alignment() {
        assert!(horizontal_direction(DVec3::ZERO, DVec3::new(0.0, 5.0, 0.0)).is_none());
    }

    #[test]
    fn plane_project_with_zero_normal_is_identity() {
        let vector = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(plane_project(vector, DVec3::ZERO), vector);
    }
}
