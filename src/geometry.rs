//! Axis-aligned boxes and segment tracing.
//!
//! Collision shapes reported by the terrain are block-local boxes; the jump
//! planner translates them into world space and traces the take-off line
//! against them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Directions closer to zero than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lowest corner.
    pub min: DVec3,
    /// Highest corner.
    pub max: DVec3,
}

impl Aabb {
    /// The full block, `[0, 1]` on every axis.
    pub const UNIT: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ONE,
    };

    /// Builds a box from two corners in any order.
    #[must_use]
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the box moved by `offset`.
    #[must_use]
    pub fn translated(self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Whether the box encloses no volume.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.cmpge(self.max).any()
    }

    /// Returns `true` if `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Traces the segment `start -> end` and returns the point where it
    /// enters the box.
    ///
    /// Uses the slab method. Only entries strictly between `start` and `end`
    /// count, so a segment that begins inside or on the surface of the box
    /// reports nothing, and so does one that merely ends on a face. Segments
    /// that stop short of the box or pass beside it miss as well.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use lunge::geometry::Aabb;
    /// let block = Aabb::UNIT.translated(DVec3::new(3.0, 0.0, 0.0));
    /// let hit = block.trace_segment(DVec3::new(0.0, 0.5, 0.5), DVec3::new(5.0, 0.5, 0.5));
    /// assert_eq!(hit, Some(DVec3::new(3.0, 0.5, 0.5)));
    /// ```
    #[must_use]
    pub fn trace_segment(&self, start: DVec3, end: DVec3) -> Option<DVec3> {
        let delta = end - start;
        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;

        let axes = start
            .to_array()
            .into_iter()
            .zip(delta.to_array())
            .zip(self.min.to_array().into_iter().zip(self.max.to_array()));
        for ((origin, step), (lo, hi)) in axes {
            if step.abs() < PARALLEL_EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - origin) / step;
            let t2 = (hi - origin) / step;
            t_enter = t_enter.max(t1.min(t2));
            t_exit = t_exit.min(t1.max(t2));
        }

        if t_enter > t_exit || t_enter <= 0.0 || t_enter >= 1.0 {
            return None;
        }
        Some(start + delta * t_enter)
    }
}
