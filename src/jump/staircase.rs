//! Landing search and take-off speed.
//!
//! Landing candidates form a staircase in front of the actor. For a search
//! depth of four the visiting order is:
//!
//! ```text
//! 0  1  3  6  10
//! 2  4  7  11
//! 5  8  12
//! 9  13
//! 14
//! ```
//!
//! Rows step forwards (`d`), columns step downwards (`y`). Closer and
//! shallower spots are visited first.

use glam::DVec3;
use log::trace;

use super::JumpPlanner;
use crate::geometry::Aabb;
use crate::terrain::{BlockCoordinate, TerrainClassifier, TerrainNodeKind};
use crate::TRACE_DROP;

/// `(depth, height)` pairs with `depth + height <= steps`, ordered by their
/// sum. Pairs with equal sums keep depth-major order.
///
/// # Examples
/// ```
/// use lunge::jump::staircase_order;
/// assert_eq!(staircase_order(1), vec![(0, 0), (0, 1), (1, 0)]);
/// ```
#[must_use]
pub fn staircase_order(steps: i32) -> Vec<(i32, i32)> {
    let mut pairs: Vec<(i32, i32)> = (0..=steps)
        .flat_map(|depth| (0..=steps - depth).map(move |height| (depth, height)))
        .collect();
    pairs.sort_by_key(|&(depth, height)| depth + height);
    pairs
}

impl<T: TerrainClassifier + ?Sized> JumpPlanner<'_, T> {
    /// Take-off speed needed to leap along `direction`, or `None` when no
    /// landing spot is found or the first one found needs too much speed.
    ///
    /// The first landing spot that the take-off line reaches decides the
    /// outcome: if it exceeds the velocity cap the search stops rather than
    /// trying farther spots.
    #[must_use]
    pub fn solve_jump_velocity(&self, position: DVec3, width: f64, direction: DVec3) -> Option<f64> {
        for (depth, height) in staircase_order(self.settings.staircase_steps) {
            let reach = self.settings.landing_offset + f64::from(depth);
            let landing = position + direction * reach;
            let column = BlockCoordinate::containing(landing);

            let Some(ground) = self.find_ground(column, height) else {
                continue;
            };
            let walkable = column.with_y(ground);
            let Some(distance) = self.jump_distance(walkable, position, landing, ground) else {
                trace!("landing {walkable:?} not reached by take-off line");
                continue;
            };

            let length = distance - width * 0.5;
            let rise = f64::from(ground) - position.y;
            let raw = self.settings.physics.required_speed(length, rise);
            trace!("landing {walkable:?}: length {length:.3}, rise {rise:.1}, speed {raw:.3}");
            return self.settings.clamp_speed(raw);
        }
        None
    }

    /// Ground height under the first walkable cell found in `column`,
    /// scanning from `height` blocks below it up to one block above.
    ///
    /// The returned height is that of the supporting block, one below the
    /// walkable cell.
    #[must_use]
    pub fn find_ground(&self, column: BlockCoordinate, height: i32) -> Option<i32> {
        (-height..=1)
            .find(|&offset| self.terrain.classify(column.up(offset)) == TerrainNodeKind::Walkable)
            .map(|offset| column.y + offset - 1)
    }

    /// Distance from `position` to where the take-off line meets the block
    /// under `walkable`.
    ///
    /// The block's shape (a full block when it reports none) is lifted to the
    /// actor's feet level and the line is traced half a block below both
    /// `position` and `landing`.
    #[must_use]
    pub fn jump_distance(
        &self,
        walkable: BlockCoordinate,
        position: DVec3,
        landing: DVec3,
        ground: i32,
    ) -> Option<f64> {
        let solid = walkable.down(1);
        let shape = self.terrain.solid_geometry(solid).unwrap_or(Aabb::UNIT);
        let lift = position.y - f64::from(ground);
        let placed = shape.translated(solid.origin() + DVec3::new(0.0, lift, 0.0));

        let drop = DVec3::new(0.0, TRACE_DROP, 0.0);
        placed
            .trace_segment(position - drop, landing - drop)
            .map(|hit| hit.distance(position))
    }
}
