//! Obstacle detection below a sampled column.

use super::JumpPlanner;
use crate::terrain::{BlockCoordinate, TerrainClassifier, TerrainNodeKind};

impl<T: TerrainClassifier + ?Sized> JumpPlanner<'_, T> {
    /// Whether the column at `cell` needs to be jumped over.
    ///
    /// A column is an obstacle when it is a clean gap (open above, open all
    /// the way down `depth` blocks, and open or walkable at the bottom), or
    /// when it holds a hazard within that span with no walkable cell between
    /// the hazard and the top of the span. A `depth` below one never reports
    /// an obstacle.
    #[must_use]
    pub fn has_obstacle(&self, cell: BlockCoordinate, depth: i32) -> bool {
        if depth < 1 {
            return false;
        }
        let kind_at = |offset: i32| self.terrain.classify(cell.up(offset));
        // Offsets 0, -1, ..., -(depth - 1).
        let span = || (1 - depth..=0).rev();

        let open_in_front = kind_at(1) == TerrainNodeKind::Open;
        let open_at_bottom = matches!(
            kind_at(-depth),
            TerrainNodeKind::Open | TerrainNodeKind::Walkable
        );
        let open_gap = span().all(|offset| kind_at(offset) == TerrainNodeKind::Open);

        if open_in_front && open_at_bottom && open_gap {
            return true;
        }

        span()
            .find(|&offset| kind_at(offset).is_danger())
            .is_some_and(|hazard| {
                !(hazard + 1..=0).any(|offset| kind_at(offset) == TerrainNodeKind::Walkable)
            })
    }
}
