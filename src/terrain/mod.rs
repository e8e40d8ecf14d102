//! Terrain vocabulary and the read-only query capability the jump planner
//! depends on.
//!
//! The host engine owns the world; the planner only ever sees it through
//! [`TerrainClassifier`], which maps lattice cells to locomotion-relevant
//! node kinds and reports the collision shape of a cell.

mod grid;

pub use grid::GridTerrain;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;
use crate::numeric::floor_to_i32;

/// Discrete block lattice coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockCoordinate {
    /// East-west index.
    pub x: i32,
    /// Height.
    pub y: i32,
    /// North-south index.
    pub z: i32,
}

impl From<(i32, i32, i32)> for BlockCoordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl BlockCoordinate {
    /// Creates a coordinate from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the cell containing `position`, flooring each component.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use lunge::terrain::BlockCoordinate;
    /// let cell = BlockCoordinate::containing(DVec3::new(1.3, 64.0, -0.2));
    /// assert_eq!(cell, BlockCoordinate::new(1, 64, -1));
    /// ```
    #[must_use]
    pub fn containing(position: DVec3) -> Self {
        Self {
            x: floor_to_i32(position.x),
            y: floor_to_i32(position.y),
            z: floor_to_i32(position.z),
        }
    }

    /// The cell `n` blocks above; negative `n` moves down.
    #[must_use]
    pub const fn up(self, n: i32) -> Self {
        Self {
            y: self.y.saturating_add(n),
            ..self
        }
    }

    /// The cell `n` blocks below; negative `n` moves up.
    #[must_use]
    pub const fn down(self, n: i32) -> Self {
        Self {
            y: self.y.saturating_sub(n),
            ..self
        }
    }

    /// The same column at an absolute height.
    #[must_use]
    pub const fn with_y(self, y: i32) -> Self {
        Self { y, ..self }
    }

    /// World-space position of the cell's minimum corner.
    #[must_use]
    pub fn origin(self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

/// Damaging terrain variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    /// Standing inside a burning block.
    Fire,
    /// Standing in lava.
    Lava,
    /// Submerged.
    Water,
    /// Next to a burning block.
    DangerFire,
    /// Next to any other damaging block.
    DangerOther,
}

/// Classification of a lattice cell relevant to locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainNodeKind {
    /// Passable with nothing underneath.
    Open,
    /// Passable and supported from below.
    Walkable,
    /// Solid.
    Blocked,
    /// Damaging to stand in or next to.
    Hazard(HazardKind),
    /// Anything the classifier does not map to the kinds above.
    Other,
}

impl TerrainNodeKind {
    /// Whether the node is one of the hazard variants.
    #[must_use]
    pub const fn is_danger(self) -> bool {
        matches!(self, Self::Hazard(_))
    }
}

/// Read-only terrain queries consumed by the jump planner.
///
/// Implementations must be deterministic for the duration of a tick.
pub trait TerrainClassifier {
    /// Classifies a single lattice cell.
    fn classify(&self, cell: BlockCoordinate) -> TerrainNodeKind;

    /// Collision shape of the block at `cell` in block-local coordinates
    /// (`[0, 1]` on every axis for a full block). `None` means the block has
    /// no collision geometry.
    fn solid_geometry(&self, cell: BlockCoordinate) -> Option<Aabb>;
}

impl<T: TerrainClassifier + ?Sized> TerrainClassifier for &T {
    fn classify(&self, cell: BlockCoordinate) -> TerrainNodeKind {
        (**self).classify(cell)
    }

    fn solid_geometry(&self, cell: BlockCoordinate) -> Option<Aabb> {
        (**self).solid_geometry(cell)
    }
}

impl<T: TerrainClassifier + ?Sized> TerrainClassifier for Box<T> {
    fn classify(&self, cell: BlockCoordinate) -> TerrainNodeKind {
        (**self).classify(cell)
    }

    fn solid_geometry(&self, cell: BlockCoordinate) -> Option<Aabb> {
        (**self).solid_geometry(cell)
    }
}
