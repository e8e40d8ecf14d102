//! In-memory voxel terrain.
//!
//! `GridTerrain` stores solid blocks and hazards sparsely and derives node
//! kinds the way a host pathfinder would: air resting on a solid block is
//! walkable, other air is open. Explicit overrides win over the derived kind,
//! which lets fixtures express host quirks such as walkable ledges over lava.

use hashbrown::HashMap;
use log::trace;

use super::{BlockCoordinate, HazardKind, TerrainClassifier, TerrainNodeKind};
use crate::geometry::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Voxel {
    Solid(Aabb),
    Hazard(HazardKind),
}

/// Sparse voxel world implementing [`TerrainClassifier`].
#[derive(Debug, Clone, Default)]
pub struct GridTerrain {
    voxels: HashMap<BlockCoordinate, Voxel>,
    overrides: HashMap<BlockCoordinate, TerrainNodeKind>,
}

impl GridTerrain {
    /// Creates an empty world: every cell is open air.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the inclusive box between `a` and `b` with full blocks.
    pub fn fill(&mut self, a: BlockCoordinate, b: BlockCoordinate) -> &mut Self {
        for cell in cells_between(a, b) {
            self.voxels.insert(cell, Voxel::Solid(Aabb::UNIT));
        }
        self
    }

    /// Removes blocks and hazards in the inclusive box between `a` and `b`.
    pub fn clear(&mut self, a: BlockCoordinate, b: BlockCoordinate) -> &mut Self {
        for cell in cells_between(a, b) {
            self.voxels.remove(&cell);
        }
        self
    }

    /// Places a solid block with a custom block-local collision shape.
    ///
    /// An empty shape still occupies the cell but reports no geometry.
    pub fn set_shape(&mut self, cell: BlockCoordinate, shape: Aabb) -> &mut Self {
        self.voxels.insert(cell, Voxel::Solid(shape));
        self
    }

    /// Places a hazard, replacing whatever occupied the cell.
    pub fn place_hazard(&mut self, cell: BlockCoordinate, kind: HazardKind) -> &mut Self {
        self.voxels.insert(cell, Voxel::Hazard(kind));
        self
    }

    /// Forces the classification of a single cell.
    pub fn override_kind(&mut self, cell: BlockCoordinate, kind: TerrainNodeKind) -> &mut Self {
        self.overrides.insert(cell, kind);
        self
    }

    /// Whether a solid block occupies `cell`.
    #[must_use]
    pub fn is_solid(&self, cell: BlockCoordinate) -> bool {
        matches!(self.voxels.get(&cell), Some(Voxel::Solid(_)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Whether the world holds no blocks or hazards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}

impl TerrainClassifier for GridTerrain {
    fn classify(&self, cell: BlockCoordinate) -> TerrainNodeKind {
        if let Some(kind) = self.overrides.get(&cell) {
            return *kind;
        }
        let kind = match self.voxels.get(&cell) {
            Some(Voxel::Solid(_)) => TerrainNodeKind::Blocked,
            Some(Voxel::Hazard(hazard)) => TerrainNodeKind::Hazard(*hazard),
            None if self.is_solid(cell.down(1)) => TerrainNodeKind::Walkable,
            None => TerrainNodeKind::Open,
        };
        trace!("classified {cell:?} as {kind:?}");
        kind
    }

    fn solid_geometry(&self, cell: BlockCoordinate) -> Option<Aabb> {
        match self.voxels.get(&cell) {
            Some(Voxel::Solid(shape)) if !shape.is_empty() => Some(*shape),
            _ => None,
        }
    }
}

fn cells_between(a: BlockCoordinate, b: BlockCoordinate) -> impl Iterator<Item = BlockCoordinate> {
    let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
    let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
    let (z0, z1) = (a.z.min(b.z), a.z.max(b.z));
    (x0..=x1).flat_map(move |x| {
        (y0..=y1).flat_map(move |y| (z0..=z1).map(move |z| BlockCoordinate::new(x, y, z)))
    })
}
