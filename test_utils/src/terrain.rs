//! Terrain builders.

use lunge::{BlockCoordinate, GridTerrain, HazardKind, TerrainNodeKind};

/// Height of the topmost ground block.
pub const GROUND_TOP: i32 = 63;

const EXTENT: i32 = 16;

/// Solid ground from `y = 55` up to [`GROUND_TOP`].
pub fn flat_ground() -> GridTerrain {
    let mut terrain = GridTerrain::new();
    terrain.fill(
        BlockCoordinate::new(-EXTENT, 55, -EXTENT),
        BlockCoordinate::new(EXTENT, GROUND_TOP, EXTENT),
    );
    terrain
}

/// Flat ground with a two-block-wide trench at `x = 1..=2`, `depth` blocks
/// deep.
///
/// # Examples
/// ```
/// use lunge::{BlockCoordinate, TerrainClassifier, TerrainNodeKind};
/// let terrain = test_utils::trench(2);
/// let floor = BlockCoordinate::new(1, 62, 0);
/// assert_eq!(terrain.classify(floor), TerrainNodeKind::Walkable);
/// ```
pub fn trench(depth: i32) -> GridTerrain {
    let mut terrain = flat_ground();
    terrain.clear(
        BlockCoordinate::new(1, GROUND_TOP + 1 - depth, -EXTENT),
        BlockCoordinate::new(2, GROUND_TOP, EXTENT),
    );
    terrain
}

/// Flat ground whose top block at `x = 1` is replaced by `kind`.
///
/// With `ledge` set, the cell above each hazard is forced walkable, the way
/// hosts classify a slab bridging a lava channel.
pub fn hazard_strip(kind: HazardKind, ledge: bool) -> GridTerrain {
    let mut terrain = flat_ground();
    for z in -EXTENT..=EXTENT {
        let cell = BlockCoordinate::new(1, GROUND_TOP, z);
        terrain.place_hazard(cell, kind);
        if ledge {
            terrain.override_kind(cell.up(1), TerrainNodeKind::Walkable);
        }
    }
    terrain
}
