//! Navigation double.

use lunge::{BlockCoordinate, Navigation, Path, PathNode, TerrainNodeKind};

/// Records how often path following was cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubNavigation {
    pub path: Option<Path>,
    pub following: bool,
    pub stops: usize,
}

impl StubNavigation {
    /// Following a path that reaches the target over walkable ground.
    pub fn on_safe_path() -> Self {
        Self::following(straight_path(&[]))
    }

    /// Following a path that crosses the given hazard cells.
    pub fn on_path_through(hazards: &[BlockCoordinate]) -> Self {
        Self::following(straight_path(hazards))
    }

    fn following(path: Path) -> Self {
        Self {
            path: Some(path),
            following: true,
            stops: 0,
        }
    }
}

fn straight_path(hazards: &[BlockCoordinate]) -> Path {
    let nodes = (1..=10)
        .map(|x| {
            let cell = BlockCoordinate::new(x, 64, 0);
            let kind = if hazards.contains(&cell) {
                TerrainNodeKind::Hazard(lunge::HazardKind::Lava)
            } else {
                TerrainNodeKind::Walkable
            };
            PathNode { cell, kind }
        })
        .collect();
    Path::new(nodes, true)
}

impl Navigation for StubNavigation {
    fn current_path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    fn is_following(&self) -> bool {
        self.following
    }

    fn stop(&mut self) {
        self.following = false;
        self.stops += 1;
    }
}
