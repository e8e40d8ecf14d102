//! Path-follow collaborator.
//!
//! The goal only peeks at the host's current path to decide whether ordinary
//! locomotion already has a safe route, and cancels path following once it
//! commits to a leap.

use serde::{Deserialize, Serialize};

use crate::terrain::{BlockCoordinate, TerrainNodeKind};

/// A single waypoint of a computed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    /// Lattice cell of the waypoint.
    pub cell: BlockCoordinate,
    /// How the pathfinder classified the cell.
    pub kind: TerrainNodeKind,
}

/// A path produced by the host's pathfinder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Path {
    /// Waypoints from the actor towards the target.
    pub nodes: Vec<PathNode>,
    /// Whether the final node is the target itself rather than the closest
    /// reachable cell.
    pub reaches_target: bool,
}

impl Path {
    /// Creates a path from its waypoints.
    #[must_use]
    pub const fn new(nodes: Vec<PathNode>, reaches_target: bool) -> Self {
        Self {
            nodes,
            reaches_target,
        }
    }

    /// Whether any waypoint crosses a hazard.
    #[must_use]
    pub fn crosses_danger(&self) -> bool {
        self.nodes.iter().any(|node| node.kind.is_danger())
    }

    /// A path that reaches the target without touching a hazard.
    #[must_use]
    pub fn is_safe_route(&self) -> bool {
        self.reaches_target && !self.crosses_danger()
    }
}

/// Host navigation queried and controlled by the goal.
pub trait Navigation {
    /// The path currently assigned to the actor.
    fn current_path(&self) -> Option<&Path>;
    /// Whether the actor is actively following its path.
    fn is_following(&self) -> bool;
    /// Cancels path following.
    fn stop(&mut self);
}

/// Whether navigation is already carrying the actor safely to its target.
#[must_use]
pub fn follows_safe_route<N: Navigation + ?Sized>(navigation: &N) -> bool {
    navigation.is_following()
        && navigation
            .current_path()
            .is_some_and(Path::is_safe_route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::HazardKind;
    use rstest::rstest;

    struct Following(Option<Path>, bool);

    impl Navigation for Following {
        fn current_path(&self) -> Option<&Path> {
            self.0.as_ref()
        }

        fn is_following(&self) -> bool {
            self.1
        }

        fn stop(&mut self) {
            self.1 = false;
        }
    }

    const fn node(x: i32, kind: TerrainNodeKind) -> PathNode {
        PathNode {
            cell: BlockCoordinate::new(x, 64, 0),
            kind,
        }
    }

    fn walk(reaches: bool, hazard: bool) -> Path {
        let middle = if hazard {
            TerrainNodeKind::Hazard(HazardKind::Lava)
        } else {
            TerrainNodeKind::Walkable
        };
        Path::new(
            vec![
                node(0, TerrainNodeKind::Walkable),
                node(1, middle),
                node(2, TerrainNodeKind::Walkable),
            ],
            reaches,
        )
    }

    #[rstest]
    #[case::safe(Some(walk(true, false)), true, true)]
    #[case::not_following(Some(walk(true, false)), false, false)]
    #[case::partial(Some(walk(false, false)), true, false)]
    #[case::hazardous(Some(walk(true, true)), true, false)]
    #[case::no_path(None, true, false)]
    fn safe_route_detection(
        #[case] path: Option<Path>,
        #[case] following: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(follows_safe_route(&Following(path, following)), expected);
    }
}
