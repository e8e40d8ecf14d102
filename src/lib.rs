#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gap-jumping movement AI for tick-driven mobs.
//!
//! Once per tick a [`JumpToTargetGoal`] looks along the direction of its
//! actor's pursuit target, scans for trenches and hazards, searches a
//! staircase of landing spots and, when a landing is reachable under the
//! actor's velocity cap, hands a [`JumpCommand`] to the host's locomotion.
//! Terrain, navigation and locomotion are injected through traits so the
//! logic runs against any host; [`plugin`] wires it into Bevy.
pub mod actor;
pub mod constants;
pub mod geometry;
pub mod jump;
pub mod locomotion;
pub mod logging;
pub mod navigation;
pub mod numeric;
pub mod plugin;
pub mod scenario;
pub mod sync;
pub mod terrain;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use actor::ActorState;
pub use geometry::Aabb;
pub use jump::{
    GoalControl, GoalPhase, JumpCommand, JumpPhysics, JumpPlanner, JumpSettings,
    JumpToTargetGoal, SettingsError,
};
pub use locomotion::{leap_impulse, ImpulseLocomotion, Locomotion};
pub use logging::init as init_logging;
pub use navigation::{Navigation, Path, PathNode};
pub use plugin::{JumpToTargetPlugin, LeapTerrain};
pub use scenario::{Scenario, ScenarioError, ScenarioOutcome};
pub use sync::{SyncError, VelocitySink, VelocitySync};
pub use terrain::{BlockCoordinate, GridTerrain, HazardKind, TerrainClassifier, TerrainNodeKind};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use lunge::prelude::*;
    //! ```

    pub use crate::ActorState;
    pub use crate::BlockCoordinate;
    pub use crate::GridTerrain;
    pub use crate::JumpCommand;
    pub use crate::JumpSettings;
    pub use crate::JumpToTargetGoal;
    pub use crate::Navigation;
    pub use crate::TerrainClassifier;
    pub use glam::DVec3;
}
