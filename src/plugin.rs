//! Bevy adapter running the jump goal for every pursuing entity.
//!
//! Entities opt in by carrying [`JumpToTarget`] together with the body,
//! velocity, pursuit and path components. Terrain comes from the
//! [`LeapTerrain`] resource; without it the system does nothing.

use bevy::prelude::*;
use bevy_transform::components::Transform;
use glam::DVec3;
use log::{debug, warn};

use crate::actor::ActorState;
use crate::jump::JumpToTargetGoal;
use crate::locomotion::ImpulseLocomotion;
use crate::navigation::{Navigation, Path};
use crate::terrain::TerrainClassifier;

/// The goal driving an entity.
#[derive(Component, Debug, Clone)]
pub struct JumpToTarget(pub JumpToTargetGoal);

/// Collision footprint and footing of a leaping entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LeapBody {
    /// Horizontal extent of the collision box.
    pub width: f64,
    /// Whether the entity stands on solid footing.
    pub grounded: bool,
}

/// Velocity the leap impulse is added to, in blocks per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LeapVelocity(pub DVec3);

/// Entity being chased, if any.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pursuit(pub Option<Entity>);

/// Path assigned by the host's pathfinder.
#[derive(Component, Debug, Clone, PartialEq, Eq, Default)]
pub struct PathFollow {
    /// Current path, if one was computed.
    pub path: Option<Path>,
    /// Whether the entity is walking the path.
    pub following: bool,
}

impl Navigation for PathFollow {
    fn current_path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    fn is_following(&self) -> bool {
        self.following
    }

    fn stop(&mut self) {
        self.following = false;
    }
}

/// World terrain queried by the goal.
#[derive(Resource)]
pub struct LeapTerrain(pub Box<dyn TerrainClassifier + Send + Sync>);

impl LeapTerrain {
    /// Boxes `terrain` for insertion as a resource.
    #[must_use]
    pub fn new(terrain: impl TerrainClassifier + Send + Sync + 'static) -> Self {
        Self(Box::new(terrain))
    }
}

type LeapActor = (
    Entity,
    &'static Transform,
    &'static LeapBody,
    &'static Pursuit,
    &'static mut JumpToTarget,
    &'static mut PathFollow,
    &'static mut LeapVelocity,
);

/// Runs one start check per entity and applies any leap.
///
/// A committed goal is ticked while it asks to continue and then stopped,
/// so every frame begins with an idle goal.
pub fn jump_to_target_system(
    terrain: Option<Res<LeapTerrain>>,
    mut warned: Local<bool>,
    targets: Query<&Transform>,
    mut actors: Query<LeapActor>,
) {
    let Some(leap_terrain) = terrain else {
        if !*warned {
            warn!("LeapTerrain resource missing; jump-to-target goals are idle");
            *warned = true;
        }
        return;
    };

    for (entity, transform, body, pursuit, mut goal, mut path, mut velocity) in &mut actors {
        let target = pursuit
            .0
            .and_then(|chased| targets.get(chased).ok())
            .map(|chased| chased.translation.as_dvec3());
        let actor = ActorState {
            position: transform.translation.as_dvec3(),
            width: body.width,
            on_ground: body.grounded,
            target,
            velocity: velocity.0,
        };

        let mut locomotion = ImpulseLocomotion::new(&mut velocity.0);
        if goal
            .0
            .can_start(&actor, &*leap_terrain.0, &mut *path, &mut locomotion)
        {
            debug!("{entity:?} leapt");
            while goal.0.should_continue() {
                goal.0.tick();
            }
            goal.0.stop();
        }
    }
}

/// Registers [`jump_to_target_system`] on `Update`.
#[derive(Default)]
pub struct JumpToTargetPlugin;

impl Plugin for JumpToTargetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, jump_to_target_system);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jump::{GoalPhase, JumpSettings};
    use crate::terrain::{BlockCoordinate, GridTerrain};
    use rstest::{fixture, rstest};

    #[fixture]
    fn trench() -> GridTerrain {
        let mut terrain = GridTerrain::new();
        terrain.fill(BlockCoordinate::new(-10, 55, -10), BlockCoordinate::new(12, 63, 10));
        terrain.clear(BlockCoordinate::new(1, 62, -10), BlockCoordinate::new(2, 63, 10));
        terrain
    }

    fn spawn_chaser(app: &mut App, following: bool) -> Entity {
        let target = app
            .world_mut()
            .spawn(Transform::from_xyz(10.5, 64.0, 0.5))
            .id();
        app.world_mut()
            .spawn((
                Transform::from_xyz(0.25, 64.0, 0.5),
                LeapBody {
                    width: 0.6,
                    grounded: true,
                },
                Pursuit(Some(target)),
                JumpToTarget(
                    JumpToTargetGoal::new(JumpSettings::new(1.0)).expect("valid settings"),
                ),
                PathFollow {
                    path: None,
                    following,
                },
                LeapVelocity::default(),
            ))
            .id()
    }

    fn velocity(app: &App, entity: Entity) -> DVec3 {
        app.world()
            .get::<LeapVelocity>(entity)
            .map(|velocity| velocity.0)
            .unwrap_or_default()
    }

    #[rstest]
    fn leaps_after_acquire_delay(trench: GridTerrain) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(JumpToTargetPlugin);
        app.insert_resource(LeapTerrain::new(trench));
        let chaser = spawn_chaser(&mut app, true);

        for _ in 0..5 {
            app.update();
        }
        assert_eq!(velocity(&app, chaser), DVec3::ZERO);

        app.update();
        let leap = velocity(&app, chaser);
        assert!(leap.x > 0.0);
        assert!(leap.y > 0.0);

        let path = app.world().get::<PathFollow>(chaser).cloned().unwrap_or_default();
        assert!(!path.following);
        let phase = app.world().get::<JumpToTarget>(chaser).map(|goal| goal.0.phase());
        assert_eq!(phase, Some(GoalPhase::Idle));
    }

    #[test]
    fn missing_terrain_leaves_entities_alone() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(JumpToTargetPlugin);
        let chaser = spawn_chaser(&mut app, true);
        for _ in 0..8 {
            app.update();
        }
        assert_eq!(velocity(&app, chaser), DVec3::ZERO);
    }

    #[rstest]
    fn lost_target_never_leaps(trench: GridTerrain) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(JumpToTargetPlugin);
        app.insert_resource(LeapTerrain::new(trench));
        let chaser = spawn_chaser(&mut app, false);
        if let Some(mut pursuit) = app.world_mut().get_mut::<Pursuit>(chaser) {
            pursuit.0 = None;
        }
        for _ in 0..8 {
            app.update();
        }
        assert_eq!(velocity(&app, chaser), DVec3::ZERO);
    }
}
