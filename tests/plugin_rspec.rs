//! Behaviour tests for `JumpToTargetPlugin` using rust-rspec.
//!
//! A zombie chases a target across a trench. The plugin runs the goal once
//! per frame and adds the leap impulse to the zombie's velocity.

#[path = "support/thread_safe_app.rs"]
mod thread_safe_app;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy_transform::components::Transform;
use glam::DVec3;
use lunge::plugin::{JumpToTarget, LeapBody, LeapVelocity, PathFollow, Pursuit};
use lunge::{JumpSettings, JumpToTargetGoal, JumpToTargetPlugin, LeapTerrain};
use rspec_runner::run_serial;
use test_utils::trench;
use thread_safe_app::{lock_app, SharedApp, ThreadSafeApp};

#[derive(Debug, Clone)]
struct ChaseWorld {
    app: SharedApp,
    zombie: Option<Entity>,
}

impl ChaseWorld {
    fn bootstrap(with_terrain: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(JumpToTargetPlugin);
        if with_terrain {
            app.insert_resource(LeapTerrain::new(trench(2)));
        }
        Self {
            app: Arc::new(Mutex::new(ThreadSafeApp(app))),
            zombie: None,
        }
    }

    fn spawn(&mut self) {
        if self.zombie.is_some() {
            return;
        }
        let mut app = lock_app(&self.app);
        let world = app.0.world_mut();
        let target = world.spawn(Transform::from_xyz(10.5, 64.0, 0.5)).id();
        let zombie = world
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
                PathFollow::default(),
                LeapVelocity::default(),
            ))
            .id();
        self.zombie = Some(zombie);
    }

    fn frames(&self, count: usize) {
        let mut app = lock_app(&self.app);
        for _ in 0..count {
            app.0.update();
        }
    }

    fn velocity(&self) -> DVec3 {
        let app = lock_app(&self.app);
        let zombie = self.zombie.expect("zombie not spawned");
        app.0
            .world()
            .get::<LeapVelocity>(zombie)
            .expect("missing LeapVelocity")
            .0
    }
}

#[test]
fn zombie_leaps_across_trench() {
    run_serial(&rspec::given(
        "a zombie chasing a target across a trench",
        ChaseWorld::bootstrap(true),
        |scenario| {
            scenario.before_each(ChaseWorld::spawn);
            scenario.when("the target has been visible for five frames", |ctx| {
                ctx.before_each(|world| world.frames(5));
                ctx.then("the zombie has not moved yet", |world| {
                    assert_eq!(world.velocity(), DVec3::ZERO);
                });
            });
        },
    ));
}

#[test]
fn zombie_leaps_on_sixth_frame() {
    run_serial(&rspec::given(
        "a zombie chasing a target across a trench",
        ChaseWorld::bootstrap(true),
        |scenario| {
            scenario.before_each(ChaseWorld::spawn);
            scenario.when("six frames have run", |ctx| {
                ctx.before_each(|world| world.frames(6));
                ctx.then("the zombie leaps forwards and upwards", |world| {
                    let velocity = world.velocity();
                    assert!(velocity.x > 0.0);
                    assert!(velocity.y > 0.0);
                    assert!(velocity.y <= 0.6);
                });
            });
        },
    ));
}

#[test]
fn zombie_waits_without_terrain() {
    run_serial(&rspec::given(
        "a zombie in a world without terrain",
        ChaseWorld::bootstrap(false),
        |scenario| {
            scenario.before_each(ChaseWorld::spawn);
            scenario.when("many frames run", |ctx| {
                ctx.before_each(|world| world.frames(10));
                ctx.then("the zombie stays put", |world| {
                    assert_eq!(world.velocity(), DVec3::ZERO);
                });
            });
        },
    ));
}
