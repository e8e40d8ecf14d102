//! JSON scenarios for tuning the jump goal outside a host engine.
//!
//! A scenario describes a small voxel world, one actor and its settings.
//! [`Scenario::run`] polls the goal once per tick, exactly as a host
//! scheduler would, until it leaps or the tick budget runs out.

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use glam::DVec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::actor::ActorState;
use crate::geometry::Aabb;
use crate::jump::{JumpCommand, JumpSettings, JumpToTargetGoal, SettingsError};
use crate::locomotion::{ImpulseLocomotion, Locomotion};
use crate::plugin::PathFollow;
use crate::terrain::{BlockCoordinate, GridTerrain, HazardKind, TerrainNodeKind};

/// Ticks simulated when a scenario does not say otherwise.
pub const DEFAULT_TICKS: u32 = 20;

/// Failures while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The JSON did not describe a scenario.
    #[error("malformed scenario")]
    Parse(#[from] serde_json::Error),
    /// The settings failed validation.
    #[error("invalid jump settings")]
    Settings(#[from] SettingsError),
}

/// Inclusive box of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// One corner.
    pub from: BlockCoordinate,
    /// The opposite corner.
    pub to: BlockCoordinate,
}

/// A hazard placed in a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardCell {
    /// Where the hazard sits.
    pub cell: BlockCoordinate,
    /// What it is.
    pub kind: HazardKind,
}

/// A forced classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideCell {
    /// Cell whose classification is replaced.
    pub cell: BlockCoordinate,
    /// Classification reported instead.
    pub kind: TerrainNodeKind,
}

/// A solid block with a custom block-local shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeCell {
    /// Cell holding the block.
    pub cell: BlockCoordinate,
    /// Block-local collision box.
    pub shape: Aabb,
}

/// Terrain edits, applied in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSpec {
    /// Regions filled with full blocks.
    pub fill: Vec<Region>,
    /// Regions emptied afterwards.
    pub clear: Vec<Region>,
    /// Blocks with custom shapes.
    pub shapes: Vec<ShapeCell>,
    /// Hazard cells.
    pub hazards: Vec<HazardCell>,
    /// Forced classifications.
    pub overrides: Vec<OverrideCell>,
}

impl TerrainSpec {
    /// Builds the world described by the edits.
    #[must_use]
    pub fn build(&self) -> GridTerrain {
        let mut terrain = GridTerrain::new();
        for region in &self.fill {
            terrain.fill(region.from, region.to);
        }
        for region in &self.clear {
            terrain.clear(region.from, region.to);
        }
        for shaped in &self.shapes {
            terrain.set_shape(shaped.cell, shaped.shape);
        }
        for hazard in &self.hazards {
            terrain.place_hazard(hazard.cell, hazard.kind);
        }
        for forced in &self.overrides {
            terrain.override_kind(forced.cell, forced.kind);
        }
        terrain
    }
}

/// Navigation state the actor starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSpec {
    /// Path the actor was given, if any.
    pub path: Option<crate::navigation::Path>,
    /// Whether the actor is walking that path.
    pub following: bool,
}

/// A complete tuning scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Goal configuration.
    pub settings: JumpSettings,
    /// World edits.
    #[serde(default)]
    pub terrain: TerrainSpec,
    /// The actor as seen on every tick.
    pub actor: ActorState,
    /// Starting navigation state.
    #[serde(default)]
    pub navigation: NavigationSpec,
    /// Tick budget stored with the scenario.
    #[serde(default)]
    pub ticks: Option<u32>,
}

/// What happened when a scenario ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    /// Ticks polled, including the one that leapt.
    pub ticks: u32,
    /// 1-based tick of the leap, if one happened.
    pub leap_tick: Option<u32>,
    /// The leap handed to locomotion.
    pub command: Option<JumpCommand>,
    /// Actor velocity after the run.
    pub velocity: DVec3,
    /// Whether path following was still active at the end.
    pub following: bool,
}

/// Locomotion that remembers the command it was handed.
struct Recording<'a> {
    inner: ImpulseLocomotion<'a>,
    command: Option<JumpCommand>,
}

impl Locomotion for Recording<'_> {
    fn leap(&mut self, actor: &ActorState, command: &JumpCommand) {
        self.command = Some(*command);
        self.inner.leap(actor, command);
    }
}

impl Scenario {
    /// Parses and validates a scenario.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Parse`] for malformed JSON and
    /// [`ScenarioError::Settings`] when the settings do not validate.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.settings.validate()?;
        Ok(scenario)
    }

    /// Reads a scenario file.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Io`] when the file cannot be read, otherwise
    /// as [`Self::from_json`].
    pub fn load(path: &FsPath) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded scenario {}", path.display());
        Self::from_json(&json)
    }

    /// Tick budget: `override_ticks`, then the scenario's own, then
    /// [`DEFAULT_TICKS`].
    #[must_use]
    pub fn tick_budget(&self, override_ticks: Option<u32>) -> u32 {
        override_ticks.or(self.ticks).unwrap_or(DEFAULT_TICKS)
    }

    /// Polls the goal until it leaps or `ticks` start checks have run.
    ///
    /// # Errors
    /// Returns [`ScenarioError::Settings`] when the settings were edited into
    /// an invalid state after loading.
    pub fn run(&self, ticks: u32) -> Result<ScenarioOutcome, ScenarioError> {
        let terrain = self.terrain.build();
        let mut goal = JumpToTargetGoal::new(self.settings.clone())?;
        let mut navigation = PathFollow {
            path: self.navigation.path.clone(),
            following: self.navigation.following,
        };
        let mut velocity = self.actor.velocity;
        let mut outcome = ScenarioOutcome {
            ticks: 0,
            leap_tick: None,
            command: None,
            velocity,
            following: navigation.following,
        };

        for tick in 1..=ticks {
            outcome.ticks = tick;
            let actor = ActorState {
                velocity,
                ..self.actor
            };
            let mut locomotion = Recording {
                inner: ImpulseLocomotion::new(&mut velocity),
                command: None,
            };
            if goal.can_start(&actor, &terrain, &mut navigation, &mut locomotion) {
                outcome.command = locomotion.command;
                outcome.leap_tick = Some(tick);
                goal.stop();
                break;
            }
            debug!("tick {tick}: no jump");
        }

        outcome.velocity = velocity;
        outcome.following = navigation.following;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const TRENCH: &str = r#"{
        "settings": { "max_jump_velocity": 1.0 },
        "terrain": {
            "fill": [{ "from": { "x": -10, "y": 55, "z": -10 }, "to": { "x": 12, "y": 63, "z": 10 } }],
            "clear": [{ "from": { "x": 1, "y": 62, "z": -10 }, "to": { "x": 2, "y": 63, "z": 10 } }]
        },
        "actor": {
            "position": [0.3, 64.0, 0.5],
            "width": 0.6,
            "on_ground": true,
            "target": [10.3, 64.0, 0.5]
        },
        "navigation": { "following": true }
    }"#;

    #[test]
    fn trench_scenario_leaps_after_delay() {
        let scenario = Scenario::from_json(TRENCH).expect("scenario should parse");
        let outcome = scenario
            .run(scenario.tick_budget(None))
            .expect("scenario should run");
        assert_eq!(outcome.leap_tick, Some(6));
        assert_eq!(outcome.ticks, 6);
        let command = outcome.command.expect("leap should be recorded");
        assert_relative_eq!(command.angle_offset, 0.0);
        assert_relative_eq!(outcome.velocity.x, command.horizontal_speed, epsilon = 1e-12);
        assert_relative_eq!(outcome.velocity.y, command.vertical_speed);
        assert!(!outcome.following);
    }

    #[test]
    fn short_budget_ends_without_leap() {
        let scenario = Scenario::from_json(TRENCH).expect("scenario should parse");
        let outcome = scenario.run(5).expect("scenario should run");
        assert_eq!(outcome.leap_tick, None);
        assert_eq!(outcome.command, None);
        assert_eq!(outcome.velocity, DVec3::ZERO);
        assert!(outcome.following);
    }

    #[rstest]
    #[case::flag(Some(3), Some(9), 3)]
    #[case::file(None, Some(9), 9)]
    #[case::fallback(None, None, DEFAULT_TICKS)]
    fn tick_budget_precedence(
        #[case] flag: Option<u32>,
        #[case] file: Option<u32>,
        #[case] expected: u32,
    ) {
        let mut scenario = Scenario::from_json(TRENCH).expect("scenario should parse");
        scenario.ticks = file;
        assert_eq!(scenario.tick_budget(flag), expected);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let json = TRENCH.replace(
            r#""max_jump_velocity": 1.0"#,
            r#""max_jump_velocity": 1.0, "min_gap_size": 0"#,
        );
        assert!(matches!(
            Scenario::from_json(&json),
            Err(ScenarioError::Settings(SettingsError::GapTooShallow(0)))
        ));
    }

    #[test]
    fn edited_settings_are_checked_before_running() {
        let mut scenario = Scenario::from_json(TRENCH).expect("scenario should parse");
        scenario.settings.min_gap_size = i32::MIN;
        assert!(matches!(
            scenario.run(10),
            Err(ScenarioError::Settings(SettingsError::GapTooShallow(i32::MIN)))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Scenario::from_json("{"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = FsPath::new("/nonexistent/lunge/scenario.json");
        let err = Scenario::load(path).expect_err("missing file should fail");
        assert!(err.to_string().contains("scenario.json"));
    }

    #[test]
    fn terrain_edits_apply_in_order() {
        let layout = TerrainSpec {
            fill: vec![Region {
                from: BlockCoordinate::new(0, 60, 0),
                to: BlockCoordinate::new(0, 63, 0),
            }],
            clear: vec![Region {
                from: BlockCoordinate::new(0, 63, 0),
                to: BlockCoordinate::new(0, 63, 0),
            }],
            hazards: vec![HazardCell {
                cell: BlockCoordinate::new(0, 63, 0),
                kind: HazardKind::Lava,
            }],
            overrides: vec![OverrideCell {
                cell: BlockCoordinate::new(0, 64, 0),
                kind: TerrainNodeKind::Walkable,
            }],
            ..TerrainSpec::default()
        };
        let terrain = layout.build();
        assert!(terrain.is_solid(BlockCoordinate::new(0, 62, 0)));
        assert!(!terrain.is_solid(BlockCoordinate::new(0, 63, 0)));
        assert_eq!(terrain.len(), 4);
    }
}
