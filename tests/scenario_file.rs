//! Loads the bundled demo scenario the way the CLI does.

use std::path::PathBuf;

use anyhow::{Context, Result};
use lunge::{Scenario, ScenarioError};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

#[test]
fn gap_demo_leaps_once_target_is_acquired() -> Result<()> {
    let scenario = Scenario::load(&demo("gap.json")).context("loading gap demo")?;
    assert_eq!(scenario.tick_budget(None), 10);

    let outcome = scenario.run(scenario.tick_budget(None))?;
    assert_eq!(outcome.leap_tick, Some(6));
    let command = outcome.command.context("leap should be recorded")?;
    assert!(command.horizontal_speed < scenario.settings.max_jump_velocity);
    assert!(outcome.velocity.y > 0.0);
    assert!(!outcome.following);
    Ok(())
}

#[test]
fn outcome_serialises_for_the_cli() -> Result<()> {
    let scenario = Scenario::load(&demo("gap.json"))?;
    let json = serde_json::to_value(scenario.run(3)?)?;
    assert_eq!(json["ticks"], 3);
    assert!(json["leap_tick"].is_null());
    Ok(())
}

#[test]
fn missing_demo_is_an_io_error() {
    let err = Scenario::load(&demo("absent.json"));
    assert!(matches!(err, Err(ScenarioError::Io { .. })));
}
