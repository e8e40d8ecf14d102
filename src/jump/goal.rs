//! The jump-to-target goal polled by the host scheduler.

use log::debug;

use super::{JumpCommand, JumpPlanner, JumpSettings, SettingsError};
use crate::actor::ActorState;
use crate::locomotion::Locomotion;
use crate::navigation::{follows_safe_route, Navigation};
use crate::terrain::TerrainClassifier;
use crate::vector_math::horizontal_direction;

/// Lifecycle of the goal within the host's polling contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalPhase {
    /// Waiting for the next start check.
    #[default]
    Idle,
    /// A start check is running.
    Evaluating,
    /// A leap was issued; the host should stop the goal.
    Committed,
}

/// Control channels a goal can claim from the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalControl {
    /// Horizontal movement.
    Move,
    /// Head rotation.
    Look,
    /// The host's own jump input.
    Jump,
    /// Target selection.
    Target,
}

/// Per-actor jump-to-target goal.
///
/// Detects gaps and hazards roughly in the direction of the actor's target
/// and leaps over them. Holds a single counter of consecutive ticks with a
/// target; all terrain reasoning is delegated to [`JumpPlanner`].
#[derive(Debug, Clone, PartialEq)]
pub struct JumpToTargetGoal {
    settings: JumpSettings,
    ticks_with_target: u32,
    phase: GoalPhase,
}

impl JumpToTargetGoal {
    /// Creates an idle goal.
    ///
    /// # Errors
    /// Returns the [`SettingsError`] reported by [`JumpSettings::validate`].
    pub fn new(settings: JumpSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ticks_with_target: 0,
            phase: GoalPhase::Idle,
        })
    }

    /// Settings the goal was created with.
    #[must_use]
    pub const fn settings(&self) -> &JumpSettings {
        &self.settings
    }

    /// Consecutive start checks during which the actor had a target.
    #[must_use]
    pub const fn ticks_with_target(&self) -> u32 {
        self.ticks_with_target
    }

    /// Where the goal stands in the polling contract.
    #[must_use]
    pub const fn phase(&self) -> GoalPhase {
        self.phase
    }

    /// Control channels claimed while the goal runs.
    #[must_use]
    pub const fn controls(&self) -> &'static [GoalControl] {
        &[GoalControl::Move]
    }

    /// Decides whether to jump this tick without acting on the decision.
    ///
    /// Updates the target counter exactly once per call.
    pub fn evaluate<T, N>(
        &mut self,
        actor: &ActorState,
        terrain: &T,
        navigation: &N,
    ) -> Option<JumpCommand>
    where
        T: TerrainClassifier + ?Sized,
        N: Navigation + ?Sized,
    {
        self.ticks_with_target = match actor.target {
            Some(_) => self.ticks_with_target.saturating_add(1),
            None => 0,
        };

        if self.ticks_with_target <= self.settings.target_acquire_delay || !actor.on_ground {
            return None;
        }
        let target = actor.target?;
        if actor.position.distance(target) <= self.settings.min_entity_distance {
            return None;
        }
        if follows_safe_route(navigation) {
            debug!("safe route to target already followed, not jumping");
            return None;
        }

        let direction = horizontal_direction(actor.position, target)?;
        JumpPlanner::new(terrain, &self.settings).plan(actor.position, actor.width, direction)
    }

    /// Start check: evaluates and, on success, cancels path following and
    /// issues the leap.
    pub fn can_start<T, N, L>(
        &mut self,
        actor: &ActorState,
        terrain: &T,
        navigation: &mut N,
        locomotion: &mut L,
    ) -> bool
    where
        T: TerrainClassifier + ?Sized,
        N: Navigation + ?Sized,
        L: Locomotion + ?Sized,
    {
        self.phase = GoalPhase::Evaluating;
        let Some(command) = self.evaluate(actor, terrain, &*navigation) else {
            self.phase = GoalPhase::Idle;
            return false;
        };

        navigation.stop();
        locomotion.leap(actor, &command);
        self.phase = GoalPhase::Committed;
        debug!("leaping towards {:?}", command.target);
        true
    }

    /// The leap is instantaneous, so the goal never asks to keep running.
    #[must_use]
    pub const fn should_continue(&self) -> bool {
        false
    }

    /// Per-tick update while running. Nothing happens mid-leap.
    pub const fn tick(&mut self) {}

    /// Returns the goal to idle.
    pub const fn stop(&mut self) {
        self.phase = GoalPhase::Idle;
    }
}
