//! Attack scenario loader and runner.
//!
//! A scenario places one aircraft of a catalog unit type against a target and
//! lists the aircraft's state on successive ticks. Running it feeds each frame
//! through the follow-and-attack engine with a persistent activity queue.

use std::path::Path;

use air_core::{
    ActivityStack, Armament, ArmamentEligibility, AttackFollow, AttackIntent, EntityId, Facing,
    FollowOutcome, MapOracle, Target, UnitState, WPos,
};
use serde::{Deserialize, Serialize};

use crate::catalog::UnitCatalog;
use crate::loaders::{LoadResult, read_file};

/// Aircraft state on one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFrame {
    pub position: WPos,
    pub facing: Facing,
    /// All armaments are reloading on this tick.
    #[serde(default)]
    pub reloading: bool,
    /// The running attack maneuver finishes before this tick is evaluated.
    #[serde(default)]
    pub maneuver_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub unit_type: String,
    #[serde(default)]
    pub unit_id: EntityId,
    pub target: Target,
    #[serde(default)]
    pub intent: Option<AttackIntent>,
    #[serde(default = "default_armaments")]
    pub armaments: Vec<Armament>,
    pub frames: Vec<ScenarioFrame>,
}

fn default_armaments() -> Vec<Armament> {
    vec![Armament::new("primary")]
}

/// Result of evaluating one scenario frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub tick: usize,
    pub unit: UnitState,
    pub outcome: FollowOutcome,
}

impl Scenario {
    /// Runs every frame in order.
    ///
    /// # Errors
    ///
    /// Fails if the scenario names a unit type missing from `catalog`.
    pub fn run(&self, catalog: &UnitCatalog, map: &dyn MapOracle) -> LoadResult<Vec<FrameReport>> {
        let unit_type = catalog
            .get(&self.unit_type)
            .ok_or_else(|| anyhow::anyhow!("Unknown unit type '{}'", self.unit_type))?;
        let intent = self.intent.unwrap_or_default();

        let mut queue = ActivityStack::new();
        let mut reports = Vec::with_capacity(self.frames.len());

        for (tick, frame) in self.frames.iter().enumerate() {
            if frame.maneuver_complete {
                queue.complete_current();
            }

            let armaments = self
                .armaments
                .iter()
                .cloned()
                .map(|a| if frame.reloading { a.reloading(1) } else { a })
                .collect();
            let aircraft = unit_type.attack_controller(ArmamentEligibility::new(armaments));
            let follow = AttackFollow::new(&aircraft, &aircraft).with_intent(intent);

            let unit = UnitState::new(self.unit_id, frame.position, frame.facing);
            let outcome = follow.tick(&unit, &self.target, map, &mut queue);
            tracing::debug!(tick, ?outcome, "scenario frame evaluated");

            reports.push(FrameReport {
                tick,
                unit,
                outcome,
            });
        }

        Ok(reports)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load scenario from {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.frames.is_empty() {
            anyhow::bail!("Scenario for '{}' has no frames", scenario.unit_type);
        }

        Ok(scenario)
    }
}
