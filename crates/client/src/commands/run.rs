//! Replay an attack scenario and print what the aircraft decided each tick.

use std::path::{Path, PathBuf};

use air_content::{ContentFactory, FrameReport, MapLoader, Scenario, ScenarioLoader, UnitLoader};
use air_core::{FollowOutcome, MapOracle};
use anyhow::{Context, Result};
use clap::Parser;

use crate::config::ClientConfig;

/// Run a scenario through the follow-and-attack engine
#[derive(Parser)]
pub struct Run {
    /// Scenario file, or scenario name under `<data-dir>/scenarios/`
    #[arg(short, long, value_name = "SCENARIO")]
    scenario: String,

    /// Unit catalog (defaults to `<data-dir>/units.ron`)
    #[arg(short, long, value_name = "FILE")]
    units: Option<PathBuf>,

    /// Map description (defaults to `<data-dir>/map.toml`)
    #[arg(short, long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Content directory (overrides AIRSTRIKE_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Evaluate at most this many ticks
    #[arg(short, long, value_name = "N")]
    ticks: Option<usize>,
}

impl Run {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let factory = ContentFactory::new(self.data_dir.unwrap_or_else(|| config.data_dir.clone()));

        let catalog = match &self.units {
            Some(path) => UnitLoader::load(path)?,
            None => factory.load_units()?,
        };
        let map = match &self.map {
            Some(path) => MapLoader::load(path)?,
            None => factory.load_map()?,
        };
        let mut scenario = load_scenario(&factory, &self.scenario)?;

        if let Some(limit) = self.ticks.or(config.max_ticks) {
            scenario.frames.truncate(limit);
        }

        let dims = map.dimensions();
        tracing::info!(
            unit_type = %scenario.unit_type,
            frames = scenario.frames.len(),
            "running scenario on {}x{} map",
            dims.width,
            dims.height
        );

        let reports = scenario
            .run(&catalog, &map)
            .with_context(|| format!("Scenario '{}' failed", self.scenario))?;

        for report in &reports {
            println!("{}", format_report(report));
        }

        let engaging = reports.iter().filter(|r| r.outcome.is_engaging()).count();
        println!("{} of {} ticks engaging", engaging, reports.len());

        Ok(())
    }
}

fn load_scenario(factory: &ContentFactory, scenario: &str) -> Result<Scenario> {
    let path = Path::new(scenario);
    if path.is_file() {
        ScenarioLoader::load(path)
    } else {
        factory.load_scenario(scenario)
    }
}

fn format_report(report: &FrameReport) -> String {
    let outcome = match report.outcome {
        FollowOutcome::NoTarget => "no target".to_string(),
        FollowOutcome::Holding(verdict) => format!("holding: {}", verdict),
        FollowOutcome::Continuing(kind) => format!("continuing {}", kind),
        FollowOutcome::Started(kind) => format!("started {}", kind),
    };

    format!(
        "tick {:>3}  {} at {} facing {}  {}",
        report.tick,
        report.unit.id,
        report.unit.center_position,
        report.unit.facing,
        outcome
    )
}
