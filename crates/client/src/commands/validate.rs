//! Check a unit catalog and list its attack rules.

use std::path::PathBuf;

use air_content::{ContentFactory, UnitLoader};
use anyhow::Result;
use clap::Parser;

use crate::config::ClientConfig;

/// Validate a unit catalog
#[derive(Parser)]
pub struct Validate {
    /// Unit catalog (defaults to `<data-dir>/units.ron`)
    #[arg(short, long, value_name = "FILE")]
    units: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self, config: &ClientConfig) -> Result<()> {
        let catalog = match &self.units {
            Some(path) => UnitLoader::load(path)?,
            None => ContentFactory::new(config.data_dir.clone()).load_units()?,
        };

        for unit in catalog.iter() {
            println!(
                "{:<16} min altitude {:>5}  {:<6} turn delay {:>3}  tolerance {}",
                unit.name,
                unit.flight.min_airborne_altitude,
                if unit.flight.can_hover { "hover" } else { "fixed" },
                unit.tuning.attack_turn_delay,
                unit.tuning.facing_tolerance.value()
            );
        }
        println!("{} unit types valid", catalog.len());

        Ok(())
    }
}
