//! Aircraft unit-type loader.
//!
//! Loads unit definitions from RON files and validates their attack tuning.
//! A single invalid definition aborts the whole load.

use std::path::Path;

use air_core::{AirError, AttackTuning, FlightProfile};
use serde::{Deserialize, Serialize};

use crate::catalog::{UnitCatalog, UnitType};
use crate::loaders::{LoadResult, read_file};

/// Raw attack section of a unit definition, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackSpec {
    pub attack_turn_delay: u32,
    pub facing_tolerance: i32,
}

impl Default for AttackSpec {
    fn default() -> Self {
        let tuning = AttackTuning::default();
        Self {
            attack_turn_delay: tuning.attack_turn_delay,
            facing_tolerance: tuning.facing_tolerance.value(),
        }
    }
}

/// Unit definition as written in the catalog file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitTypeSpec {
    pub flight: FlightProfile,
    pub attack: AttackSpec,
}

/// Loader for unit catalogs from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load a unit catalog from a RON file.
    ///
    /// RON format: `Vec<(String, UnitTypeSpec)>`
    pub fn load(path: &Path) -> LoadResult<UnitCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load units from {}: {}", path.display(), e))?;

        tracing::info!(
            "Loaded {} unit types from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and validate a unit catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<UnitCatalog> {
        let raw_data: Vec<(String, UnitTypeSpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let mut catalog = UnitCatalog::new();
        for (name, spec) in raw_data {
            let AttackSpec {
                attack_turn_delay,
                facing_tolerance,
            } = spec.attack;
            let tuning = AttackTuning::new(attack_turn_delay, facing_tolerance).map_err(|e| {
                anyhow::anyhow!(
                    "Invalid attack rules for unit '{}': {} [{}]",
                    name,
                    e,
                    e.error_code()
                )
            })?;

            if spec.flight.min_airborne_altitude < 0 {
                tracing::warn!(
                    "Unit '{}' has negative minimum airborne altitude {}; it can never count as landed",
                    name,
                    spec.flight.min_airborne_altitude
                );
            }

            let unit = UnitType {
                name: name.clone(),
                flight: spec.flight,
                tuning,
            };
            if catalog.insert(unit).is_some() {
                anyhow::bail!("Duplicate unit type '{}'", name);
            }
        }

        Ok(catalog)
    }
}
