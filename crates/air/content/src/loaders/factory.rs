//! Content factory for loading rules, maps and scenarios from a data directory.

use std::path::{Path, PathBuf};

use air_core::StaticMap;

use crate::catalog::UnitCatalog;
use crate::loaders::{LoadResult, MapLoader, Scenario, ScenarioLoader, UnitLoader};

/// Content factory that loads all attack content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── units.ron
/// ├── map.toml
/// └── scenarios/
///     ├── hover_strike.ron
///     └── strafing_run.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the unit catalog from `units.ron`.
    pub fn load_units(&self) -> LoadResult<UnitCatalog> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load the map from `map.toml`.
    pub fn load_map(&self) -> LoadResult<StaticMap> {
        MapLoader::load(&self.data_dir.join("map.toml"))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
