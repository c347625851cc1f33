//! Content loaders for reading unit rules, maps and scenarios from files.

pub mod factory;
pub mod map;
pub mod scenario;
pub mod units;

pub use factory::ContentFactory;
pub use map::MapLoader;
pub use scenario::{FrameReport, Scenario, ScenarioFrame, ScenarioLoader};
pub use units::{AttackSpec, UnitLoader, UnitTypeSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
