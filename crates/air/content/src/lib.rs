//! Data-driven content for `air-core`.
//!
//! Reads unit rules (RON), maps (TOML) and attack scenarios (RON) and turns
//! them into validated core types. Invalid rules fail the load instead of
//! reaching per-tick evaluation.
pub mod catalog;
pub mod loaders;

pub use catalog::{UnitCatalog, UnitType};
pub use loaders::{
    AttackSpec, ContentFactory, FrameReport, LoadResult, MapLoader, Scenario, ScenarioFrame,
    ScenarioLoader, UnitLoader, UnitTypeSpec,
};
