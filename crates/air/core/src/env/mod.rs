//! Traits describing read-only world data.
//!
//! The attack logic never owns the map; callers pass a [`MapOracle`] into each
//! evaluation so the same controller can be reused across worlds and tests.
mod error;
mod map;
mod snapshot;

pub use error::OracleError;
pub use map::{MapBounds, MapDimensions, MapOracle};
pub use snapshot::StaticMap;
