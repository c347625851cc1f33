//! Static map construction errors.

use crate::error::{AirError, ErrorSeverity};
use crate::state::CPos;

use super::{MapBounds, MapDimensions};

/// Errors that occur when building a [`super::StaticMap`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Map has no cells.
    #[error("map dimensions {0:?} are empty")]
    EmptyMap(MapDimensions),

    /// Playable bounds are empty or extend past the map edge.
    #[error("playable bounds {bounds:?} do not fit map {dimensions:?}")]
    BoundsOutsideMap {
        bounds: MapBounds,
        dimensions: MapDimensions,
    },

    /// A height override names a cell that is not on the map.
    #[error("height override for cell {0} is outside the map")]
    CellOutsideMap(CPos),
}

impl AirError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            EmptyMap(_) => ErrorSeverity::Fatal,
            BoundsOutsideMap { .. } | CellOutsideMap(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            EmptyMap(_) => "ORACLE_EMPTY_MAP",
            BoundsOutsideMap { .. } => "ORACLE_BOUNDS_OUTSIDE_MAP",
            CellOutsideMap(_) => "ORACLE_CELL_OUTSIDE_MAP",
        }
    }
}
