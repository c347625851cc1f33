//! In-memory map oracle backed by a height table.

use std::collections::BTreeMap;

use super::{MapBounds, MapDimensions, MapOracle, OracleError};
use crate::state::CPos;

/// Immutable map with a uniform base height and per-cell overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticMap {
    dimensions: MapDimensions,
    bounds: MapBounds,
    base_height: i32,
    heights: BTreeMap<CPos, i32>,
}

impl StaticMap {
    /// Creates a flat map whose playable bounds cover every cell.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::EmptyMap`] if either dimension is zero.
    pub fn flat(dimensions: MapDimensions, base_height: i32) -> Result<Self, OracleError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(OracleError::EmptyMap(dimensions));
        }

        Ok(Self {
            dimensions,
            bounds: MapBounds::full(dimensions),
            base_height,
            heights: BTreeMap::new(),
        })
    }

    /// Restricts the playable area.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::BoundsOutsideMap`] if `bounds` is empty or does
    /// not fit inside the map.
    pub fn with_bounds(mut self, bounds: MapBounds) -> Result<Self, OracleError> {
        if bounds.is_empty() || !bounds.fits(self.dimensions) {
            return Err(OracleError::BoundsOutsideMap {
                bounds,
                dimensions: self.dimensions,
            });
        }

        self.bounds = bounds;
        Ok(self)
    }

    /// Overrides the terrain height of a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::CellOutsideMap`] if `cell` is not on the map.
    pub fn with_height(mut self, cell: CPos, height: i32) -> Result<Self, OracleError> {
        if !self.dimensions.contains(cell) {
            return Err(OracleError::CellOutsideMap(cell));
        }

        self.heights.insert(cell, height);
        Ok(self)
    }

    pub fn base_height(&self) -> i32 {
        self.base_height
    }
}

impl MapOracle for StaticMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn bounds(&self) -> MapBounds {
        self.bounds
    }

    fn terrain_height(&self, cell: CPos) -> Option<i32> {
        if !self.dimensions.contains(cell) {
            return None;
        }
        Some(self.heights.get(&cell).copied().unwrap_or(self.base_height))
    }
}
