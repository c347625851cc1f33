use crate::state::{CPos, WPos};

/// Read-only map queries the attack logic depends on.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Playable area. Cells outside it exist but units there may not act.
    fn bounds(&self) -> MapBounds {
        MapBounds::full(self.dimensions())
    }

    /// Terrain height at the center of `cell`, or `None` outside the map.
    fn terrain_height(&self, cell: CPos) -> Option<i32>;

    /// Whether `cell` lies inside the playable bounds.
    fn contains(&self, cell: CPos) -> bool {
        self.bounds().contains(cell)
    }

    /// Height of `pos` above the terrain of the cell containing it.
    ///
    /// Cells outside the map are treated as ground level.
    fn distance_above_terrain(&self, pos: WPos) -> i32 {
        pos.z - self.terrain_height(pos.cell()).unwrap_or(0)
    }
}

/// Full size of a map in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: CPos) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }
}

/// Playable rectangle of a map: `left`/`top` inclusive, `right`/`bottom` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl MapBounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds covering every cell of a map.
    pub const fn full(dimensions: MapDimensions) -> Self {
        Self::new(0, 0, dimensions.width as i32, dimensions.height as i32)
    }

    pub fn contains(&self, cell: CPos) -> bool {
        cell.x >= self.left && cell.y >= self.top && cell.x < self.right && cell.y < self.bottom
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Whether these bounds fit inside a map of `dimensions`.
    pub fn fits(&self, dimensions: MapDimensions) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= dimensions.width as i32
            && self.bottom <= dimensions.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_exclude_right_and_bottom_edges() {
        let bounds = MapBounds::new(1, 1, 4, 4);
        assert!(bounds.contains(CPos::new(1, 1)));
        assert!(bounds.contains(CPos::new(3, 3)));
        assert!(!bounds.contains(CPos::new(4, 3)));
        assert!(!bounds.contains(CPos::new(0, 2)));
    }

    #[test]
    fn full_bounds_match_dimensions() {
        let dims = MapDimensions::new(8, 6);
        let bounds = MapBounds::full(dims);
        assert!(bounds.fits(dims));
        assert!(bounds.contains(CPos::new(7, 5)));
        assert!(!bounds.contains(CPos::new(-1, 0)));
        assert!(!MapBounds::new(0, 0, 9, 6).fits(dims));
    }
}
