use std::fmt;
use std::ops::{Add, Sub};

use super::Facing;

/// Edge length of one map cell in world units.
pub const CELL_SIZE: i32 = 1024;

/// Absolute position in world units.
///
/// `x` grows east, `y` grows south and `z` is height above the map's zero level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WPos {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing this position. Negative coordinates round toward
    /// negative infinity so cells stay contiguous across the origin.
    pub const fn cell(self) -> CPos {
        CPos::new(self.x.div_euclid(CELL_SIZE), self.y.div_euclid(CELL_SIZE))
    }
}

impl Sub for WPos {
    type Output = WVec;

    fn sub(self, rhs: WPos) -> WVec {
        WVec::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<WVec> for WPos {
    type Output = WPos;

    fn add(self, rhs: WVec) -> WPos {
        WPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl fmt::Display for WPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Offset between two world positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WVec {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WVec {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn length_squared(self) -> i64 {
        let (x, y, z) = (self.x as i64, self.y as i64, self.z as i64);
        x * x + y * y + z * z
    }

    /// Squared length on the ground plane; height is ignored.
    pub const fn horizontal_length_squared(self) -> i64 {
        let (x, y) = (self.x as i64, self.y as i64);
        x * x + y * y
    }

    /// Horizontal bearing of this vector on the facing scale.
    ///
    /// North (negative `y`) is facing 0 and the scale turns counter-clockwise,
    /// so west is a quarter turn. A vector with no horizontal component has no
    /// meaningful bearing and yields facing 0. Integer-only, so every platform
    /// rounds to the same step.
    pub fn yaw(self) -> Facing {
        const QUARTER: i32 = Facing::FULL_CIRCLE / 4;

        if self.horizontal_length_squared() == 0 {
            return Facing::NORTH;
        }

        // Angle measured counter-clockwise from east, with north pointing up.
        let (east, north) = (i64::from(self.x), -i64::from(self.y));
        let (run, rise) = (east.abs(), north.abs());
        let acute = if rise <= run {
            octant_steps(rise, run)
        } else {
            QUARTER - octant_steps(run, rise)
        };

        let from_east = match (east >= 0, north >= 0) {
            (true, true) => acute,
            (false, true) => 2 * QUARTER - acute,
            (false, false) => 2 * QUARTER + acute,
            (true, false) => Facing::FULL_CIRCLE - acute,
        };
        Facing::new(from_east - QUARTER)
    }
}

const TANGENT_SCALE: i64 = 1 << 20;

/// `tan((k + 0.5) * 360° / 128)` scaled by [`TANGENT_SCALE`]: the boundaries
/// between facing steps within the first octant.
const HALF_STEP_TANGENTS: [i64; 16] = [
    25741, 77348, 129330, 181945, 235466, 290180, 346403, 404480, 464802, 527809, 594011, 664003,
    738491, 818317, 904508, 998327,
];

/// Facing steps (0 to 16) of the angle whose tangent is `rise / run`.
/// Requires `0 <= rise <= run` and `run > 0`.
fn octant_steps(rise: i64, run: i64) -> i32 {
    HALF_STEP_TANGENTS
        .iter()
        .take_while(|&&tangent| rise * TANGENT_SCALE > run * tangent)
        .count() as i32
}

/// Map cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CPos {
    pub x: i32,
    pub y: i32,
}

impl CPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World position at the center of this cell, at height zero.
    pub const fn center(self) -> WPos {
        WPos::new(
            self.x * CELL_SIZE + CELL_SIZE / 2,
            self.y * CELL_SIZE + CELL_SIZE / 2,
            0,
        )
    }
}

impl fmt::Display for CPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
