use std::fmt;

/// Horizontal direction on a circular scale of [`Facing::FULL_CIRCLE`] steps.
///
/// 0 points north and values increase counter-clockwise. Values are always
/// kept normalized to `[0, FULL_CIRCLE)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub struct Facing(u8);

impl Facing {
    /// Number of steps in a full turn.
    pub const FULL_CIRCLE: i32 = 128;

    pub const NORTH: Self = Self(0);
    pub const WEST: Self = Self(32);
    pub const SOUTH: Self = Self(64);
    pub const EAST: Self = Self(96);

    /// Creates a facing from any integer, wrapping it onto the circle.
    pub const fn new(value: i32) -> Self {
        Self(value.rem_euclid(Self::FULL_CIRCLE) as u8)
    }

    pub const fn value(self) -> i32 {
        self.0 as i32
    }
}

impl From<i32> for Facing {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Facing> for i32 {
    fn from(facing: Facing) -> Self {
        facing.value()
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::FULL_CIRCLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_onto_circle() {
        assert_eq!(Facing::new(128), Facing::NORTH);
        assert_eq!(Facing::new(-2).value(), 126);
        assert_eq!(Facing::new(130).value(), 2);
        assert_eq!(Facing::new(-128 * 3 + 5).value(), 5);
    }
}
