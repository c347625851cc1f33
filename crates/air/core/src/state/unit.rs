use std::fmt;

use super::{CPos, Facing, WPos};

/// Unique identifier for any unit or actor known to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Snapshot of an aircraft's runtime state for one evaluation.
///
/// Flight and movement systems own and mutate the real values; the attack
/// logic only ever reads this view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: EntityId,
    pub center_position: WPos,
    pub facing: Facing,
}

impl UnitState {
    pub fn new(id: EntityId, center_position: WPos, facing: Facing) -> Self {
        Self {
            id,
            center_position,
            facing,
        }
    }

    /// Map cell the unit currently occupies.
    pub fn location(&self) -> CPos {
        self.center_position.cell()
    }
}
