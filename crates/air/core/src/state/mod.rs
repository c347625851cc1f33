//! World-facing value types read by the attack logic.
//!
//! Everything here is a plain snapshot: positions, facings, unit views and
//! targets are produced by the caller each tick and never mutated by the core.
mod facing;
mod position;
mod target;
mod unit;

pub use facing::Facing;
pub use position::{CELL_SIZE, CPos, WPos, WVec};
pub use target::Target;
pub use unit::{EntityId, UnitState};
