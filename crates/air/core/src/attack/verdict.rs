use std::fmt;

use crate::state::{CPos, Facing};

/// Outcome of one attack evaluation.
///
/// Refusals name the first check that failed, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackVerdict {
    /// The aircraft is below its minimum airborne altitude.
    Grounded { altitude: i32, minimum: i32 },

    /// The aircraft's cell is outside the playable map bounds.
    OffMap { cell: CPos },

    /// The base eligibility check refused, or the target has no aim point.
    Ineligible,

    /// The bearing to the aim point is outside the facing tolerance.
    OutsideFacingTolerance { facing: Facing, bearing: Facing },

    /// The aircraft may fire.
    ///
    /// `directly_overhead` is set when the aim point has no horizontal offset,
    /// in which case facing was not checked at all.
    Attackable { directly_overhead: bool },
}

impl AttackVerdict {
    pub fn is_attackable(self) -> bool {
        matches!(self, Self::Attackable { .. })
    }

    /// Short identifier for logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grounded { .. } => "grounded",
            Self::OffMap { .. } => "off_map",
            Self::Ineligible => "ineligible",
            Self::OutsideFacingTolerance { .. } => "outside_facing_tolerance",
            Self::Attackable { .. } => "attackable",
        }
    }
}

impl fmt::Display for AttackVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grounded { altitude, minimum } => {
                write!(f, "grounded (altitude {altitude} < {minimum})")
            }
            Self::OffMap { cell } => write!(f, "off map at {cell}"),
            Self::Ineligible => f.write_str("ineligible"),
            Self::OutsideFacingTolerance { facing, bearing } => {
                write!(f, "facing {facing} misaligned with bearing {bearing}")
            }
            Self::Attackable {
                directly_overhead: true,
            } => f.write_str("attackable (directly overhead)"),
            Self::Attackable {
                directly_overhead: false,
            } => f.write_str("attackable"),
        }
    }
}
