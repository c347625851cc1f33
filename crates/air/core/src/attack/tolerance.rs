//! Angular tolerance checks on circular facing scales.

use crate::config::FacingTolerance;
use crate::state::Facing;

/// Returns true if `facing` and `desired` are at most `tolerance` steps apart
/// on a circle of `modulus` steps, measured along the shorter arc.
///
/// Inputs need not be normalized. A tolerance of `modulus` or more accepts
/// every pair; a tolerance of 0 accepts only equal facings; a negative
/// tolerance accepts nothing.
pub fn within_tolerance_on_scale(facing: i32, desired: i32, tolerance: i32, modulus: i32) -> bool {
    debug_assert!(modulus > 0, "facing scale must be positive");

    if tolerance >= modulus {
        return true;
    }

    let delta = (desired.rem_euclid(modulus) - facing.rem_euclid(modulus)).rem_euclid(modulus);
    delta.min(modulus - delta) <= tolerance
}

/// [`within_tolerance_on_scale`] on the unit facing scale.
pub fn facing_within_tolerance(
    facing: Facing,
    desired: Facing,
    tolerance: FacingTolerance,
) -> bool {
    within_tolerance_on_scale(
        facing.value(),
        desired.value(),
        tolerance.value(),
        Facing::FULL_CIRCLE,
    )
}
