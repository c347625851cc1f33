//! Aircraft attack eligibility and maneuver selection.
//!
//! - [`tolerance`]: circular facing comparison
//! - [`SpatialGate`]: altitude and map containment
//! - [`BaseEligibility`]: prior-stage checks supplied by the caller
//! - [`ActivitySelector`]: hover-attack vs forward-attack
//! - [`AttackAircraft`]: per-tick orchestration of all of the above
mod activity;
mod controller;
mod eligibility;
mod gate;
pub mod tolerance;
mod verdict;

pub use activity::{
    ActivitySelector, AttackActivity, AttackActivityKind, AttackIntent, FlightActivitySelector,
    ForwardAttack, HoverAttack,
};
pub use controller::AttackAircraft;
pub use eligibility::{Armament, ArmamentEligibility, BaseEligibility};
pub use gate::{AttackGate, SpatialGate};
pub use tolerance::{facing_within_tolerance, within_tolerance_on_scale};
pub use verdict::AttackVerdict;
