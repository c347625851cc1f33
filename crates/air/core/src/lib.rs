//! Deterministic attack logic for aircraft.
//!
//! `air-core` decides, once per simulation tick, whether an aircraft may fire
//! on its target and which attack maneuver it should fly. It reads unit, map
//! and target snapshots supplied by the caller and never mutates world state.
//! Rules data ([`FlightProfile`], [`AttackTuning`]) is validated when it is
//! built, so per-tick evaluation has no error path.
pub mod attack;
pub mod behavior;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use attack::{
    ActivitySelector, Armament, ArmamentEligibility, AttackActivity, AttackActivityKind,
    AttackAircraft, AttackGate, AttackIntent, AttackVerdict, BaseEligibility,
    FlightActivitySelector, ForwardAttack, HoverAttack, SpatialGate, facing_within_tolerance,
    within_tolerance_on_scale,
};
pub use behavior::{ActivityQueue, ActivityStack, AttackFollow, FollowOutcome};
pub use config::{AttackTuning, ConfigError, FacingTolerance, FlightProfile};
pub use env::{MapBounds, MapDimensions, MapOracle, OracleError, StaticMap};
pub use error::{AirError, ErrorSeverity};
pub use state::{CELL_SIZE, CPos, EntityId, Facing, Target, UnitState, WPos, WVec};
