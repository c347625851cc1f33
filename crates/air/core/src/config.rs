//! Per-unit-type rules data: flight profile and attack tuning.
//!
//! Both structures are immutable once loaded. Tuning values are validated on
//! construction, so a [`AttackTuning`] in hand always satisfies its invariants.

use crate::error::{AirError, ErrorSeverity};

/// Errors raised while building unit rules from configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Facing tolerance lies outside `[0, 128]`.
    #[error(
        "facing tolerance {value} must be in range of [0, {max}], {max} covers 360 degrees",
        max = FacingTolerance::MAX
    )]
    FacingToleranceOutOfRange { value: i32 },
}

impl AirError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::FacingToleranceOutOfRange { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::FacingToleranceOutOfRange { .. } => "CONFIG_FACING_TOLERANCE_OUT_OF_RANGE",
        }
    }
}

/// Flight characteristics an aircraft type is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlightProfile {
    /// Height above terrain, in world units, below which the aircraft counts
    /// as landed.
    pub min_airborne_altitude: i32,

    /// Whether the aircraft can hold a stationary hover. Aircraft that cannot
    /// hover must keep forward airspeed at all times.
    pub can_hover: bool,
}

impl FlightProfile {
    pub const fn new(min_airborne_altitude: i32, can_hover: bool) -> Self {
        Self {
            min_airborne_altitude,
            can_hover,
        }
    }

    pub const fn helicopter(min_airborne_altitude: i32) -> Self {
        Self::new(min_airborne_altitude, true)
    }

    pub const fn fixed_wing(min_airborne_altitude: i32) -> Self {
        Self::new(min_airborne_altitude, false)
    }
}

/// Maximum angular deviation between facing and target bearing at which an
/// aircraft may still fire, on a scale where `128` covers the full circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct FacingTolerance(u8);

impl FacingTolerance {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 128;

    /// Exact alignment required.
    pub const EXACT: Self = Self(0);
    /// Any facing is acceptable.
    pub const FULL_CIRCLE: Self = Self(Self::MAX as u8);

    pub fn new(value: i32) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::FacingToleranceOutOfRange { value })
        }
    }

    pub const fn value(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<i32> for FacingTolerance {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FacingTolerance> for i32 {
    fn from(tolerance: FacingTolerance) -> Self {
        tolerance.value()
    }
}

/// Attack behavior tuning for an aircraft type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackTuning {
    /// Delay, in game ticks, before a non-hovering aircraft turns to attack.
    pub attack_turn_delay: u32,

    /// Allowed deviation between facing and target bearing when firing.
    pub facing_tolerance: FacingTolerance,
}

impl AttackTuning {
    pub const DEFAULT_ATTACK_TURN_DELAY: u32 = 50;

    /// Builds tuning from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FacingToleranceOutOfRange`] if `facing_tolerance`
    /// lies outside `[0, 128]`.
    pub fn new(attack_turn_delay: u32, facing_tolerance: i32) -> Result<Self, ConfigError> {
        Ok(Self {
            attack_turn_delay,
            facing_tolerance: FacingTolerance::new(facing_tolerance)?,
        })
    }
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            attack_turn_delay: Self::DEFAULT_ATTACK_TURN_DELAY,
            facing_tolerance: FacingTolerance::EXACT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_bounds_are_inclusive() {
        assert_eq!(FacingTolerance::new(0), Ok(FacingTolerance::EXACT));
        assert_eq!(FacingTolerance::new(128), Ok(FacingTolerance::FULL_CIRCLE));
        assert_eq!(
            FacingTolerance::new(-1),
            Err(ConfigError::FacingToleranceOutOfRange { value: -1 })
        );
        assert_eq!(
            FacingTolerance::new(129),
            Err(ConfigError::FacingToleranceOutOfRange { value: 129 })
        );
    }

    #[test]
    fn out_of_range_tolerance_is_fatal_and_descriptive() {
        let err = AttackTuning::new(50, 200).unwrap_err();
        assert!(err.severity().is_fatal());
        assert_eq!(err.error_code(), "CONFIG_FACING_TOLERANCE_OUT_OF_RANGE");
        assert_eq!(
            err.to_string(),
            "facing tolerance 200 must be in range of [0, 128], 128 covers 360 degrees"
        );
    }

    #[test]
    fn default_tuning_requires_exact_alignment() {
        let tuning = AttackTuning::default();
        assert_eq!(tuning.attack_turn_delay, 50);
        assert_eq!(tuning.facing_tolerance, FacingTolerance::EXACT);
    }

    #[test]
    fn flight_profile_constructors() {
        assert!(FlightProfile::helicopter(128).can_hover);
        assert!(!FlightProfile::fixed_wing(128).can_hover);
        assert_eq!(FlightProfile::default().min_airborne_altitude, 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every value in [0, 128] is accepted unchanged
            #[test]
            fn prop_in_range_tolerance_loads(value in 0i32..=128) {
                let tuning = AttackTuning::new(0, value);
                prop_assert_eq!(tuning.map(|t| t.facing_tolerance.value()), Ok(value));
            }

            /// Property: every value outside [0, 128] is rejected
            #[test]
            fn prop_out_of_range_tolerance_fails(
                value in prop_oneof![i32::MIN..0i32, 129i32..=i32::MAX]
            ) {
                prop_assert_eq!(
                    AttackTuning::new(0, value),
                    Err(ConfigError::FacingToleranceOutOfRange { value })
                );
            }
        }
    }
}
