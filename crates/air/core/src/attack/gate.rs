//! Attack gates and the spatial preconditions for firing from the air.

use crate::attack::AttackVerdict;
use crate::config::FlightProfile;
use crate::env::MapOracle;
use crate::state::{Target, UnitState};

/// Decides, each tick, whether an attacker may fire on a target.
pub trait AttackGate {
    fn evaluate(&self, unit: &UnitState, target: &Target, map: &dyn MapOracle) -> AttackVerdict;
}

impl<T: AttackGate + ?Sized> AttackGate for &T {
    #[inline]
    fn evaluate(&self, unit: &UnitState, target: &Target, map: &dyn MapOracle) -> AttackVerdict {
        (**self).evaluate(unit, target, map)
    }
}

/// Refuses attacks from aircraft that are landed or outside the playable map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SpatialGate {
    min_airborne_altitude: i32,
}

impl SpatialGate {
    pub const fn new(profile: &FlightProfile) -> Self {
        Self {
            min_airborne_altitude: profile.min_airborne_altitude,
        }
    }

    /// Returns the refusal for `unit`, or `None` if the gate lets it through.
    ///
    /// Altitude is checked before containment.
    pub fn check(&self, unit: &UnitState, map: &dyn MapOracle) -> Option<AttackVerdict> {
        let altitude = map.distance_above_terrain(unit.center_position);
        if altitude < self.min_airborne_altitude {
            return Some(AttackVerdict::Grounded {
                altitude,
                minimum: self.min_airborne_altitude,
            });
        }

        let cell = unit.location();
        if !map.contains(cell) {
            return Some(AttackVerdict::OffMap { cell });
        }

        None
    }

    pub fn permits(&self, unit: &UnitState, map: &dyn MapOracle) -> bool {
        self.check(unit, map).is_none()
    }
}
