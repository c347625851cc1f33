//! Attack controller for aircraft.
//!
//! [`AttackAircraft`] answers two questions for the follow-and-attack engine:
//! may this aircraft fire on its target right now, and which maneuver should
//! it start when engaging. Checks run cheapest and most general first:
//!
//! 1. Spatial gate (landed or off-map aircraft never fire)
//! 2. Base eligibility (weapons, target validity)
//! 3. Facing against the bearing to the target's aim point
//!
//! An aim point with no horizontal offset skips the facing check entirely.

use tracing::{debug, trace};

use crate::attack::{
    ActivitySelector, AttackActivity, AttackGate, AttackIntent, AttackVerdict, BaseEligibility,
    FlightActivitySelector, SpatialGate, facing_within_tolerance,
};
use crate::config::{AttackTuning, FlightProfile};
use crate::env::MapOracle;
use crate::state::{Target, UnitState};

/// Aircraft attack rules for one unit type, with the base eligibility check
/// it defers to.
#[derive(Clone, Debug)]
pub struct AttackAircraft<B> {
    tuning: AttackTuning,
    spatial: SpatialGate,
    selector: FlightActivitySelector,
    base: B,
}

impl<B: BaseEligibility> AttackAircraft<B> {
    pub fn new(flight: FlightProfile, tuning: AttackTuning, base: B) -> Self {
        Self {
            tuning,
            spatial: SpatialGate::new(&flight),
            selector: FlightActivitySelector::new(&flight, &tuning),
            base,
        }
    }

    /// Evaluates every attack precondition and reports the first that fails.
    pub fn evaluate(
        &self,
        unit: &UnitState,
        target: &Target,
        map: &dyn MapOracle,
    ) -> AttackVerdict {
        if let Some(refusal) = self.spatial.check(unit, map) {
            debug!(unit = %unit.id, verdict = %refusal, "aircraft cannot attack");
            return refusal;
        }

        if !self.base.can_attack(unit, target) {
            debug!(unit = %unit.id, "base eligibility refused attack");
            return AttackVerdict::Ineligible;
        }

        let Some(aim_point) = target.targeted_position(unit.center_position) else {
            return AttackVerdict::Ineligible;
        };

        let delta = aim_point - unit.center_position;
        if delta.horizontal_length_squared() == 0 {
            return AttackVerdict::Attackable {
                directly_overhead: true,
            };
        }

        let bearing = delta.yaw();
        let aligned = facing_within_tolerance(unit.facing, bearing, self.tuning.facing_tolerance);
        trace!(
            unit = %unit.id,
            facing = %unit.facing,
            bearing = %bearing,
            tolerance = self.tuning.facing_tolerance.value(),
            aligned,
            "facing check"
        );

        if aligned {
            AttackVerdict::Attackable {
                directly_overhead: false,
            }
        } else {
            AttackVerdict::OutsideFacingTolerance {
                facing: unit.facing,
                bearing,
            }
        }
    }

    /// Returns true if `unit` may fire on `target` this tick.
    pub fn can_attack(&self, unit: &UnitState, target: &Target, map: &dyn MapOracle) -> bool {
        self.evaluate(unit, target, map).is_attackable()
    }
}

impl<B> ActivitySelector for AttackAircraft<B> {
    fn attack_activity(&self, target: &Target, intent: AttackIntent) -> AttackActivity {
        self.selector.attack_activity(target, intent)
    }
}

impl<B: BaseEligibility> AttackGate for AttackAircraft<B> {
    fn evaluate(&self, unit: &UnitState, target: &Target, map: &dyn MapOracle) -> AttackVerdict {
        AttackAircraft::evaluate(self, unit, target, map)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::attack::{Armament, ArmamentEligibility, AttackActivityKind};
    use crate::env::{MapBounds, MapDimensions, StaticMap};
    use crate::state::{CPos, EntityId, Facing, WPos, WVec};

    const ALTITUDE: i32 = 2048;

    fn map() -> StaticMap {
        StaticMap::flat(MapDimensions::new(64, 64), 0)
            .and_then(|m| m.with_bounds(MapBounds::new(1, 1, 63, 63)))
            .expect("valid map")
    }

    fn always(_: &UnitState, _: &Target) -> bool {
        true
    }

    fn never(_: &UnitState, _: &Target) -> bool {
        false
    }

    fn controller<B: BaseEligibility>(tolerance: i32, base: B) -> AttackAircraft<B> {
        AttackAircraft::new(
            FlightProfile::helicopter(512),
            AttackTuning::new(50, tolerance).expect("valid tuning"),
            base,
        )
    }

    fn unit(facing: i32) -> UnitState {
        UnitState::new(
            EntityId(1),
            CPos::new(32, 32).center() + WVec::new(0, 0, ALTITUDE),
            Facing::new(facing),
        )
    }

    /// Ground target 8 cells away on the given bearing.
    fn target_on_bearing(unit: &UnitState, bearing: Facing) -> Target {
        let offset = match bearing {
            Facing::NORTH => WVec::new(0, -8192, -ALTITUDE),
            Facing::WEST => WVec::new(-8192, 0, -ALTITUDE),
            Facing::SOUTH => WVec::new(0, 8192, -ALTITUDE),
            Facing::EAST => WVec::new(8192, 0, -ALTITUDE),
            _ => unreachable!("test only uses cardinal bearings"),
        };
        Target::terrain(unit.center_position + offset)
    }

    #[test]
    fn aligned_aircraft_may_attack() {
        let aircraft = controller(0, always);
        let unit = unit(Facing::WEST.value());
        let target = target_on_bearing(&unit, Facing::WEST);

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::Attackable {
                directly_overhead: false
            }
        );
    }

    #[test]
    fn misaligned_aircraft_may_not_attack() {
        let aircraft = controller(10, always);
        let unit = unit(0);
        let target = target_on_bearing(&unit, Facing::WEST);

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::OutsideFacingTolerance {
                facing: Facing::NORTH,
                bearing: Facing::WEST,
            }
        );
    }

    #[test]
    fn tolerance_applies_across_wraparound() {
        let aircraft = controller(5, always);
        let unit = unit(126);
        // Bearing 2 is four steps from 126 along the short arc.
        let target = Target::terrain(unit.center_position + WVec::new(-197_000, -2_000_000, 0));
        assert_eq!(
            (target.center_position().unwrap() - unit.center_position).yaw(),
            Facing::new(2)
        );

        assert!(aircraft.can_attack(&unit, &target, &map()));
    }

    #[test]
    fn grounded_aircraft_never_attacks() {
        let aircraft = controller(128, always);
        let mut unit = unit(0);
        unit.center_position.z = 511;
        let target = target_on_bearing(&unit, Facing::NORTH);

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::Grounded {
                altitude: 511,
                minimum: 512
            }
        );
    }

    #[test]
    fn off_map_aircraft_never_attacks() {
        let aircraft = controller(128, always);
        let unit = UnitState::new(
            EntityId(1),
            CPos::new(0, 10).center() + WVec::new(0, 0, ALTITUDE),
            Facing::NORTH,
        );
        let target = target_on_bearing(&unit, Facing::NORTH);

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::OffMap {
                cell: CPos::new(0, 10)
            }
        );
    }

    #[test]
    fn base_refusal_short_circuits_geometry() {
        let aircraft = controller(128, never);
        let unit = unit(0);
        let target = target_on_bearing(&unit, Facing::NORTH);

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::Ineligible
        );
    }

    #[test]
    fn base_is_not_consulted_when_spatial_gate_fails() {
        let calls = Cell::new(0);
        let counting = |_: &UnitState, _: &Target| {
            calls.set(calls.get() + 1);
            true
        };
        let aircraft = controller(0, counting);
        let mut unit = unit(0);
        unit.center_position.z = 0;

        assert!(!aircraft.can_attack(&unit, &target_on_bearing(&unit, Facing::NORTH), &map()));
        assert_eq!(calls.get(), 0);

        unit.center_position.z = ALTITUDE;
        assert!(aircraft.can_attack(&unit, &target_on_bearing(&unit, Facing::NORTH), &map()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn target_directly_below_ignores_facing() {
        let aircraft = controller(0, always);
        let unit = unit(77);
        let target = Target::terrain(WPos::new(
            unit.center_position.x,
            unit.center_position.y,
            0,
        ));

        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::Attackable {
                directly_overhead: true
            }
        );
    }

    #[test]
    fn aim_point_closest_to_aircraft_is_used() {
        let aircraft = controller(0, always);
        let unit = unit(Facing::NORTH.value());
        let target = Target::Actor {
            id: EntityId(2),
            center_position: unit.center_position + WVec::new(0, 0, -ALTITUDE),
            targetable_positions: vec![
                unit.center_position + WVec::new(0, 4096, -ALTITUDE),
                unit.center_position + WVec::new(0, -1024, -ALTITUDE),
            ],
        };

        // Center is directly below, but the closest aim point lies north.
        assert_eq!(
            aircraft.evaluate(&unit, &target, &map()),
            AttackVerdict::Attackable {
                directly_overhead: false
            }
        );
    }

    #[test]
    fn invalid_target_with_permissive_base_is_ineligible() {
        let aircraft = controller(128, always);
        assert_eq!(
            aircraft.evaluate(&unit(0), &Target::Invalid, &map()),
            AttackVerdict::Ineligible
        );
    }

    #[test]
    fn armament_eligibility_plugs_in() {
        let aircraft = controller(
            128,
            ArmamentEligibility::new(vec![Armament::new("gun").reloading(2)]),
        );
        let unit = unit(0);
        assert!(!aircraft.can_attack(&unit, &target_on_bearing(&unit, Facing::NORTH), &map()));
    }

    #[test]
    fn selects_activity_from_flight_profile() {
        let heli = controller(0, always);
        let jet = AttackAircraft::new(
            FlightProfile::fixed_wing(512),
            AttackTuning::default(),
            always,
        );
        let target = target_on_bearing(&unit(0), Facing::EAST);

        assert_eq!(
            heli.attack_activity(&target, AttackIntent::default()).kind(),
            AttackActivityKind::Hover
        );
        assert_eq!(
            jet.attack_activity(&target, AttackIntent::default()).kind(),
            AttackActivityKind::Forward
        );
    }
}
