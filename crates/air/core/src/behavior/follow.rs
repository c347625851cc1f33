//! Generic follow-and-attack engine.
//!
//! The engine knows nothing about aircraft. Whether an attacker may fire and
//! which maneuver it runs are injected as an [`AttackGate`] and an
//! [`ActivitySelector`]; [`crate::AttackAircraft`] provides both.

use tracing::debug;

use crate::attack::{ActivitySelector, AttackActivityKind, AttackGate, AttackIntent, AttackVerdict};
use crate::behavior::ActivityQueue;
use crate::env::MapOracle;
use crate::state::{Target, UnitState};

/// What the engine did on one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The target is invalid; nothing to follow.
    NoTarget,

    /// The gate refused; the unit keeps following without firing.
    Holding(AttackVerdict),

    /// An attack maneuver is already running and keeps running.
    Continuing(AttackActivityKind),

    /// A new attack maneuver was queued.
    Started(AttackActivityKind),
}

impl FollowOutcome {
    /// Returns true if the unit is engaging its target this tick.
    pub fn is_engaging(self) -> bool {
        matches!(self, Self::Continuing(_) | Self::Started(_))
    }
}

/// Follow-and-attack behavior parameterized by its selector and gate.
#[derive(Clone, Debug)]
pub struct AttackFollow<S, G> {
    selector: S,
    gate: G,
    intent: AttackIntent,
}

impl<S, G> AttackFollow<S, G>
where
    S: ActivitySelector,
    G: AttackGate,
{
    pub fn new(selector: S, gate: G) -> Self {
        Self {
            selector,
            gate,
            intent: AttackIntent::default(),
        }
    }

    pub fn with_intent(mut self, intent: AttackIntent) -> Self {
        self.intent = intent;
        self
    }

    pub fn intent(&self) -> AttackIntent {
        self.intent
    }

    /// Runs one evaluation tick for `unit` against `target`.
    ///
    /// Queues a maneuver only when the gate permits the attack and no attack
    /// maneuver is already running on `queue`.
    pub fn tick<Q>(
        &self,
        unit: &UnitState,
        target: &Target,
        map: &dyn MapOracle,
        queue: &mut Q,
    ) -> FollowOutcome
    where
        Q: ActivityQueue + ?Sized,
    {
        if !target.is_valid() {
            return FollowOutcome::NoTarget;
        }

        let verdict = self.gate.evaluate(unit, target, map);
        if !verdict.is_attackable() {
            return FollowOutcome::Holding(verdict);
        }

        if let Some(current) = queue.current_attack() {
            return FollowOutcome::Continuing(current.kind());
        }

        let activity = self.selector.attack_activity(target, self.intent);
        let kind = activity.kind();
        debug!(unit = %unit.id, maneuver = %kind, "starting attack maneuver");
        queue.queue(activity);

        FollowOutcome::Started(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::{AttackActivity, AttackAircraft, HoverAttack};
    use crate::behavior::ActivityStack;
    use crate::config::{AttackTuning, FlightProfile};
    use crate::env::{MapDimensions, StaticMap};
    use crate::state::{CPos, EntityId, Facing, WVec};

    struct OpenGate;

    impl AttackGate for OpenGate {
        fn evaluate(&self, _: &UnitState, _: &Target, _: &dyn MapOracle) -> AttackVerdict {
            AttackVerdict::Attackable {
                directly_overhead: false,
            }
        }
    }

    struct ClosedGate;

    impl AttackGate for ClosedGate {
        fn evaluate(&self, _: &UnitState, _: &Target, _: &dyn MapOracle) -> AttackVerdict {
            AttackVerdict::Ineligible
        }
    }

    struct AlwaysHover;

    impl ActivitySelector for AlwaysHover {
        fn attack_activity(&self, target: &Target, intent: AttackIntent) -> AttackActivity {
            AttackActivity::Hover(HoverAttack {
                target: target.clone(),
                intent,
            })
        }
    }

    fn map() -> StaticMap {
        StaticMap::flat(MapDimensions::new(16, 16), 0).expect("valid map")
    }

    fn unit() -> UnitState {
        UnitState::new(
            EntityId(3),
            CPos::new(8, 8).center() + WVec::new(0, 0, 1024),
            Facing::NORTH,
        )
    }

    fn target() -> Target {
        Target::terrain(CPos::new(8, 4).center())
    }

    #[test]
    fn invalid_target_does_nothing() {
        let follow = AttackFollow::new(AlwaysHover, OpenGate);
        let mut queue = ActivityStack::new();

        assert_eq!(
            follow.tick(&unit(), &Target::Invalid, &map(), &mut queue),
            FollowOutcome::NoTarget
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn refused_gate_holds_without_queueing() {
        let follow = AttackFollow::new(AlwaysHover, ClosedGate);
        let mut queue = ActivityStack::new();

        assert_eq!(
            follow.tick(&unit(), &target(), &map(), &mut queue),
            FollowOutcome::Holding(AttackVerdict::Ineligible)
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn starts_once_then_continues_until_complete() {
        let follow = AttackFollow::new(AlwaysHover, OpenGate);
        let mut queue = ActivityStack::new();

        assert_eq!(
            follow.tick(&unit(), &target(), &map(), &mut queue),
            FollowOutcome::Started(AttackActivityKind::Hover)
        );
        assert_eq!(
            follow.tick(&unit(), &target(), &map(), &mut queue),
            FollowOutcome::Continuing(AttackActivityKind::Hover)
        );
        assert_eq!(queue.len(), 1);

        queue.complete_current();
        assert_eq!(
            follow.tick(&unit(), &target(), &map(), &mut queue),
            FollowOutcome::Started(AttackActivityKind::Hover)
        );
    }

    #[test]
    fn queued_activity_carries_target_and_intent() {
        let intent = AttackIntent::new(false, true);
        let follow = AttackFollow::new(AlwaysHover, OpenGate).with_intent(intent);
        let mut queue = ActivityStack::new();
        follow.tick(&unit(), &target(), &map(), &mut queue);

        let current = queue.current_attack().expect("activity queued");
        assert_eq!(current.target(), &target());
        assert_eq!(current.intent(), intent);
    }

    #[test]
    fn aircraft_controller_drives_the_engine() {
        let aircraft = AttackAircraft::new(
            FlightProfile::fixed_wing(256),
            AttackTuning::new(20, 4).expect("valid tuning"),
            |_: &UnitState, _: &Target| true,
        );
        let follow = AttackFollow::new(&aircraft, &aircraft);
        let mut queue = ActivityStack::new();

        // Facing west while the target is due north: hold.
        let mut unit = unit();
        unit.facing = Facing::WEST;
        let outcome = follow.tick(&unit, &target(), &map(), &mut queue);
        assert!(matches!(
            outcome,
            FollowOutcome::Holding(AttackVerdict::OutsideFacingTolerance { .. })
        ));
        assert!(!outcome.is_engaging());

        // Turned toward the target: fixed-wing aircraft start a forward attack.
        unit.facing = Facing::new(2);
        assert_eq!(
            follow.tick(&unit, &target(), &map(), &mut queue),
            FollowOutcome::Started(AttackActivityKind::Forward)
        );
        match queue.current_attack() {
            Some(AttackActivity::Forward(attack)) => assert_eq!(attack.turn_delay, 20),
            other => panic!("expected forward attack, got {other:?}"),
        }
    }
}
