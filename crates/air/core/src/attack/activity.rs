//! Attack maneuver selection.
//!
//! The maneuvers themselves are executed by the flight layer; this module
//! only decides which one an aircraft should start and hands it the target.

use std::fmt;

use crate::config::{AttackTuning, FlightProfile};
use crate::state::Target;

/// How the attack order was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackIntent {
    /// Whether the attacker may move to reach the target.
    pub allow_move: bool,
    /// Whether the order was a forced attack (e.g. on allies or terrain).
    pub force_attack: bool,
}

impl AttackIntent {
    pub const fn new(allow_move: bool, force_attack: bool) -> Self {
        Self {
            allow_move,
            force_attack,
        }
    }
}

impl Default for AttackIntent {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Attack run for aircraft that can hold a stationary hover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverAttack {
    pub target: Target,
    pub intent: AttackIntent,
}

/// Attack run for aircraft that must keep forward airspeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardAttack {
    pub target: Target,
    pub intent: AttackIntent,
    /// Ticks to wait before turning back toward the target after a pass.
    pub turn_delay: u32,
}

/// Maneuver started when an aircraft engages a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttackActivity {
    Hover(HoverAttack),
    Forward(ForwardAttack),
}

impl AttackActivity {
    pub fn kind(&self) -> AttackActivityKind {
        match self {
            Self::Hover(_) => AttackActivityKind::Hover,
            Self::Forward(_) => AttackActivityKind::Forward,
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Self::Hover(activity) => &activity.target,
            Self::Forward(activity) => &activity.target,
        }
    }

    pub fn intent(&self) -> AttackIntent {
        match self {
            Self::Hover(activity) => activity.intent,
            Self::Forward(activity) => activity.intent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackActivityKind {
    Hover,
    Forward,
}

impl fmt::Display for AttackActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hover => f.write_str("hover-attack"),
            Self::Forward => f.write_str("forward-attack"),
        }
    }
}

/// Builds the maneuver an attacker runs against a target.
pub trait ActivitySelector {
    fn attack_activity(&self, target: &Target, intent: AttackIntent) -> AttackActivity;
}

impl<T: ActivitySelector + ?Sized> ActivitySelector for &T {
    #[inline]
    fn attack_activity(&self, target: &Target, intent: AttackIntent) -> AttackActivity {
        (**self).attack_activity(target, intent)
    }
}

/// Picks the maneuver from the aircraft's hover capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlightActivitySelector {
    can_hover: bool,
    turn_delay: u32,
}

impl FlightActivitySelector {
    pub const fn new(profile: &FlightProfile, tuning: &AttackTuning) -> Self {
        Self {
            can_hover: profile.can_hover,
            turn_delay: tuning.attack_turn_delay,
        }
    }
}

impl ActivitySelector for FlightActivitySelector {
    fn attack_activity(&self, target: &Target, intent: AttackIntent) -> AttackActivity {
        let target = target.clone();
        if self.can_hover {
            return AttackActivity::Hover(HoverAttack { target, intent });
        }

        AttackActivity::Forward(ForwardAttack {
            target,
            intent,
            turn_delay: self.turn_delay,
        })
    }
}
