//! Prior-stage attack eligibility.
//!
//! The aircraft controller does not decide whether weapons are ready or the
//! target is still valid; it asks a [`BaseEligibility`] implementation and
//! only runs its own geometry checks when that check passes.

use crate::state::{Target, UnitState};

/// General attack preconditions shared by every attacker type.
pub trait BaseEligibility {
    /// Returns true if nothing other than aircraft-specific geometry keeps
    /// `unit` from attacking `target`.
    fn can_attack(&self, unit: &UnitState, target: &Target) -> bool;
}

impl<F> BaseEligibility for F
where
    F: Fn(&UnitState, &Target) -> bool,
{
    #[inline]
    fn can_attack(&self, unit: &UnitState, target: &Target) -> bool {
        self(unit, target)
    }
}

/// A weapon mount with reload and ammunition state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armament {
    pub name: String,
    /// Ticks until the weapon can fire again.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reload_remaining: u32,
    /// Rounds left; `None` means unlimited.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ammo: Option<u32>,
}

impl Armament {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reload_remaining: 0,
            ammo: None,
        }
    }

    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = Some(ammo);
        self
    }

    pub fn reloading(mut self, ticks: u32) -> Self {
        self.reload_remaining = ticks;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.reload_remaining == 0 && self.ammo.is_none_or(|rounds| rounds > 0)
    }
}

/// Stock eligibility check: the attack ability is enabled, the target is
/// valid, and at least one armament can fire.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ArmamentEligibility {
    pub disabled: bool,
    pub paused: bool,
    pub armaments: Vec<Armament>,
}

impl ArmamentEligibility {
    pub fn new(armaments: Vec<Armament>) -> Self {
        Self {
            disabled: false,
            paused: false,
            armaments,
        }
    }
}

impl BaseEligibility for ArmamentEligibility {
    fn can_attack(&self, _unit: &UnitState, target: &Target) -> bool {
        if self.disabled || self.paused || !target.is_valid() {
            return false;
        }

        self.armaments.iter().any(Armament::is_ready)
    }
}
