//! Validated unit-type catalog.

use std::collections::HashMap;

use air_core::{AttackAircraft, AttackTuning, BaseEligibility, FlightProfile};

/// A validated aircraft unit type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitType {
    pub name: String,
    pub flight: FlightProfile,
    pub tuning: AttackTuning,
}

impl UnitType {
    /// Builds the attack controller for this unit type.
    pub fn attack_controller<B: BaseEligibility>(&self, base: B) -> AttackAircraft<B> {
        AttackAircraft::new(self.flight, self.tuning, base)
    }
}

/// Unit types keyed by name.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: HashMap<String, UnitType>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit type, returning any previous definition with the same name.
    pub fn insert(&mut self, unit: UnitType) -> Option<UnitType> {
        self.units.insert(unit.name.clone(), unit)
    }

    pub fn get(&self, name: &str) -> Option<&UnitType> {
        self.units.get(name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit types sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &UnitType> {
        let mut units: Vec<_> = self.units.values().collect();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        units.into_iter()
    }
}
