use std::collections::VecDeque;

use crate::attack::AttackActivity;

/// The part of a unit's activity queue the follow engine needs.
pub trait ActivityQueue {
    /// Attack maneuver currently running, if any.
    fn current_attack(&self) -> Option<&AttackActivity>;

    /// Appends a maneuver to run after anything already queued.
    fn queue(&mut self, activity: AttackActivity);
}

/// Simple FIFO of attack maneuvers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityStack {
    activities: VecDeque<AttackActivity>,
}

impl ActivityStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the running maneuver as finished and returns it.
    pub fn complete_current(&mut self) -> Option<AttackActivity> {
        self.activities.pop_front()
    }

    /// Drops every queued maneuver, including the running one.
    pub fn cancel(&mut self) {
        self.activities.clear();
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl ActivityQueue for ActivityStack {
    fn current_attack(&self) -> Option<&AttackActivity> {
        self.activities.front()
    }

    fn queue(&mut self, activity: AttackActivity) {
        self.activities.push_back(activity);
    }
}
