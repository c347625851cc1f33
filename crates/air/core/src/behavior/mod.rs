//! Tick-driven attack behavior built by composition.
//!
//! [`AttackFollow`] is the generic engine; the attacker-specific parts are
//! plugged in rather than overridden. The activity queue stays owned by the
//! caller and is only borrowed for each tick.
mod follow;
mod queue;

pub use follow::{AttackFollow, FollowOutcome};
pub use queue::{ActivityQueue, ActivityStack};
