use super::{EntityId, WPos};

/// Something an aircraft may be ordered to attack.
///
/// The targeting system owns the real entity; this is a transient view that
/// is only held for the duration of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// No target, or a reference that is no longer valid.
    #[default]
    Invalid,

    /// A fixed point on the ground.
    Terrain { position: WPos },

    /// An actor with optional aim points on its body.
    Actor {
        id: EntityId,
        center_position: WPos,
        /// Aim points. Empty means the center position is the only aim point.
        #[cfg_attr(feature = "serde", serde(default))]
        targetable_positions: Vec<WPos>,
    },
}

impl Target {
    pub fn terrain(position: WPos) -> Self {
        Self::Terrain { position }
    }

    pub fn actor(id: EntityId, center_position: WPos) -> Self {
        Self::Actor {
            id,
            center_position,
            targetable_positions: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    pub fn center_position(&self) -> Option<WPos> {
        match self {
            Self::Invalid => None,
            Self::Terrain { position } => Some(*position),
            Self::Actor {
                center_position, ..
            } => Some(*center_position),
        }
    }

    /// Aim point weapons should align with when fired from `from`.
    ///
    /// Picks the targetable position closest to `from`; ties keep the first
    /// listed position.
    pub fn targeted_position(&self, from: WPos) -> Option<WPos> {
        match self {
            Self::Invalid => None,
            Self::Terrain { position } => Some(*position),
            Self::Actor {
                center_position,
                targetable_positions,
                ..
            } => Some(
                targetable_positions
                    .iter()
                    .copied()
                    .min_by_key(|p| (*p - from).length_squared())
                    .unwrap_or(*center_position),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_has_no_aim_point() {
        assert!(!Target::Invalid.is_valid());
        assert_eq!(Target::Invalid.targeted_position(WPos::ZERO), None);
    }

    #[test]
    fn actor_without_aim_points_uses_center() {
        let target = Target::actor(EntityId(4), WPos::new(10, 20, 0));
        assert_eq!(
            target.targeted_position(WPos::ZERO),
            Some(WPos::new(10, 20, 0))
        );
    }

    #[test]
    fn actor_aim_point_is_closest_to_attacker() {
        let target = Target::Actor {
            id: EntityId(1),
            center_position: WPos::new(0, 0, 0),
            targetable_positions: vec![WPos::new(-500, 0, 0), WPos::new(500, 0, 0)],
        };

        assert_eq!(
            target.targeted_position(WPos::new(2000, 0, 0)),
            Some(WPos::new(500, 0, 0))
        );
        assert_eq!(
            target.targeted_position(WPos::new(-2000, 0, 0)),
            Some(WPos::new(-500, 0, 0))
        );
    }
}
