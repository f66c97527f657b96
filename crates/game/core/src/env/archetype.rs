use crate::action::Interaction;
use crate::ai::Policy;
use crate::state::{EntityRecord, EntityTags, Position};

/// Entity blueprints a generator can place.
#[derive(Clone, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Archetype {
    /// The primary entity. Starts out controlled.
    Player,
    /// Hostile creature that hunts the primary.
    Monster,
    /// Idle machine that can be remote-controlled.
    Robot,
    /// Closed door.
    Door,
    /// Loose item on the floor.
    Item {
        name: String,
        #[cfg_attr(feature = "serde", serde(default))]
        drive_core: bool,
    },
    /// Socket machine that accepts a drive core.
    DriveCore,
}

impl Archetype {
    /// Component record for a fresh entity of this archetype, without location.
    pub fn record(&self) -> EntityRecord {
        match self {
            Self::Player => EntityRecord::new()
                .named("player")
                .with_glyph('@')
                .with_tags(EntityTags::BLOCKING)
                .with_interaction(Interaction::RemoteTerminal)
                .with_policy(Policy::Standby),
            Self::Monster => EntityRecord::new()
                .named("alien")
                .with_glyph('a')
                .with_tags(EntityTags::BLOCKING)
                .with_policy(Policy::FightPlayer),
            Self::Robot => EntityRecord::new()
                .named("robot")
                .with_glyph('R')
                .with_tags(EntityTags::BLOCKING)
                .with_interaction(Interaction::RemoteTerminal)
                .with_policy(Policy::Standby),
            Self::Door => EntityRecord::new()
                .named("door")
                .with_glyph('+')
                .with_tags(EntityTags::BLOCKING)
                .with_interaction(Interaction::Door { open: false }),
            Self::Item { name, drive_core } => {
                let record = EntityRecord::new()
                    .named(name.clone())
                    .with_tags(EntityTags::ITEM);
                if *drive_core {
                    record.with_glyph('°').with_tags(EntityTags::DRIVE_CORE)
                } else {
                    record.with_glyph('!')
                }
            }
            Self::DriveCore => EntityRecord::new()
                .named("drive core")
                .with_glyph('╪')
                .with_tags(EntityTags::BLOCKING)
                .with_interaction(Interaction::DriveSocket),
        }
    }

    /// `Some(controlled)` when the archetype carries the actor capability.
    pub fn actor(&self) -> Option<bool> {
        match self {
            Self::Player => Some(true),
            Self::Monster | Self::Robot => Some(false),
            Self::Door | Self::Item { .. } | Self::DriveCore => None,
        }
    }
}

/// One entity in a generated layout.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub position: Position,
    pub archetype: Archetype,
}

impl Placement {
    pub fn new(position: Position, archetype: Archetype) -> Self {
        Self {
            position,
            archetype,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_living_archetypes_are_actors() {
        assert_eq!(Archetype::Player.actor(), Some(true));
        assert_eq!(Archetype::Robot.actor(), Some(false));
        assert_eq!(Archetype::Door.actor(), None);
    }

    #[test]
    fn spare_cores_are_tagged() {
        let core = Archetype::Item {
            name: "spare drive core".into(),
            drive_core: true,
        }
        .record();
        assert!(core.tags.contains(EntityTags::ITEM | EntityTags::DRIVE_CORE));
        assert!(!core.is_blocking());
        assert_eq!(Archetype::DriveCore.to_string(), "drive_core");
    }
}
