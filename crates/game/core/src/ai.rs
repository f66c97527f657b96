//! Decision policies for actors that are not under external control.
//!
//! A policy inspects the world and picks one action per turn. The chosen
//! action is committed through [`World::do_action`] by the actor lifecycle;
//! policies never mutate the world themselves.

use crate::action::{Action, ActionResult, Attack, Follow, Standby, Wait, first_success};
use crate::state::{EntityId, World};

/// Decision policy attached to an entity.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Policy {
    /// Idle. Used by robots and by the primary while control is elsewhere.
    #[default]
    Standby,
    /// Spend a turn doing nothing, at full cost.
    Wait,
    /// Chase the primary entity and attack it once adjacent.
    FightPlayer,
}

impl Policy {
    /// Chooses the next action for `entity`.
    pub fn decide(self, world: &World, _entity: EntityId) -> Box<dyn Action> {
        match self {
            Self::Standby => Box::new(Standby),
            Self::Wait => Box::new(Wait),
            Self::FightPlayer => match world.primary() {
                Some(primary) => Box::new(FightPlayer::new(primary)),
                None => Box::new(Standby),
            },
        }
    }
}

/// Follow the quarry, and attack it when there is nowhere left to go.
#[derive(Clone, Debug)]
pub struct FightPlayer {
    follow: Follow,
    attack: Attack,
}

impl FightPlayer {
    pub fn new(quarry: EntityId) -> Self {
        Self {
            follow: Follow::new(quarry),
            attack: Attack::new(quarry),
        }
    }
}

impl Action for FightPlayer {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        first_success(world, actor, &mut [&mut self.follow, &mut self.attack])
    }
}
