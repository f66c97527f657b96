//! Action domain - fused validate-then-commit units of game logic.
//!
//! # Protocol
//!
//! Every action exposes a single [`Action::perform`]. Implementations check
//! all preconditions first and return [`ActionResult::Impossible`] without
//! touching the world if any fails. Only after every check passes do they
//! mutate and return [`ActionResult::Success`] with the time cost.
//!
//! Because an impossible action never mutates, candidates can be tried in
//! order without rollback; see [`first_success`].
//!
//! # Module Structure
//!
//! - `wait`: Wait and Standby
//! - `movement`: MoveTo, MoveBy, MoveTowards, Follow
//! - `combat`: Attack, BumpAttack
//! - `interact`: interaction handlers, Interact, BumpInteract, Bump
//! - `inventory`: PickupItem, PickupGeneral
//! - `control`: PlayerControl, RemoteControl, ReturnControlToPlayer

pub mod combat;
pub mod control;
pub mod interact;
pub mod inventory;
pub mod movement;
mod path;
pub mod wait;

pub use combat::{Attack, BumpAttack};
pub use control::{PlayerControl, RemoteControl, ReturnControlToPlayer};
pub use interact::{Bump, BumpInteract, Interact, Interaction};
pub use inventory::{PickupGeneral, PickupItem};
pub use movement::{Follow, MoveBy, MoveTo, MoveTowards};
pub use path::Pathfinder;
pub use wait::{Standby, Wait};

use std::fmt;

use crate::state::{EntityId, World};

/// Outcome of [`Action::perform`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// The mutation already happened; reschedule `time_cost` ticks later.
    Success { time_cost: u64 },
    /// Nothing was mutated; an alternative may be tried.
    Impossible { reason: String },
}

impl ActionResult {
    pub fn success(time_cost: u64) -> Self {
        Self::Success { time_cost }
    }

    pub fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn time_cost(&self) -> Option<u64> {
        match self {
            Self::Success { time_cost } => Some(*time_cost),
            Self::Impossible { .. } => None,
        }
    }

    /// Human-readable reason of an impossible result.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Impossible { reason } => Some(reason),
        }
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { time_cost } => write!(f, "success ({time_cost} ticks)"),
            Self::Impossible { reason } => write!(f, "impossible: {reason}"),
        }
    }
}

/// A unit of resolvable game logic.
///
/// `perform` is the only mutation point of the simulation and runs to
/// completion synchronously.
pub trait Action: fmt::Debug {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult;
}

/// Tries `candidates` in order and returns the first success.
///
/// When every candidate is impossible the last reason is returned.
pub fn first_success(
    world: &mut World,
    actor: EntityId,
    candidates: &mut [&mut dyn Action],
) -> ActionResult {
    let mut last = ActionResult::impossible("Nothing to do.");
    for candidate in candidates.iter_mut() {
        last = candidate.perform(world, actor);
        if last.is_success() {
            break;
        }
    }
    last
}
