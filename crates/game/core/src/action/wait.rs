use crate::state::{EntityId, World};

use super::{Action, ActionResult};

/// Idle for one standard turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wait;

impl Action for Wait {
    fn perform(&mut self, world: &mut World, _actor: EntityId) -> ActionResult {
        ActionResult::success(world.config.wait_cost)
    }
}

/// Do nothing at all. Always impossible, so policy-driven actors fall back
/// to the retry delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standby;

impl Action for Standby {
    fn perform(&mut self, _world: &mut World, _actor: EntityId) -> ActionResult {
        ActionResult::impossible("End of action.")
    }
}
