//! Control handoff between the primary entity and remote actors.

use crate::state::{EntityId, World};

use super::{Action, ActionResult};

/// Hand external control to the acting entity.
///
/// Marks the actor controlled, records it as the world's controlled actor
/// and focuses the camera on it. Always returns `Impossible("End of action.")`
/// so that no time is charged and no ticket is issued; the next action comes
/// from outside the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerControl;

impl Action for PlayerControl {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        if let Some(state) = world.entities.actor_mut(actor) {
            state.controlled = true;
            world.controlled = Some(actor);
        }
        if let Some(position) = world.entities.location(actor) {
            world.camera = position;
        }
        ActionResult::impossible("End of action.")
    }
}

/// Pass control from the issuer to another actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteControl {
    pub target: EntityId,
}

impl RemoteControl {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }
}

impl Action for RemoteControl {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        if world.primary() == Some(self.target) {
            return ReturnControlToPlayer.perform(world, actor);
        }
        if self.target == actor {
            return ActionResult::impossible("Already in control.");
        }
        if world.entities.actor(self.target).is_none() {
            return ActionResult::impossible("It does not respond.");
        }

        world.transfer_control(self.target, actor);
        world.report(actor, "{You} begin controlling the robot remotely.", &[]);
        ActionResult::success(0)
    }
}

/// Give control back to the primary entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReturnControlToPlayer;

impl Action for ReturnControlToPlayer {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(primary) = world.primary() else {
            return ActionResult::impossible("No one to return to.");
        };
        if primary == actor {
            return ActionResult::impossible("Already player.");
        }
        if world.entities.actor(primary).is_none() {
            return ActionResult::impossible("No one to return to.");
        }

        world.transfer_control(primary, actor);
        world.report(actor, "{You} stop controlling the robot.", &[]);
        ActionResult::success(0)
    }
}
