use crate::state::{EntityId, World};

use super::{Action, ActionResult};

/// Take a specific item off the floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupItem {
    pub target: EntityId,
}

impl PickupItem {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }
}

impl Action for PickupItem {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(item) = world.entities.get(self.target) else {
            return ActionResult::impossible("Not an item.");
        };
        if !item.is_item() {
            return ActionResult::impossible("Not an item.");
        }
        if item.held_by.is_some() {
            return ActionResult::impossible("Already taken.");
        }
        match (item.location, world.entities.location(actor)) {
            (Some(there), Some(here)) if there == here => {}
            _ => return ActionResult::impossible("Out of reach."),
        }

        let name = item.display_name().to_owned();
        if let Some(item) = world.entities.get_mut(self.target) {
            item.location = None;
            item.held_by = Some(actor);
        }
        world.report(actor, "{You} pick up the {item}.", &[("item", &name)]);
        ActionResult::success(world.config.pickup_cost)
    }
}

/// Pick up whatever lies on the actor's tile.
///
/// Only the first eligible item (lowest id) is taken per action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickupGeneral;

impl Action for PickupGeneral {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(here) = world.entities.location(actor) else {
            return ActionResult::impossible("No items on floor.");
        };
        let candidates: Vec<EntityId> = world
            .entities
            .at(here)
            .filter(|(id, record)| *id != actor && record.is_item())
            .map(|(id, _)| id)
            .collect();

        for candidate in candidates {
            let result = PickupItem::new(candidate).perform(world, actor);
            if result.is_success() {
                return result;
            }
        }
        ActionResult::impossible("No items on floor.")
    }
}
