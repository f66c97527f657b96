//! Contextual interaction with world objects.
//!
//! Interactable entities carry an [`Interaction`] handler. [`Interact`]
//! dispatches to it, and [`Bump`] is the directional catch-all used by the
//! input layer: move if possible, else interact, else attack.

use crate::state::{Direction, EntityId, EntityTags, World};

use super::{
    Action, ActionResult, BumpAttack, MoveBy, RemoteControl, first_success,
};

const OPEN_DOOR_GLYPH: char = '\'';

/// Interaction handler attached to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Sliding door. Blocks while closed.
    Door { open: bool },
    /// Remote link: interacting hands control to the owning actor.
    RemoteTerminal,
    /// Machine accepting a drive core from the issuer's inventory.
    DriveSocket,
}

impl Interaction {
    /// Runs the handler of `target` on behalf of `issuer`.
    pub fn interact(self, world: &mut World, issuer: EntityId, target: EntityId) -> ActionResult {
        match self {
            Self::Door { open: true } => ActionResult::impossible("The door is already open."),
            Self::Door { open: false } => {
                let Some(door) = world.entities.get_mut(target) else {
                    return ActionResult::impossible("Not interactable.");
                };
                door.interaction = Some(Self::Door { open: true });
                door.tags.remove(EntityTags::BLOCKING);
                door.glyph = Some(OPEN_DOOR_GLYPH);
                world.report(issuer, "{You} open the door.", &[]);
                ActionResult::success(world.config.interact_cost)
            }
            Self::RemoteTerminal => RemoteControl::new(target).perform(world, issuer),
            Self::DriveSocket => {
                let core = world
                    .entities
                    .held_by(issuer)
                    .find(|(_, record)| record.tags.contains(EntityTags::DRIVE_CORE))
                    .map(|(id, _)| id);
                let Some(core) = core else {
                    return ActionResult::impossible("You have no drive core.");
                };
                if let Some(record) = world.entities.get_mut(core) {
                    record.held_by = Some(target);
                }
                world.report(issuer, "{You} install the core.", &[]);
                ActionResult::success(world.config.interact_cost)
            }
        }
    }
}

/// Use the interaction handler of a specific entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interact {
    pub target: EntityId,
}

impl Interact {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }
}

impl Action for Interact {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        match world
            .entities
            .get(self.target)
            .and_then(|record| record.interaction)
        {
            Some(handler) => handler.interact(world, actor, self.target),
            None => ActionResult::impossible("Not interactable."),
        }
    }
}

/// Interact with the first interactable occupant in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpInteract {
    pub direction: Direction,
}

impl BumpInteract {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Action for BumpInteract {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(origin) = world.entities.location(actor) else {
            return ActionResult::impossible("No target.");
        };
        let target = world
            .entities
            .at(origin.step(self.direction))
            .find(|(_, record)| record.interaction.is_some())
            .map(|(id, _)| id);

        match target {
            Some(target) => Interact::new(target).perform(world, actor),
            None => ActionResult::impossible("No target."),
        }
    }
}

/// Move, else interact, else attack in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bump {
    pub direction: Direction,
}

impl Bump {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Action for Bump {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        first_success(
            world,
            actor,
            &mut [
                &mut MoveBy::new(self.direction),
                &mut BumpInteract::new(self.direction),
                &mut BumpAttack::new(self.direction),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{EntityRecord, GridDimensions, Position, TileGrid};

    fn room() -> (World, EntityId) {
        let mut world = World::new(
            GameConfig::default(),
            TileGrid::walled(GridDimensions::new(8, 8, 1)),
        );
        let actor = world
            .spawn(
                EntityRecord::new()
                    .at(Position::new(3, 3, 0))
                    .with_tags(EntityTags::BLOCKING),
            )
            .unwrap();
        (world, actor)
    }

    fn door(world: &mut World, at: Position) -> EntityId {
        world
            .spawn(
                EntityRecord::new()
                    .named("door")
                    .with_glyph('+')
                    .at(at)
                    .with_tags(EntityTags::BLOCKING)
                    .with_interaction(Interaction::Door { open: false }),
            )
            .unwrap()
    }

    #[test]
    fn bumping_a_closed_door_opens_it() {
        let (mut world, actor) = room();
        let door = door(&mut world, Position::new(4, 3, 0));

        let result = Bump::new(Direction::EAST).perform(&mut world, actor);

        assert_eq!(result, ActionResult::success(100));
        assert_eq!(world.entities.location(actor), Some(Position::new(3, 3, 0)));
        let record = world.entities.get(door).unwrap();
        assert!(!record.is_blocking());
        assert_eq!(record.interaction, Some(Interaction::Door { open: true }));
        assert_eq!(world.log.lines(), ["You open the door."]);

        let walk = Bump::new(Direction::EAST).perform(&mut world, actor);
        assert!(walk.is_success());
        assert_eq!(world.entities.location(actor), Some(Position::new(4, 3, 0)));
    }

    #[test]
    fn open_door_cannot_be_opened_again() {
        let (mut world, actor) = room();
        let door = door(&mut world, Position::new(3, 4, 0));
        assert!(Interact::new(door).perform(&mut world, actor).is_success());

        let again = Interact::new(door).perform(&mut world, actor);
        assert_eq!(again.reason(), Some("The door is already open."));
    }

    #[test]
    fn plain_entities_are_not_interactable() {
        let (mut world, actor) = room();
        let crate_ = world.spawn(EntityRecord::new().at(Position::new(2, 3, 0))).unwrap();
        let result = Interact::new(crate_).perform(&mut world, actor);
        assert_eq!(result.reason(), Some("Not interactable."));

        let empty = BumpInteract::new(Direction::NORTH).perform(&mut world, actor);
        assert_eq!(empty.reason(), Some("No target."));
    }

    #[test]
    fn bump_into_wall_reports_last_failure() {
        let (mut world, actor) = room();
        world.entities.get_mut(actor).unwrap().location = Some(Position::new(1, 1, 0));
        let result = Bump::new(Direction::NORTH).perform(&mut world, actor);
        assert_eq!(result.reason(), Some("Nothing to attack."));
        assert_eq!(world.entities.location(actor), Some(Position::new(1, 1, 0)));
    }

    #[test]
    fn drive_socket_takes_held_core() {
        let (mut world, actor) = room();
        let socket = world
            .spawn(
                EntityRecord::new()
                    .at(Position::new(4, 4, 0))
                    .with_tags(EntityTags::BLOCKING)
                    .with_interaction(Interaction::DriveSocket),
            )
            .unwrap();

        let refused = Interact::new(socket).perform(&mut world, actor);
        assert_eq!(refused.reason(), Some("You have no drive core."));

        let mut core = EntityRecord::new().with_tags(EntityTags::ITEM | EntityTags::DRIVE_CORE);
        core.held_by = Some(actor);
        let core = world.spawn(core).unwrap();

        let installed = BumpInteract::new(Direction::SOUTH_EAST).perform(&mut world, actor);
        assert_eq!(installed, ActionResult::success(100));
        assert_eq!(world.entities.get(core).unwrap().held_by, Some(socket));
        assert_eq!(world.log.lines(), ["You install the core."]);
    }
}
