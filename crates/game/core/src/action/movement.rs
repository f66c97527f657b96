use crate::state::{Direction, EntityId, Position, World};

use super::{Action, ActionResult, Pathfinder};

/// Step onto a specific tile.
///
/// Costs the actor's move speed, or three halves of it (integer) when the
/// step changes both planar axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTo {
    pub destination: Position,
}

impl MoveTo {
    pub fn new(destination: Position) -> Self {
        Self { destination }
    }
}

impl Action for MoveTo {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(origin) = world.entities.location(actor) else {
            return ActionResult::impossible("Nowhere to move from.");
        };
        if !world.is_passable(self.destination, actor) {
            return ActionResult::impossible("Blocked.");
        }

        let speed = world
            .entities
            .get(actor)
            .and_then(|record| record.move_speed)
            .unwrap_or(world.config.default_move_speed);
        let Some(record) = world.entities.get_mut(actor) else {
            return ActionResult::impossible("Nowhere to move from.");
        };
        record.location = Some(self.destination);

        if origin.is_diagonal_to(self.destination) {
            ActionResult::success(speed.saturating_mul(3) / 2)
        } else {
            ActionResult::success(speed)
        }
    }
}

/// Step one tile in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveBy {
    pub direction: Direction,
}

impl MoveBy {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Action for MoveBy {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(origin) = world.entities.location(actor) else {
            return ActionResult::impossible("Nowhere to move from.");
        };
        MoveTo::new(origin.step(self.direction)).perform(world, actor)
    }
}

/// Naive step towards a position, ignoring obstacles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTowards {
    pub target: Position,
}

impl MoveTowards {
    pub fn new(target: Position) -> Self {
        Self { target }
    }
}

impl Action for MoveTowards {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(origin) = world.entities.location(actor) else {
            return ActionResult::impossible("Nowhere to move from.");
        };
        match Direction::towards(origin, self.target) {
            Some(direction) => MoveBy::new(direction).perform(world, actor),
            None => ActionResult::impossible("Already there."),
        }
    }
}

/// Path towards another entity and take the first step.
///
/// The pathfinder is built lazily from the actor's current plane the first
/// time the action runs and is cached on this instance only.
#[derive(Clone, Debug)]
pub struct Follow {
    pub target: EntityId,
    pathfinder: Option<Pathfinder>,
}

impl Follow {
    pub fn new(target: EntityId) -> Self {
        Self {
            target,
            pathfinder: None,
        }
    }

    pub fn has_pathfinder(&self) -> bool {
        self.pathfinder.is_some()
    }
}

impl Action for Follow {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let (Some(here), Some(there)) = (
            world.entities.location(actor),
            world.entities.location(self.target),
        ) else {
            return ActionResult::impossible("Lost track of the target.");
        };
        if here.z != there.z {
            return ActionResult::impossible("Target is on another deck.");
        }

        let pathfinder = self
            .pathfinder
            .get_or_insert_with(|| Pathfinder::new(world.grid.plane_walkability(here.z)));
        let path = pathfinder.path((here.x, here.y), (there.x, there.y));

        match path.as_slice() {
            [] if here == there => ActionResult::impossible("Destination reached."),
            [] => ActionResult::impossible("No path."),
            [_] => ActionResult::impossible("Destination reached."),
            [(x, y), ..] => MoveTo::new(here.with_xy(*x, *y)).perform(world, actor),
        }
    }
}
