use crate::state::{Direction, EntityId, EntityTags, World};

use super::{Action, ActionResult};

const DEFEATED_GLYPH: char = '%';

/// Melee attack against an adjacent actor.
///
/// A hit removes the target's actor capability outright; its body stays on
/// the map as a non-blocking remnant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attack {
    pub target: EntityId,
}

impl Attack {
    pub fn new(target: EntityId) -> Self {
        Self { target }
    }
}

impl Action for Attack {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        if self.target == actor {
            return ActionResult::impossible("");
        }
        let (Some(here), Some(there)) = (
            world.entities.location(actor),
            world.entities.location(self.target),
        ) else {
            return ActionResult::impossible("");
        };
        // Silent: a failed reach is routine inside fallback chains.
        if !here.is_adjacent(there) {
            return ActionResult::impossible("");
        }
        if world.entities.actor(self.target).is_none() {
            return ActionResult::impossible("Nothing to attack.");
        }

        let speed = world
            .entities
            .get(actor)
            .and_then(|record| record.attack_speed)
            .unwrap_or(world.config.default_attack_speed);

        world.detach_actor(self.target);
        let name = match world.entities.get_mut(self.target) {
            Some(target) => {
                target.tags.insert(EntityTags::DEFEATED);
                target.tags.remove(EntityTags::BLOCKING);
                target.glyph = Some(DEFEATED_GLYPH);
                target.display_name().to_owned()
            }
            None => String::from("???"),
        };
        world.report(actor, "{You} destroy the {target}.", &[("target", &name)]);
        tracing::info!(attacker = %actor, target = %self.target, "target defeated");

        ActionResult::success(speed)
    }
}

/// Attack whatever actor stands in the given direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpAttack {
    pub direction: Direction,
}

impl BumpAttack {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Action for BumpAttack {
    fn perform(&mut self, world: &mut World, actor: EntityId) -> ActionResult {
        let Some(origin) = world.entities.location(actor) else {
            return ActionResult::impossible("Nothing to attack.");
        };
        let destination = origin.step(self.direction);
        let target = world
            .entities
            .at(destination)
            .find(|(_, record)| record.actor.is_some())
            .map(|(id, _)| id);

        match target {
            Some(target) => Attack::new(target).perform(world, actor),
            None => ActionResult::impossible("Nothing to attack."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{EntityRecord, GridDimensions, Position, TileGrid};

    fn arena() -> (World, EntityId, EntityId) {
        let mut world = World::new(
            GameConfig::default(),
            TileGrid::walled(GridDimensions::new(8, 8, 1)),
        );
        let attacker = world
            .spawn(
                EntityRecord::new()
                    .named("robot")
                    .at(Position::new(2, 2, 0))
                    .with_attack_speed(80)
                    .with_tags(EntityTags::BLOCKING),
            )
            .unwrap();
        let victim = world
            .spawn(
                EntityRecord::new()
                    .named("drone")
                    .with_glyph('d')
                    .at(Position::new(3, 2, 0))
                    .with_tags(EntityTags::BLOCKING),
            )
            .unwrap();
        world.attach_actor(attacker, false).unwrap();
        world.attach_actor(victim, false).unwrap();
        (world, attacker, victim)
    }

    #[test]
    fn attack_defeats_adjacent_actor() {
        let (mut world, attacker, victim) = arena();

        let result = Attack::new(victim).perform(&mut world, attacker);

        assert_eq!(result, ActionResult::success(80));
        let record = world.entities.get(victim).unwrap();
        assert!(record.actor.is_none());
        assert!(record.tags.contains(EntityTags::DEFEATED));
        assert!(!record.is_blocking());
        assert_eq!(record.glyph, Some('%'));
        assert_eq!(world.log.lines().last().map(String::as_str), Some("You destroy the drone."));
    }

    #[test]
    fn attack_out_of_reach_is_silent_and_inert() {
        let (mut world, attacker, victim) = arena();
        world.entities.get_mut(victim).unwrap().location = Some(Position::new(5, 5, 0));

        let result = Attack::new(victim).perform(&mut world, attacker);

        assert_eq!(result.reason(), Some(""));
        assert!(world.entities.actor(victim).is_some());
        assert!(world.log.is_empty());
    }

    #[test]
    fn bump_attack_without_actor_is_impossible() {
        let (mut world, attacker, _) = arena();
        let result = BumpAttack::new(Direction::WEST).perform(&mut world, attacker);
        assert_eq!(result.reason(), Some("Nothing to attack."));

        let hit = BumpAttack::new(Direction::EAST).perform(&mut world, attacker);
        assert!(hit.is_success());
    }
}
