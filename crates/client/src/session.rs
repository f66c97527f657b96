//! Input-driven session over a [`World`].
//!
//! The session is the only caller of [`World::do_action`] for external
//! commands: each submitted command becomes one action for the currently
//! controlled actor, after which [`World::simulate`] runs every other actor
//! until someone awaits input again.

use game_core::{EntityId, SimulationError, World};

use crate::Command;

/// Result of one submitted command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the action committed and consumed time.
    pub committed: bool,
    /// Log lines appended since the previous submission.
    pub messages: Vec<String>,
}

pub struct Session {
    world: World,
    log_cursor: usize,
}

impl Session {
    /// Wraps `world` and runs it until the first controlled actor awaits input.
    pub fn new(mut world: World) -> Result<Self, SimulationError> {
        world.simulate()?;
        Ok(Self {
            world,
            log_cursor: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// The actor the next command is issued for.
    pub fn controlled(&self) -> Option<EntityId> {
        self.world.controlled()
    }

    /// Applies `command` to the controlled actor and advances the simulation.
    pub fn submit(&mut self, command: Command) -> Result<Outcome, SimulationError> {
        let Some(mut action) = command.action() else {
            return Ok(self.outcome(false));
        };
        if self.world.controlled().is_none() {
            self.world.simulate()?;
        }
        let Some(entity) = self.world.controlled() else {
            return Ok(self.outcome(false));
        };

        let committed = self.world.do_action(entity, action.as_mut())?;
        tracing::debug!(entity = %entity, ?command, committed, "command submitted");
        self.world.simulate()?;
        Ok(self.outcome(committed))
    }

    /// Log lines not yet handed out by [`Session::submit`].
    pub fn take_messages(&mut self) -> Vec<String> {
        let lines = self.world.log.since(self.log_cursor).to_vec();
        self.log_cursor = self.world.log.len();
        lines
    }

    fn outcome(&mut self, committed: bool) -> Outcome {
        Outcome {
            committed,
            messages: self.take_messages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        Archetype, Direction, EntityTags, GameConfig, GeneratedWorld, GridDimensions, Placement,
        Position, Tick, TileGrid,
    };

    fn session(placements: Vec<Placement>) -> Session {
        let layout = GeneratedWorld {
            grid: TileGrid::walled(GridDimensions::new(9, 7, 1)),
            placements,
        };
        let world = World::from_generated(GameConfig::default(), &layout).unwrap();
        Session::new(world).unwrap()
    }

    #[test]
    fn movement_advances_time_and_returns_control() {
        let mut session = session(vec![Placement::new(Position::new(2, 2, 0), Archetype::Player)]);
        let player = session.controlled().unwrap();

        let outcome = session.submit(Command::Bump(Direction::EAST)).unwrap();

        assert!(outcome.committed);
        assert_eq!(session.controlled(), Some(player));
        assert_eq!(session.world().clock(), Tick(100));
        assert_eq!(
            session.world().entities.location(player),
            Some(Position::new(3, 2, 0))
        );
    }

    #[test]
    fn impossible_command_costs_nothing_and_reports_reason() {
        let mut session = session(vec![Placement::new(Position::new(1, 1, 0), Archetype::Player)]);

        let outcome = session.submit(Command::Pickup).unwrap();

        assert!(!outcome.committed);
        assert_eq!(outcome.messages, vec!["No items on floor.".to_string()]);
        assert_eq!(session.world().clock(), Tick(0));
    }

    #[test]
    fn messages_are_handed_out_once() {
        let mut session = session(vec![
            Placement::new(Position::new(1, 1, 0), Archetype::Player),
            Placement::new(
                Position::new(1, 1, 0),
                Archetype::Item {
                    name: "fuse".into(),
                    drive_core: false,
                },
            ),
        ]);

        let first = session.submit(Command::Pickup).unwrap();
        assert_eq!(first.messages, vec!["You pick up the fuse.".to_string()]);

        let second = session.submit(Command::Wait).unwrap();
        assert!(second.messages.is_empty());
    }

    #[test]
    fn monster_defeats_idle_player() {
        let mut session = session(vec![
            Placement::new(Position::new(1, 1, 0), Archetype::Player),
            Placement::new(Position::new(5, 1, 0), Archetype::Monster),
        ]);

        let mut result = Ok(Outcome::default());
        for _ in 0..10 {
            result = session.submit(Command::Wait);
            if result.is_err() {
                break;
            }
        }

        let player = session.world().primary().unwrap();
        assert!(matches!(
            result,
            Err(SimulationError::PrimaryDefeated { entity, .. }) if entity == player
        ));
        let body = session.world().entities.get(player).unwrap();
        assert!(body.tags.contains(EntityTags::DEFEATED));
    }

    #[test]
    fn quit_is_not_submitted() {
        let mut session = session(vec![Placement::new(Position::new(1, 1, 0), Archetype::Player)]);
        let outcome = session.submit(Command::Quit).unwrap();
        assert!(!outcome.committed);
        assert_eq!(session.world().clock(), Tick(0));
    }
}
