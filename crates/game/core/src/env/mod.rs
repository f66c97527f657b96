//! World construction from external generators.
//!
//! A [`WorldGenerator`] is the read-only collaborator that supplies the tile
//! grid and the initial entity placement. [`World::from_generated`] turns its
//! output into a live world: archetypes are expanded into entity records,
//! actors are attached (and therefore scheduled), and the single player
//! placement becomes the primary entity.
mod archetype;
mod error;

pub use archetype::{Archetype, Placement};
pub use error::SpawnError;

use crate::config::GameConfig;
use crate::state::{EntityId, TileGrid, World};

/// Output of a world generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWorld {
    pub grid: TileGrid,
    pub placements: Vec<Placement>,
}

/// Source of initial world layouts.
pub trait WorldGenerator {
    fn generate(&self) -> GeneratedWorld;
}

impl WorldGenerator for GeneratedWorld {
    fn generate(&self) -> GeneratedWorld {
        self.clone()
    }
}

impl World {
    /// Builds a world from `generator` output.
    ///
    /// Exactly one [`Archetype::Player`] placement is required; it becomes the
    /// primary entity and starts out controlled.
    pub fn from_generated(
        config: GameConfig,
        generator: &dyn WorldGenerator,
    ) -> Result<Self, SpawnError> {
        let GeneratedWorld { grid, placements } = generator.generate();

        let players = placements
            .iter()
            .filter(|placement| matches!(placement.archetype, Archetype::Player))
            .count();
        match players {
            0 => return Err(SpawnError::MissingPlayer),
            1 => {}
            count => return Err(SpawnError::MultiplePlayers { count }),
        }
        if let Some(placement) = placements
            .iter()
            .find(|placement| !grid.contains(placement.position))
        {
            return Err(SpawnError::OutOfBounds {
                position: placement.position,
            });
        }

        let mut world = World::new(config, grid);
        for placement in &placements {
            let id = world.spawn_archetype(placement)?;
            if matches!(placement.archetype, Archetype::Player) {
                world.set_primary(id);
            }
        }

        tracing::info!(
            entities = world.entities.len(),
            queued = world.queued_turns(),
            "world constructed"
        );
        Ok(world)
    }

    /// Spawns one placement and attaches its actor capability.
    pub fn spawn_archetype(&mut self, placement: &Placement) -> Result<EntityId, SpawnError> {
        let archetype = &placement.archetype;
        let id = self.spawn(archetype.record().at(placement.position))?;
        if let Some(controlled) = archetype.actor() {
            self.attach_actor(id, controlled)?;
        }
        tracing::debug!(entity = %id, archetype = %archetype, position = %placement.position, "spawned");
        Ok(id)
    }
}
