//! Authoritative world representation.
//!
//! This module owns the entity store, the static tile grid, the message log,
//! and the turn bookkeeping. The [`World`] value is threaded explicitly
//! through every action and lifecycle call; there is no ambient "current
//! world".
pub mod log;
pub mod types;

pub use log::{MessageLog, format_report};
pub use types::{
    Direction, EntityId, EntityRecord, EntityStore, EntityTags, GridDimensions, PlaneMask,
    Position, TerrainKind, Tick, TileGrid,
};

use crate::config::GameConfig;
use crate::engine::TurnQueue;
use crate::env::SpawnError;

/// Explicit world/context handle.
#[derive(Debug)]
pub struct World {
    pub config: GameConfig,
    pub grid: TileGrid,
    pub entities: EntityStore,
    pub log: MessageLog,
    /// Last position focused by a control handoff.
    pub camera: Position,
    pub(crate) queue: TurnQueue<EntityId>,
    pub(crate) primary: Option<EntityId>,
    pub(crate) controlled: Option<EntityId>,
}

impl World {
    /// Creates an empty world over `grid`.
    pub fn new(config: GameConfig, grid: TileGrid) -> Self {
        Self {
            config,
            grid,
            entities: EntityStore::new(),
            log: MessageLog::new(),
            camera: Position::ORIGIN,
            queue: TurnQueue::new(),
            primary: None,
            controlled: None,
        }
    }

    /// Inserts an entity. Actor capability is attached separately through
    /// [`World::attach_actor`] so that scheduling always happens.
    ///
    /// Fails once entity ids are exhausted.
    pub fn spawn(&mut self, mut record: EntityRecord) -> Result<EntityId, SpawnError> {
        record.actor = None;
        self.entities.insert(record)
    }

    /// Removes an entity entirely, discarding any scheduled turn it held.
    pub fn despawn(&mut self, entity: EntityId) -> Option<EntityRecord> {
        self.detach_actor(entity);
        self.entities.remove(entity)
    }

    /// The designated primary entity whose defeat ends the simulation.
    pub fn primary(&self) -> Option<EntityId> {
        self.primary
    }

    pub fn set_primary(&mut self, entity: EntityId) {
        self.primary = Some(entity);
    }

    /// The live controlled actor awaiting an external command, if any.
    pub fn controlled(&self) -> Option<EntityId> {
        self.controlled
    }

    /// Current virtual time of the turn queue.
    pub fn clock(&self) -> Tick {
        self.queue.time()
    }

    /// Number of queued wake-ups, including stale ones not yet popped.
    pub fn queued_turns(&self) -> usize {
        self.queue.len()
    }

    /// Appends a formatted line to the message log.
    pub fn report(&mut self, entity: EntityId, template: &str, substitutions: &[(&str, &str)]) {
        let line = format_report(template, substitutions);
        tracing::debug!(entity = %entity, "{line}");
        self.log.push(line);
    }

    /// Whether `mover` could step onto `position`: walkable terrain with no
    /// blocking occupant other than the mover itself.
    pub fn is_passable(&self, position: Position, mover: EntityId) -> bool {
        self.grid.is_walkable(position)
            && !self
                .entities
                .at(position)
                .any(|(id, record)| id != mover && record.is_blocking())
    }
}
