use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::action::Interaction;
use crate::ai::Policy;
use crate::engine::Actor;
use crate::env::SpawnError;

use super::{EntityId, Position};

bitflags! {
    /// Marker tags attached to an entity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityTags: u8 {
        /// Physically blocks movement into its tile.
        const BLOCKING   = 1 << 0;
        /// Can be picked up and held.
        const ITEM       = 1 << 1;
        /// Lost its actor capability to an attack.
        const DEFEATED   = 1 << 2;
        /// A spare drive core that fits a drive socket.
        const DRIVE_CORE = 1 << 3;
    }
}

/// Typed component record for one entity. Every capability is optional.
#[derive(Debug, Default)]
pub struct EntityRecord {
    pub name: Option<String>,
    pub glyph: Option<char>,
    pub location: Option<Position>,
    /// Containment relation: the entity holding this one.
    pub held_by: Option<EntityId>,
    pub move_speed: Option<u64>,
    pub attack_speed: Option<u64>,
    pub tags: EntityTags,
    pub interaction: Option<Interaction>,
    pub policy: Option<Policy>,
    pub actor: Option<Actor>,
}

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.location = Some(position);
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: EntityTags) -> Self {
        self.tags |= tags;
        self
    }

    #[must_use]
    pub fn with_move_speed(mut self, speed: u64) -> Self {
        self.move_speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_attack_speed(mut self, speed: u64) -> Self {
        self.attack_speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.tags.contains(EntityTags::BLOCKING)
    }

    pub fn is_item(&self) -> bool {
        self.tags.contains(EntityTags::ITEM)
    }

    /// Display name, falling back to a placeholder.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("???")
    }
}

/// Associative entity store keyed by [`EntityId`].
///
/// Iteration order is ascending id, which keeps every predicate query
/// deterministic.
#[derive(Debug, Default)]
pub struct EntityStore {
    next_id: u32,
    records: BTreeMap<EntityId, EntityRecord>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under a fresh id.
    ///
    /// Fails once the id space is exhausted; ids are never recycled.
    pub fn insert(&mut self, record: EntityRecord) -> Result<EntityId, SpawnError> {
        let id = EntityId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(SpawnError::IdsExhausted)?;
        self.records.insert(id, record);
        Ok(id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<EntityRecord> {
        self.records.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.records.get_mut(&id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.get(id)?.actor.as_ref()
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.get_mut(id)?.actor.as_mut()
    }

    pub fn location(&self, id: EntityId) -> Option<Position> {
        self.get(id)?.location
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &EntityRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// All entities satisfying `predicate`.
    pub fn query<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = (EntityId, &'a EntityRecord)>
    where
        P: Fn(EntityId, &EntityRecord) -> bool + 'a,
    {
        self.iter().filter(move |(id, record)| predicate(*id, *record))
    }

    /// All entities located exactly at `position`.
    pub fn at(&self, position: Position) -> impl Iterator<Item = (EntityId, &EntityRecord)> {
        self.query(move |_, record| record.location == Some(position))
    }

    /// All entities held by `holder`.
    pub fn held_by(&self, holder: EntityId) -> impl Iterator<Item = (EntityId, &EntityRecord)> {
        self.query(move |_, record| record.held_by == Some(holder))
    }
}
