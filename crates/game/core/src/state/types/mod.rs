pub mod common;
pub mod entities;
pub mod world;

// Re-export common types
pub use common::{Direction, EntityId, Position, Tick};

// Re-export entity store types
pub use entities::{EntityRecord, EntityStore, EntityTags};

// Re-export tile grid types
pub use world::{GridDimensions, PlaneMask, TerrainKind, TileGrid};
