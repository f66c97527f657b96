//! Data-driven content loaders.
//!
//! This crate reads static game content from RON/TOML data files:
//! - Engine tunables (TOML)
//! - Deck layouts: terrain rows per plane plus entity placements (RON)
//!
//! Loaded layouts implement [`game_core::WorldGenerator`] and are handed to
//! [`game_core::World::from_generated`]; content never appears in game state
//! directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MapLoader};
