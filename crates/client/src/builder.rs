//! Session builder.

use anyhow::{Context, Result};
use game_core::{GameConfig, GeneratedWorld, World, WorldGenerator};

use crate::Session;

/// Builder for constructing a [`Session`] from loaded content.
///
/// The layout is required; the engine config falls back to defaults.
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<GameConfig>,
    layout: Option<GeneratedWorld>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the world layout (required).
    pub fn layout(mut self, generator: &dyn WorldGenerator) -> Self {
        self.layout = Some(generator.generate());
        self
    }

    /// Build the world and run it until the player awaits a command.
    pub fn build(self) -> Result<Session> {
        let layout = self.layout.context("layout is required")?;
        let config = self.config.unwrap_or_default();

        let world =
            World::from_generated(config, &layout).context("failed to construct world")?;
        Session::new(world).context("failed to start simulation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Archetype, GridDimensions, Placement, Position, TileGrid};

    #[test]
    fn layout_is_required() {
        let error = SessionBuilder::new().build().err().unwrap();
        assert!(error.to_string().contains("layout is required"));
    }

    #[test]
    fn builds_session_awaiting_player() {
        let layout = GeneratedWorld {
            grid: TileGrid::walled(GridDimensions::new(5, 5, 1)),
            placements: vec![Placement::new(Position::new(2, 2, 0), Archetype::Player)],
        };
        let session = SessionBuilder::new().layout(&layout).build().unwrap();
        assert_eq!(session.controlled(), session.world().primary());
    }
}
