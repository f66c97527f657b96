//! Content factory for loading content from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, GeneratedWorld};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── maps/
///     └── derelict.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the layout `maps/<name>.ron`.
    pub fn load_map(&self, name: &str) -> LoadResult<GeneratedWorld> {
        let path = self.data_dir.join("maps").join(format!("{name}.ron"));
        MapLoader::load(&path)
    }
}
