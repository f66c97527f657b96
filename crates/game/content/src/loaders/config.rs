//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Fields missing from the file keep their [`GameConfig::default`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "game config loaded");
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("retry_delay = 25\nwait_cost = 50\n").unwrap();
        assert_eq!(config.retry_delay, 25);
        assert_eq!(config.wait_cost, 50);
        assert_eq!(config.default_move_speed, 100);
        assert_eq!(config.message_capacity, 64);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let error = ConfigLoader::parse("retry_delay = \"soon\"").unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }
}
