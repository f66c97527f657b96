//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Content location and view settings for the terminal client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and `maps/`.
    pub data_dir: PathBuf,
    /// Layout name, resolved as `maps/<map>.ron` under `data_dir`.
    pub map: String,
    /// Half-width of the printed view around the camera.
    pub view_radius: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            map: "derelict".to_string(),
            view_radius: 8,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DERELICT_DATA_DIR` - content directory (default: the bundled `data/`)
    /// - `DERELICT_MAP` - layout name under `maps/` (default: derelict)
    /// - `DERELICT_VIEW_RADIUS` - view half-width in tiles (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DERELICT_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(map) = read_env::<String>("DERELICT_MAP") {
            config.map = map;
        }
        if let Some(radius) = read_env::<u32>("DERELICT_VIEW_RADIUS") {
            config.view_radius = radius.max(2);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
