//! Client configuration from environment variables.
use std::env;
use std::path::PathBuf;

/// Defaults for commands that are not given explicit paths.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `units.ron`, `map.toml` and `scenarios/`.
    pub data_dir: PathBuf,
    /// Upper bound on evaluated ticks; `None` runs every frame.
    pub max_ticks: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            max_ticks: None,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AIRSTRIKE_DATA_DIR` - Content directory (default: `data`)
    /// - `AIRSTRIKE_MAX_TICKS` - Tick limit for `run` (default: unlimited)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("AIRSTRIKE_DATA_DIR") {
            config.data_dir = dir;
        }

        if let Some(ticks) = read_env::<usize>("AIRSTRIKE_MAX_TICKS") {
            config.max_ticks = Some(ticks.max(1));
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
