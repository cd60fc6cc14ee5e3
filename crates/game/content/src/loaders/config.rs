//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.frame_rate_hz == 0 {
            anyhow::bail!("frame_rate_hz must be greater than zero");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = ConfigLoader::parse("seed = 42\n").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.frame_rate_hz, GameConfig::DEFAULT_FRAME_RATE_HZ);
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        let err = ConfigLoader::parse("frame_rate_hz = 0\n").unwrap_err();
        assert!(err.to_string().contains("frame_rate_hz"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
