//! Content factory for loading enemy content from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, EnemyLoader, LoadResult, read_file};
use crate::template::EnemyTemplate;

/// Content factory that loads all enemy content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// └── scenarios/
///     ├── ridge.ron
///     └── gauntlet.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data set shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        let path = self.data_dir.join("enemies.ron");
        EnemyLoader::load(&path)
    }

    /// Path of `scenarios/{scenario_name}.ron`.
    pub fn scenario_path(&self, scenario_name: &str) -> PathBuf {
        self.data_dir
            .join("scenarios")
            .join(format!("{}.ron", scenario_name))
    }

    /// Read the raw RON text of a scenario.
    ///
    /// # Arguments
    ///
    /// * `scenario_name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario_source(&self, scenario_name: &str) -> LoadResult<String> {
        read_file(&self.scenario_path(scenario_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
