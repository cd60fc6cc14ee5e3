//! Content directory resolution
//!
//! Commands accept `--data-dir`; without it the `CONTENT_DATA_DIR`
//! environment variable is used, and finally the data set bundled with
//! `game-content`.

use anyhow::{Result, bail};
use std::path::PathBuf;

use game_content::ContentFactory;

/// Build a content factory for the resolved data directory.
pub fn content_factory(data_dir: Option<PathBuf>) -> Result<ContentFactory> {
    let factory = match data_dir.or_else(|| std::env::var_os("CONTENT_DATA_DIR").map(PathBuf::from)) {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };

    if !factory.data_dir().is_dir() {
        bail!(
            "Content data directory not found: {}\n\
             Set CONTENT_DATA_DIR or pass --data-dir to override.",
            factory.data_dir().display()
        );
    }

    Ok(factory)
}
