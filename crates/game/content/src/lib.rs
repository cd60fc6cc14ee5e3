//! Data-driven enemy content and its loaders.
//!
//! This crate houses designer-authored content and provides loaders for
//! RON/TOML data files:
//! - Enemy templates: pattern strings and body parameters (RON)
//! - Game configuration (TOML)
//! - Scenario files, read as raw RON for the runtime to parse
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod template;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use template::{BodyParams, EnemyTemplate, validate_template};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EnemyLoader, LoadResult};
