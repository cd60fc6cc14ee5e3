//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from enemy setup, content loading and scenario parsing so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ConfigurationError, EntityId, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires enemy templates to be configured before building")]
    MissingTemplates,

    #[error("runtime requires a scenario to be configured before building")]
    MissingScenario,

    #[error("enemy template '{name}' not found")]
    UnknownTemplate { name: String },

    #[error("enemy {entity} ('{template}') cannot be configured")]
    EnemyConfiguration {
        entity: EntityId,
        template: String,
        #[source]
        source: ConfigurationError,
    },

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// Reading or parsing a content file failed.
    #[error("failed to load content")]
    Content {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl RuntimeError {
    /// Severity of the underlying failure. Every runtime error stops the build.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::EnemyConfiguration { source, .. } => source.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
