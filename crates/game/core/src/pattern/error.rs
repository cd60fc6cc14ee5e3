//! Load-time errors of the pattern language.
//!
//! Patterns are designer-authored content, so every error here is detected
//! while an enemy is being set up and stops that setup. Nothing in the
//! sequencer can fail once a [`super::PatternSet`] exists.

use crate::action::ActionId;
use crate::error::{ErrorSeverity, GameError};

use super::PatternSlot;

/// A single pattern string failed to compile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternError {
    /// The pattern string is blank.
    #[error("pattern is empty")]
    Empty,

    /// Two separators in a row, or a leading/trailing separator.
    #[error("empty token at position {position}")]
    EmptyToken { position: usize },

    /// An action was expected but the token names none.
    #[error("unknown action `{token}` at position {position}")]
    UnknownAction { token: String, position: usize },
}

impl GameError for PatternError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "PATTERN_EMPTY",
            Self::EmptyToken { .. } => "PATTERN_EMPTY_TOKEN",
            Self::UnknownAction { .. } => "PATTERN_UNKNOWN_ACTION",
        }
    }
}

/// An enemy's pattern configuration cannot be used; the enemy cannot start.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// One of the pattern strings failed to compile.
    #[error("invalid {slot} pattern: {source}")]
    Pattern {
        slot: PatternSlot,
        #[source]
        source: PatternError,
    },

    /// The in-attack-range variant list is empty.
    #[error("at least one in-attack-range pattern is required")]
    NoAttackRangePatterns,

    /// A host animation length is negative or not a number.
    #[error("default duration of {action} must be finite and non-negative, got {seconds}")]
    InvalidDuration { action: ActionId, seconds: f32 },

    /// The toggle-action duration is negative or not a number.
    #[error("instant action duration must be finite and non-negative, got {seconds}")]
    InvalidInstantDuration { seconds: f32 },
}

impl ConfigurationError {
    /// Slot of the failing pattern, if the error came from compiling one.
    pub fn slot(&self) -> Option<PatternSlot> {
        match self {
            Self::Pattern { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Pattern { source, .. } => source.error_code(),
            Self::NoAttackRangePatterns => "CONFIG_NO_ATTACK_PATTERNS",
            Self::InvalidDuration { .. } => "CONFIG_INVALID_DURATION",
            Self::InvalidInstantDuration { .. } => "CONFIG_INVALID_INSTANT_DURATION",
        }
    }
}
