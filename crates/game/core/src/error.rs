//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`PatternError`, `ConfigurationError`) live next to
//! the code that produces them; this module holds the classification shared
//! by all of them.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The entity cannot be initialized at all.
    ///
    /// Examples: unknown action token, missing attack-range patterns,
    /// unusable animation length
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Give every variant a stable `error_code`
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{ConfigurationError, PatternError, PatternSlot};

    #[test]
    fn pattern_errors_are_fatal_alone_and_wrapped() {
        let source = PatternError::UnknownAction {
            token: "FLY".to_string(),
            position: 0,
        };
        assert_eq!(source.severity(), ErrorSeverity::Fatal);
        assert_eq!(source.error_code(), "PATTERN_UNKNOWN_ACTION");

        let source = PatternError::Empty;
        assert_eq!(source.severity(), ErrorSeverity::Fatal);

        let wrapped = ConfigurationError::Pattern {
            slot: PatternSlot::InSight,
            source,
        };
        assert_eq!(wrapped.severity(), ErrorSeverity::Fatal);
        assert_eq!(wrapped.error_code(), "PATTERN_EMPTY");
        assert_eq!(wrapped.severity().as_str(), "fatal");
    }

    #[test]
    fn configuration_error_message_names_slot() {
        let err = ConfigurationError::Pattern {
            slot: PatternSlot::InAttackRange(2),
            source: PatternError::EmptyToken { position: 3 },
        };
        assert_eq!(
            err.to_string(),
            "invalid in-attack-range[2] pattern: empty token at position 3"
        );
    }
}
