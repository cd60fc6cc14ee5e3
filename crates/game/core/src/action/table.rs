//! Token lookup used by the pattern compiler.

use crate::config::GameConfig;
use crate::env::EnemyActions;
use crate::pattern::ConfigurationError;

use super::{ActionId, Wait};

/// Default wait for actions that only toggle a host flag.
pub const INSTANT_ACTION_SECONDS: f32 = 0.01;

/// Maps every action to the wait used when a pattern gives no explicit one.
///
/// Attack defaults are the host's animation lengths, toggles use a small fixed
/// duration and `JUMP` waits until the host is grounded.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionTable {
    defaults: [Wait; ActionId::ALL.len()],
}

impl ActionTable {
    /// Builds a table from the three attack animation lengths.
    pub fn new(
        attack_up: f32,
        attack_middle: f32,
        attack_down: f32,
    ) -> Result<Self, ConfigurationError> {
        Self::with_instant_seconds(
            attack_up,
            attack_middle,
            attack_down,
            INSTANT_ACTION_SECONDS,
        )
    }

    /// Builds a table with a custom duration for the flag-toggling actions.
    pub fn with_instant_seconds(
        attack_up: f32,
        attack_middle: f32,
        attack_down: f32,
        instant: f32,
    ) -> Result<Self, ConfigurationError> {
        let mut defaults = [Wait::Seconds(instant); ActionId::ALL.len()];

        for (action, seconds) in [
            (ActionId::AttackUp, attack_up),
            (ActionId::AttackMiddle, attack_middle),
            (ActionId::AttackDown, attack_down),
        ] {
            defaults[action.index()] = Wait::Seconds(checked_duration(action, seconds)?);
        }

        if !(instant.is_finite() && instant >= 0.0) {
            return Err(ConfigurationError::InvalidInstantDuration { seconds: instant });
        }

        defaults[ActionId::Jump.index()] = Wait::UntilGrounded;

        Ok(Self { defaults })
    }

    /// Queries the host's animation lengths once.
    pub fn from_host<H>(host: &H) -> Result<Self, ConfigurationError>
    where
        H: EnemyActions + ?Sized,
    {
        Self::new(
            host.attack_up_duration(),
            host.attack_middle_duration(),
            host.attack_down_duration(),
        )
    }

    /// Like [`ActionTable::from_host`] but takes the toggle duration from `config`.
    pub fn from_host_with_config<H>(host: &H, config: &GameConfig) -> Result<Self, ConfigurationError>
    where
        H: EnemyActions + ?Sized,
    {
        Self::with_instant_seconds(
            host.attack_up_duration(),
            host.attack_middle_duration(),
            host.attack_down_duration(),
            config.instant_action_seconds,
        )
    }

    /// Default wait for `action`.
    #[inline]
    pub fn default_wait(&self, action: ActionId) -> Wait {
        self.defaults[action.index()]
    }

    /// Resolves a pattern token to its action and default wait.
    pub fn lookup(&self, token: &str) -> Option<(ActionId, Wait)> {
        let action: ActionId = token.parse().ok()?;
        Some((action, self.default_wait(action)))
    }
}

fn checked_duration(action: ActionId, seconds: f32) -> Result<f32, ConfigurationError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(ConfigurationError::InvalidDuration { action, seconds })
    }
}
