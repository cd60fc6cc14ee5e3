//! Host actions and the timed instructions built from them.
//!
//! An [`ActionId`] names one of the fixed callbacks an enemy host exposes.
//! A compiled pattern is a list of [`Instruction`]s, each pairing an action
//! with the [`Wait`] that must elapse before the next instruction runs.
mod table;

pub use table::{ActionTable, INSTANT_ACTION_SECONDS};

use core::fmt;

/// Identifier of one host action, spelled in pattern strings by its token.
///
/// Tokens are case-sensitive: `AU` is an action, `au` is not.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionId {
    /// Upward attack.
    #[strum(serialize = "AU")]
    AttackUp,

    /// Middle attack.
    #[strum(serialize = "AM")]
    AttackMiddle,

    /// Downward attack.
    #[strum(serialize = "AD")]
    AttackDown,

    /// Jump. Defaults to waiting until the host is grounded again.
    #[strum(serialize = "JUMP")]
    Jump,

    /// Begin chasing the player.
    #[strum(serialize = "STARTF")]
    StartFollow,

    /// Stop chasing the player.
    #[strum(serialize = "STOPF")]
    StopFollow,

    /// Enable jumping automatically when movement is blocked.
    #[strum(serialize = "STARTAUTOJUMP")]
    StartAutoJump,

    /// Disable automatic jumping.
    #[strum(serialize = "STOPAUTOJUMP")]
    StopAutoJump,
}

impl ActionId {
    /// Every action, in table order.
    pub const ALL: [ActionId; 8] = [
        ActionId::AttackUp,
        ActionId::AttackMiddle,
        ActionId::AttackDown,
        ActionId::Jump,
        ActionId::StartFollow,
        ActionId::StopFollow,
        ActionId::StartAutoJump,
        ActionId::StopAutoJump,
    ];

    /// Position of this action in [`ActionId::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pattern token for this action (`"AU"`, `"JUMP"`, ...).
    #[inline]
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Returns true for the three attack directions.
    pub const fn is_attack(self) -> bool {
        matches!(
            self,
            ActionId::AttackUp | ActionId::AttackMiddle | ActionId::AttackDown
        )
    }

    /// Returns true for actions that only flip a host flag and have no animation.
    pub const fn is_instant(self) -> bool {
        matches!(
            self,
            ActionId::StartFollow
                | ActionId::StopFollow
                | ActionId::StartAutoJump
                | ActionId::StopAutoJump
        )
    }
}

/// How long the sequencer waits after an instruction before running the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wait {
    /// Fixed countdown in seconds.
    Seconds(f32),

    /// Stall until the host reports it is on the ground.
    UntilGrounded,
}

impl Wait {
    /// Float encoding of [`Wait::UntilGrounded`] in pattern strings.
    pub const GROUNDED_SENTINEL: f32 = -1.0;

    /// Decodes a wait from its float form. Any negative value means "until grounded".
    pub fn from_seconds(seconds: f32) -> Self {
        if seconds < 0.0 {
            Wait::UntilGrounded
        } else {
            Wait::Seconds(seconds)
        }
    }

    /// Encodes this wait as a float, using [`Wait::GROUNDED_SENTINEL`] for the stall.
    pub const fn as_seconds(self) -> f32 {
        match self {
            Wait::Seconds(seconds) => seconds,
            Wait::UntilGrounded => Self::GROUNDED_SENTINEL,
        }
    }

    pub const fn is_until_grounded(self) -> bool {
        matches!(self, Wait::UntilGrounded)
    }
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Seconds(seconds) => write!(f, "{}", seconds),
            Wait::UntilGrounded => write!(f, "{}", Self::GROUNDED_SENTINEL),
        }
    }
}

/// One step of a compiled pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    pub action: ActionId,
    pub wait: Wait,
    /// True when the wait came from a numeric token rather than the action's default.
    pub explicit_wait: bool,
}

impl Instruction {
    /// Instruction using the action's default wait.
    pub const fn new(action: ActionId, wait: Wait) -> Self {
        Self {
            action,
            wait,
            explicit_wait: false,
        }
    }

    /// Instruction whose wait was written out in the pattern string.
    pub const fn with_explicit_wait(action: ActionId, wait: Wait) -> Self {
        Self {
            action,
            wait,
            explicit_wait: true,
        }
    }

    /// Number of pattern tokens this instruction was compiled from.
    #[inline]
    pub const fn tokens_consumed(&self) -> usize {
        if self.explicit_wait { 2 } else { 1 }
    }
}

impl fmt::Display for Instruction {
    /// Always writes the wait explicitly so the text recompiles to the same instruction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.action, self.wait)
    }
}
