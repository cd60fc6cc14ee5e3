use crate::action::Instruction;
use crate::pattern::PatternSlot;
use crate::state::EntityMode;

/// What happened during one [`super::PatternExecutor::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    /// Set when the classified mode differs from the previous tick.
    pub mode_change: Option<ModeChange>,

    /// Set when the grounded stall ended this tick.
    pub stall_released: bool,

    /// Instruction whose action was invoked on the host this tick.
    pub executed: Option<ExecutedInstruction>,

    /// True when the executed instruction was the last of its pattern.
    pub wrapped: bool,

    /// New attack-range variant drawn because the pattern wrapped.
    pub rerolled: Option<PatternSlot>,
}

/// Mode switch detected at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange {
    pub from: EntityMode,
    pub to: EntityMode,
    /// Pattern selected for the new mode.
    pub slot: PatternSlot,
}

/// Instruction invoked on the host, with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutedInstruction {
    pub slot: PatternSlot,
    pub index: usize,
    pub instruction: Instruction,
}
