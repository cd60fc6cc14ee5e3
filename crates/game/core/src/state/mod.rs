//! Per-entity interpreter state.
//!
//! [`ExecutorState`] is created with its enemy, mutated once per frame by
//! the [`crate::engine::PatternExecutor`] and dropped with it. Nothing here is
//! shared between entities.
use core::fmt;

use crate::pattern::PatternSlot;

/// Unique identifier for an entity driven by a pattern executor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Behavioural regime derived from player proximity.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityMode {
    #[default]
    OutOfSight,
    InSight,
    InAttackRange,
}

impl EntityMode {
    /// Classifies the two sensor readings.
    ///
    /// Attack range is checked first, so it wins even if sight range reports
    /// false.
    pub const fn classify(in_attack_range: bool, in_sight_range: bool) -> Self {
        if in_attack_range {
            EntityMode::InAttackRange
        } else if in_sight_range {
            EntityMode::InSight
        } else {
            EntityMode::OutOfSight
        }
    }
}

/// Mutable sequencing state of one enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutorState {
    /// Mode seen on the last tick.
    pub mode: EntityMode,
    /// Pattern currently being executed.
    pub slot: PatternSlot,
    /// Index of the instruction that runs next.
    pub next_index: usize,
    /// Seconds left before the next instruction may run. Goes negative.
    pub remaining_wait: f32,
    /// Set by a grounded wait, cleared once the host reports ground contact.
    pub stalled: bool,
    /// Number of times the active patterns wrapped back to their start.
    pub loops_completed: u64,
    /// Number of random variant draws made so far.
    pub rolls: u64,
}

impl ExecutorState {
    pub fn new() -> Self {
        Self {
            mode: EntityMode::OutOfSight,
            slot: PatternSlot::OutOfSight,
            next_index: 0,
            remaining_wait: 0.0,
            stalled: false,
            loops_completed: 0,
            rolls: 0,
        }
    }

    /// Returns to the initial out-of-sight state.
    ///
    /// The roll counter is kept so that draws after a reset do not repeat
    /// earlier ones.
    pub fn reset(&mut self) {
        *self = Self {
            rolls: self.rolls,
            ..Self::new()
        };
    }
}

impl Default for ExecutorState {
    fn default() -> Self {
        Self::new()
    }
}
