//! Attack-pattern language: compiled patterns, pattern sets and their errors.
//!
//! A pattern is a `|`-separated list of action tokens, each optionally
//! followed by a numeric wait in seconds:
//!
//! ```text
//! PATTERN     = INSTRUCTION ( "|" INSTRUCTION )*
//! INSTRUCTION = ACTION ( "|" SECONDS )?
//! ACTION      = "AU" | "AM" | "AD" | "JUMP" | "STARTF" | "STOPF"
//!             | "STARTAUTOJUMP" | "STOPAUTOJUMP"
//! SECONDS     = finite float; negative means "wait until grounded"
//! ```
//!
//! Any token that parses as a number directly after an action is taken as
//! that action's wait. There is no way to escape it.
mod compiler;
mod error;
mod set;

pub use compiler::{SEPARATOR, compile};
pub use error::{ConfigurationError, PatternError};
pub use set::{PatternSet, PatternSetSpec};

use core::fmt;

use crate::action::{Instruction, Wait};

/// Ordered, looping list of instructions produced by [`compile`].
///
/// Never empty; immutable once compiled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompiledPattern {
    instructions: Vec<Instruction>,
}

impl CompiledPattern {
    pub(crate) fn from_instructions(instructions: Vec<Instruction>) -> Self {
        debug_assert!(!instructions.is_empty());
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of source tokens the instructions were compiled from.
    pub fn token_count(&self) -> usize {
        self.instructions.iter().map(Instruction::tokens_consumed).sum()
    }

    /// Sum of the fixed waits of one loop. Grounded stalls count as zero.
    pub fn fixed_loop_seconds(&self) -> f32 {
        self.instructions
            .iter()
            .map(|instruction| match instruction.wait {
                Wait::Seconds(seconds) => seconds,
                Wait::UntilGrounded => 0.0,
            })
            .sum()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

/// Names one pattern of a [`PatternSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternSlot {
    OutOfSight,
    InSight,
    /// Index into the in-attack-range variants.
    InAttackRange(usize),
}

impl fmt::Display for PatternSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSlot::OutOfSight => write!(f, "out-of-sight"),
            PatternSlot::InSight => write!(f, "in-sight"),
            PatternSlot::InAttackRange(index) => write!(f, "in-attack-range[{}]", index),
        }
    }
}
