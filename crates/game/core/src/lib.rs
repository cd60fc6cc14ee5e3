//! Enemy action-pattern language and its per-frame interpreter.
//!
//! `game-core` compiles designer-authored pattern strings into timed
//! instruction lists and runs them against an enemy host every frame. It
//! holds no I/O and no global state: the host is reached through
//! [`EnemyActions`], randomness through [`RngOracle`], and every state change
//! flows through [`engine::PatternExecutor::tick`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod pattern;
pub mod state;

pub use action::{ActionId, ActionTable, INSTANT_ACTION_SECONDS, Instruction, Wait};
pub use config::GameConfig;
pub use engine::{ExecutedInstruction, ModeChange, PatternExecutor, PatternSelector, TickOutcome};
pub use env::{EnemyActions, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use pattern::{
    CompiledPattern, ConfigurationError, PatternError, PatternSet, PatternSetSpec, PatternSlot,
    compile,
};
pub use state::{EntityId, EntityMode, ExecutorState};
