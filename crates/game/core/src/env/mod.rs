//! Collaborators the interpreter is handed rather than owning.
//!
//! The host entity is reached only through [`EnemyActions`], and randomness
//! only through [`RngOracle`], so both can be swapped for scripted versions
//! in tests.
mod host;
mod rng;

pub use host::EnemyActions;
pub use rng::{PcgRng, RngOracle, compute_seed};
