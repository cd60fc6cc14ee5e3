//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod explain;
mod lint;
mod simulate;

pub use explain::Explain;
pub use lint::Lint;
pub use simulate::Simulate;
