//! Show how a single pattern string compiles

use anyhow::Result;
use clap::Parser;
use console::style;

use game_core::{ActionTable, INSTANT_ACTION_SECONDS, Wait, compile};

/// Compile one pattern and print its instructions
#[derive(Parser, Debug)]
pub struct Explain {
    /// Pattern string, e.g. "AU|AM|AD|2"
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Attack-up animation length in seconds
    #[arg(long, default_value_t = 0.5)]
    up: f32,

    /// Attack-middle animation length in seconds
    #[arg(long, default_value_t = 0.4)]
    mid: f32,

    /// Attack-down animation length in seconds
    #[arg(long, default_value_t = 0.6)]
    down: f32,

    /// Default wait of the follow and auto-jump toggles
    #[arg(long, default_value_t = INSTANT_ACTION_SECONDS)]
    instant: f32,
}

impl Explain {
    pub fn execute(self) -> Result<()> {
        let table = ActionTable::with_instant_seconds(self.up, self.mid, self.down, self.instant)?;
        let pattern = compile(&self.pattern, &table)?;

        println!("{} {}", style("Pattern:").bold().cyan(), self.pattern);
        println!("{} {}", style("Canonical:").bold().cyan(), pattern);
        println!();
        println!(
            "{:>4}  {:<14} {:<14} {:>10}  {}",
            style("#").bold(),
            style("token").bold(),
            style("action").bold(),
            style("wait").bold(),
            style("source").bold()
        );

        for (index, instruction) in pattern.instructions().iter().enumerate() {
            let wait = match instruction.wait {
                Wait::Seconds(seconds) => format!("{:.3}s", seconds),
                Wait::UntilGrounded => "grounded".to_string(),
            };
            let source = if instruction.explicit_wait {
                style("explicit").yellow()
            } else {
                style("default").dim()
            };
            println!(
                "{:>4}  {:<14} {:<14} {:>10}  {}",
                index,
                instruction.action.token(),
                format!("{:?}", instruction.action),
                wait,
                source
            );
        }

        let stalls = pattern
            .instructions()
            .iter()
            .filter(|instruction| instruction.wait.is_until_grounded())
            .count();
        println!();
        println!(
            "{} {} instruction(s) from {} token(s), {:.3}s fixed wait per loop, {} grounded stall(s)",
            style("Summary:").bold().cyan(),
            pattern.len(),
            pattern.token_count(),
            pattern.fixed_loop_seconds(),
            stalls
        );

        Ok(())
    }
}
