//! Run a scenario and print the behaviour timeline

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use runtime::{BehaviorEvent, Event, Runtime};

use crate::dirs;

/// Simulate a scenario from the content directory
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Content data directory (defaults to CONTENT_DATA_DIR or the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Scenario name under scenarios/ (without .ron)
    #[arg(short, long, default_value = "ridge")]
    scenario: String,

    /// Base seed for attack-range variant selection (overrides config.toml)
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds to simulate (defaults to the scenario duration)
    #[arg(long)]
    seconds: Option<f32>,

    /// Print events as JSON lines
    #[arg(long)]
    json: bool,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let factory = dirs::content_factory(self.data_dir)?;
        let mut builder = Runtime::builder()
            .content(&factory, &self.scenario)
            .with_context(|| format!("Failed to load scenario '{}'", self.scenario))?;
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        let mut runtime = builder.build().context("Failed to build runtime")?;

        let frames = self
            .seconds
            .map(|seconds| runtime.config().frames_for(seconds))
            .unwrap_or_else(|| runtime.config().frames_for(runtime.scenario().duration));

        if !self.json {
            println!(
                "{} {} ({} enemies, {} frames, seed {})",
                style("Scenario:").bold().cyan(),
                self.scenario,
                runtime.enemies().len(),
                frames,
                runtime.config().game_config.seed
            );
            println!();
        }

        let mut actions = 0usize;
        for _ in 0..frames {
            let report = runtime.step();
            for event in &report.events {
                if matches!(event, Event::Action(_)) {
                    actions += 1;
                }
                if self.json {
                    println!("{}", serde_json::to_string(event)?);
                } else {
                    print_event(&runtime, event);
                }
            }
        }

        if !self.json {
            println!();
            println!("{} {} action(s)", style("Done:").bold().green(), actions);
            for enemy in runtime.enemies() {
                let stats = enemy.body().stats();
                println!(
                    "  {} {:<10} x={:>7.2} mode={:<16} attacks={} jumps={} auto_jumps={}",
                    enemy.id(),
                    enemy.template(),
                    enemy.body().x(),
                    enemy.mode().to_string(),
                    stats.total_attacks(),
                    stats.jumps,
                    stats.auto_jumps
                );
            }
        }

        Ok(())
    }
}

fn print_event(runtime: &Runtime, event: &Event) {
    let clock = event.clock();
    let entity = event.entity();
    let name = runtime
        .enemy(entity)
        .map(|enemy| enemy.template())
        .unwrap_or("?");
    let prefix = format!("{:>8.3}s {} {:<10}", clock.elapsed, entity, name);

    match event {
        Event::Action(action) => println!(
            "{} {} {} {}",
            style(prefix).dim(),
            style(action.action.token()).bold(),
            style(format!("wait={}", action.wait)).dim(),
            style(format!("[{}#{}]", action.slot, action.index)).dim()
        ),
        Event::Behavior(BehaviorEvent::ModeChanged { from, to, slot, .. }) => println!(
            "{} {} {} -> {} ({})",
            style(prefix).dim(),
            style("mode").cyan(),
            from,
            style(to).cyan().bold(),
            slot
        ),
        Event::Behavior(BehaviorEvent::PatternRerolled { slot, .. }) => println!(
            "{} {} {}",
            style(prefix).dim(),
            style("reroll").magenta(),
            slot
        ),
        Event::Behavior(BehaviorEvent::Landed { .. }) => {
            println!("{} {}", style(prefix).dim(), style("landed").dim())
        }
    }
}
