//! Compile every pattern of every enemy template
//!
//! Prints one line per pattern and fails if any pattern is invalid.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use game_content::validate_template;
use game_core::compile;

use crate::dirs;

/// Check enemy pattern content
#[derive(Parser, Debug)]
pub struct Lint {
    /// Content data directory (defaults to CONTENT_DATA_DIR or the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Lint {
    pub fn execute(self) -> Result<()> {
        let factory = dirs::content_factory(self.data_dir)?;
        let config = factory.load_config().context("Failed to load config.toml")?;
        let enemies = factory.load_enemies().context("Failed to load enemies.ron")?;

        println!(
            "{} {}",
            style("Data Directory:").bold().cyan(),
            factory.data_dir().display()
        );
        println!();

        let mut checked = 0usize;
        let mut failures = 0usize;

        for template in &enemies {
            println!("{}", style(&template.name).bold());

            let table = match template.body.action_table(&config) {
                Ok(table) => table,
                Err(e) => {
                    println!("  {} body: {}", style("FAIL").red().bold(), e);
                    failures += 1;
                    continue;
                }
            };

            let failures_before = failures;
            for slot in template.patterns.slots() {
                let Some(source) = template.patterns.source(slot) else {
                    continue;
                };
                checked += 1;
                match compile(source, &table) {
                    Ok(pattern) => println!(
                        "  {} {:<20} {}",
                        style("OK").green().bold(),
                        slot.to_string(),
                        style(pattern).dim()
                    ),
                    Err(e) => {
                        failures += 1;
                        println!(
                            "  {} {:<20} {:?}: {}",
                            style("FAIL").red().bold(),
                            slot.to_string(),
                            source,
                            e
                        );
                    }
                }
            }

            // Slot-level errors are already listed; this catches set-level ones.
            if failures == failures_before {
                if let Err(e) = validate_template(template, &config) {
                    println!("  {} {}", style("FAIL").red().bold(), e);
                    failures += 1;
                }
            }
        }

        println!();
        if failures > 0 {
            anyhow::bail!(
                "{} problem(s) found in {} pattern(s) across {} template(s)",
                failures,
                checked,
                enemies.len()
            );
        }

        println!(
            "{} {} pattern(s) across {} template(s)",
            style("All good:").bold().green(),
            checked,
            enemies.len()
        );
        Ok(())
    }
}
