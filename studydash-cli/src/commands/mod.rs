//! Subcommand handlers

pub mod assignment;
pub mod preview;
pub mod reminders;
pub mod schedule;
pub mod theme;
pub mod timer;
pub mod todo;

use anyhow::{Context, Result};
use clap::Args;
use studydash_core::tips;

use crate::config::Settings;
use crate::APP_NAME;

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Number of lines to show
    #[arg(long, short = 'n', default_value_t = 20)]
    lines: usize,
}

pub fn print_logs(args: LogsArgs, settings: &Settings) -> Result<()> {
    let lines = rolling_logger::read_tail(&settings.log_dir, APP_NAME, args.lines)
        .with_context(|| format!("Failed to read logs in {}", settings.log_dir.display()))?;
    if lines.is_empty() {
        println!("No log entries yet.");
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

pub fn print_tip() {
    println!("Study tip: {}", tips::study_tip(rand::random::<f64>()));
    println!("Motivation: {}", tips::motivation_embed_url(rand::random::<f64>()));
}
