//! `studydash schedule`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use studydash_core::Dashboard;

use crate::render;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    command: ScheduleCommand,
}

#[derive(Subcommand, Debug)]
enum ScheduleCommand {
    /// Log a class, e.g. `schedule add Physics "Mon 09:00"`
    Add { name: String, time: String },
    List,
    /// Delete the class at INDEX
    Remove { index: usize },
}

pub fn run(args: ScheduleArgs, dash: &mut Dashboard) -> Result<()> {
    match args.command {
        ScheduleCommand::Add { name, time } => {
            dash.add_class(name, time).context("Failed to add class")?;
        }
        ScheduleCommand::List => render::print_schedule(dash.schedule().items()),
        ScheduleCommand::Remove { index } => {
            dash.remove_class(index).context("Failed to remove class")?;
        }
    }
    Ok(())
}
