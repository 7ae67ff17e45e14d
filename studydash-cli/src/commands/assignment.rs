//! `studydash assignment`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use studydash_core::Dashboard;
use tracing::{info, warn};

use crate::render;

#[derive(Args, Debug)]
pub struct AssignmentArgs {
    #[command(subcommand)]
    command: AssignmentCommand,
}

#[derive(Subcommand, Debug)]
enum AssignmentCommand {
    /// Track an assignment; DUE looks like 2024-05-01T14:30
    Add { name: String, due: String },
    List,
    /// Mark the assignment at INDEX complete
    Done { index: usize },
}

pub fn run(args: AssignmentArgs, dash: &mut Dashboard) -> Result<()> {
    match args.command {
        AssignmentCommand::Add { name, due } => {
            dash.add_assignment(name, due).context("Failed to add assignment")?;
            if let Some(last) = dash.assignments().items().last() {
                if last.due_at().is_none() {
                    warn!("Due date '{}' is not YYYY-MM-DDTHH:MM; no reminders for it", last.due);
                }
            }
        }
        AssignmentCommand::List => render::print_assignments(dash.assignments().items()),
        AssignmentCommand::Done { index } => {
            let done = dash
                .complete_assignment(index)
                .context("Failed to complete assignment")?;
            info!("Completed assignment '{}'", done.name);
        }
    }
    Ok(())
}
