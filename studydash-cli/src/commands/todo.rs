//! `studydash todo`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use studydash_core::{Dashboard, DropTarget, Priority};
use tracing::info;

use crate::render;

#[derive(Args, Debug)]
pub struct TodoArgs {
    #[command(subcommand)]
    command: TodoCommand,
}

#[derive(Subcommand, Debug)]
enum TodoCommand {
    /// Append a to-do
    Add {
        text: String,
        #[arg(long, short, default_value = "medium")]
        priority: Priority,
    },
    /// List to-dos with their indices
    List,
    /// Mark the to-do at INDEX complete
    Done { index: usize },
    /// Delete the to-do at INDEX without counting it
    Remove { index: usize },
    /// Move the to-do at FROM before the row now at TO (or `end`)
    Move {
        from: usize,
        #[arg(value_parser = parse_target)]
        to: DropTarget,
    },
}

/// `end` or a row index
pub fn parse_target(raw: &str) -> Result<DropTarget, String> {
    if raw.eq_ignore_ascii_case("end") {
        return Ok(DropTarget::End);
    }
    raw.parse::<usize>()
        .map(DropTarget::Before)
        .map_err(|_| format!("expected a row index or 'end', got '{}'", raw))
}

pub fn run(args: TodoArgs, dash: &mut Dashboard) -> Result<()> {
    match args.command {
        TodoCommand::Add { text, priority } => {
            dash.add_todo(text, priority).context("Failed to add to-do")?;
        }
        TodoCommand::List => render::print_todos(dash.todos().items()),
        TodoCommand::Done { index } => {
            let item = dash.complete_todo(index).context("Failed to complete to-do")?;
            info!("Completed to-do '{}'", item.text);
        }
        TodoCommand::Remove { index } => {
            let item = dash.remove_todo(index).context("Failed to remove to-do")?;
            info!("Removed to-do '{}'", item.text);
        }
        TodoCommand::Move { from, to } => {
            dash.reorder_todo(from, to).context("Failed to move to-do")?;
        }
    }
    Ok(())
}
