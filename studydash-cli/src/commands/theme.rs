//! `studydash theme`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use studydash_core::Dashboard;

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    Show,
    Toggle,
}

pub fn run(args: ThemeArgs, dash: &mut Dashboard) -> Result<()> {
    if let Some(ThemeCommand::Toggle) = args.command {
        dash.toggle_theme().context("Failed to save theme")?;
    }
    let theme = dash.theme();
    println!("{} {}", theme.as_str(), theme.toggle_icon());
    Ok(())
}
