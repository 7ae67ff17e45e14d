//! studydash CLI - the study dashboard in a terminal
//!
//! Provides:
//! - To-do list with priorities, completion counting and reordering (`todo`)
//! - Class schedule log (`schedule`) and assignment tracker (`assignment`)
//! - Due-date reminders (`reminders`) and a progress chart (`progress`)
//! - Pomodoro countdown (`timer`) and document preview (`preview`)
//!
//! State lives in `<data-dir>/dashboard.json`, the same keys the web build
//! keeps in local storage.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studydash_core::{Dashboard, JsonFileStore, SharedStore};
use tracing::{debug, info};

mod commands;
mod config;
mod render;

use config::Settings;

const APP_NAME: &str = "studydash";

#[derive(Parser, Debug)]
#[command(
    name = "studydash",
    author,
    version,
    about = "Student productivity dashboard: to-dos, classes, assignments and a Pomodoro timer"
)]
struct Cli {
    /// Directory holding dashboard.json and logs (overrides the config file)
    #[arg(long, env = "STUDYDASH_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: <config dir>/studydash/config.toml)
    #[arg(long, env = "STUDYDASH_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Debug logging, also echoed to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the to-do list
    Todo(commands::todo::TodoArgs),
    /// Manage the class schedule
    Schedule(commands::schedule::ScheduleArgs),
    /// Manage assignments
    Assignment(commands::assignment::AssignmentArgs),
    /// Show assignments due soon
    Reminders(commands::reminders::RemindersArgs),
    /// Show completed counts as a bar chart
    Progress,
    /// Run a Pomodoro countdown (Ctrl-C to stop)
    Timer(commands::timer::TimerArgs),
    /// Print a text or Markdown document
    Preview(commands::preview::PreviewArgs),
    /// Show or toggle the light/dark preference
    Theme(commands::theme::ThemeArgs),
    /// Print a random study tip and motivation video
    Tip,
    /// Print the end of the log file
    Logs(commands::LogsArgs),
    /// Show or create the configuration file
    Config(config::ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.data_dir, cli.config)?;

    let mut log_config = rolling_logger::LoggerConfig::new(&settings.log_dir, APP_NAME);
    log_config.console = cli.debug;
    log_config.level = if cli.debug { "debug" } else { "info" }.to_string();
    if let Err(e) = rolling_logger::init_with(log_config) {
        // Logging is best effort; the dashboard still works without it.
        eprintln!("warning: {}", e);
    }
    debug!(data_dir = %settings.data_dir.display(), "Resolved settings");

    match cli.command {
        Commands::Todo(args) => commands::todo::run(args, &mut open_dashboard(&settings)?),
        Commands::Schedule(args) => commands::schedule::run(args, &mut open_dashboard(&settings)?),
        Commands::Assignment(args) => commands::assignment::run(args, &mut open_dashboard(&settings)?),
        Commands::Reminders(args) => commands::reminders::run(args, &open_dashboard(&settings)?, &settings),
        Commands::Progress => {
            render::print_progress(open_dashboard(&settings)?.progress());
            Ok(())
        }
        Commands::Timer(args) => commands::timer::run(args, &settings).await,
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Theme(args) => commands::theme::run(args, &mut open_dashboard(&settings)?),
        Commands::Tip => {
            commands::print_tip();
            Ok(())
        }
        Commands::Logs(args) => commands::print_logs(args, &settings),
        Commands::Config(args) => config::run(args, &settings),
    }
}

/// Open the file store and wire stdout surfaces to every list
fn open_dashboard(settings: &Settings) -> Result<Dashboard> {
    let path = settings.store_path();
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("Failed to open dashboard data at {}", path.display()))?;
    let store: SharedStore = Arc::new(store);

    let mut dash = Dashboard::load(store);
    dash.set_todo_surface(Box::new(render::StdoutSurface));
    dash.set_schedule_surface(Box::new(render::StdoutSurface));
    dash.set_assignment_surface(Box::new(render::StdoutSurface));
    dash.set_progress_sink(Box::new(render::StdoutSurface));
    if dash.todos().is_empty() && dash.assignments().is_empty() && !path.exists() {
        info!("No dashboard data yet at {}, starting empty", path.display());
    }
    Ok(dash)
}
