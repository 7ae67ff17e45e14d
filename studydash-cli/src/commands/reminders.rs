//! `studydash reminders`

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Args;
use studydash_core::deadline::{DeadlineWatcher, NotificationSink};
use studydash_core::{Assignment, Dashboard};

use crate::config::Settings;

#[derive(Args, Debug)]
pub struct RemindersArgs {
    /// Check as if it were this local time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    at: Option<String>,
}

struct StdoutNotifier;

impl NotificationSink for StdoutNotifier {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

pub fn run(args: RemindersArgs, dash: &Dashboard, settings: &Settings) -> Result<()> {
    let now = match args.at {
        Some(raw) => parse_local(&raw)?,
        None => chrono::Local::now().naive_local(),
    };
    let watcher = DeadlineWatcher::new(settings.reminder_window_minutes);
    let sent = watcher.check(dash.assignments().items(), now, &mut StdoutNotifier);
    if sent == 0 {
        println!(
            "No assignments due within the next {} minutes.",
            settings.reminder_window_minutes
        );
    }
    Ok(())
}

fn parse_local(raw: &str) -> Result<NaiveDateTime> {
    Assignment::new("", raw)
        .due_at()
        .with_context(|| format!("'{}' is not a YYYY-MM-DDTHH:MM time", raw))
}
