//! `studydash timer`

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use studydash_core::timer::{PomodoroTimer, TimerEvent, SESSION_COMPLETE_MESSAGE};
use tracing::info;

use crate::config::Settings;

#[derive(Args, Debug)]
pub struct TimerArgs {
    /// Session length in minutes (default from config, else 25)
    #[arg(long, short)]
    minutes: Option<u32>,

    /// Session length in seconds; overrides --minutes
    #[arg(long, hide = true)]
    seconds: Option<u32>,
}

pub async fn run(args: TimerArgs, settings: &Settings) -> Result<()> {
    let mut timer = match args.seconds {
        Some(secs) => PomodoroTimer::new(secs),
        None => PomodoroTimer::from_minutes(args.minutes.unwrap_or(settings.pomodoro_minutes)),
    };
    timer.start();
    info!("Pomodoro started for {}", timer.display());
    print_display(&timer)?;

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately.
    ticker.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => match timer.tick() {
                TimerEvent::Ticked { .. } => print_display(&timer)?,
                TimerEvent::SessionComplete => {
                    println!();
                    println!("{}", SESSION_COMPLETE_MESSAGE);
                    info!("Pomodoro session complete");
                    break;
                }
                TimerEvent::Idle => break,
            },
            _ = &mut ctrl_c => {
                timer.pause();
                println!();
                println!("Stopped at {}", timer.display());
                info!("Pomodoro stopped at {}", timer.display());
                break;
            }
        }
    }
    Ok(())
}

fn print_display(timer: &PomodoroTimer) -> Result<()> {
    let mut out = std::io::stdout();
    write!(out, "\r{}", timer.display())?;
    out.flush()?;
    Ok(())
}
