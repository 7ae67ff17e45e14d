//! Pomodoro Timer Component

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use studydash_core::timer::{PomodoroTimer as Countdown, TimerEvent, SESSION_COMPLETE_MESSAGE};

#[component]
pub fn PomodoroTimer() -> impl IntoView {
    let timer = RwSignal::new(Countdown::default());

    // One interval for the page lifetime; a paused timer ignores ticks
    Interval::new(1_000, move || {
        if !timer.with_untracked(|t| t.is_running()) {
            return;
        }
        let mut event = TimerEvent::Idle;
        timer.update(|t| event = t.tick());
        if event == TimerEvent::SessionComplete {
            log::info!("Pomodoro session complete");
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(SESSION_COMPLETE_MESSAGE);
            }
        }
    })
    .forget();

    view! {
        <div class="pomodoro">
            <div class="timer-display">{move || timer.with(|t| t.display())}</div>
            <div class="timer-controls">
                <button on:click=move |_| timer.update(|t| { t.start(); })>"Start"</button>
                <button on:click=move |_| timer.update(|t| t.pause())>"Pause"</button>
                <button on:click=move |_| timer.update(|t| t.reset())>"Reset"</button>
            </div>
        </div>
    }
}
