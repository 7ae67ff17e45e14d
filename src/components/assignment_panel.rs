//! Assignment Panel Component
//!
//! Tracker list plus the minute-by-minute due-date reminder loop.

use chrono::{NaiveDate, NaiveDateTime};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use studydash_core::deadline::{DeadlineWatcher, NotificationSink};

use crate::context::use_app;
use crate::store;

const REMINDER_CHECK_MS: u32 = 60_000;

/// Desktop notifications, silently dropped without permission
struct BrowserNotifications;

impl NotificationSink for BrowserNotifications {
    fn notify(&mut self, message: &str) {
        if web_sys::Notification::permission() == web_sys::NotificationPermission::Granted {
            if let Err(e) = web_sys::Notification::new(message) {
                log::warn!("Notification failed: {:?}", e);
            }
        }
    }
}

/// Browser wall-clock time, local zone
fn local_now() -> Option<NaiveDateTime> {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())?
        .and_hms_opt(d.get_hours(), d.get_minutes(), d.get_seconds())
}

#[component]
pub fn AssignmentPanel() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (due, set_due) = signal(String::new());

    if web_sys::Notification::permission() != web_sys::NotificationPermission::Granted {
        let _ = web_sys::Notification::request_permission();
    }

    let watcher = DeadlineWatcher::default();
    Interval::new(REMINDER_CHECK_MS, move || {
        let Some(now) = local_now() else { return };
        let assignments = store::assignments_untracked(&ctx.view);
        watcher.check(&assignments, now, &mut BrowserNotifications);
    })
    .forget();

    let add_assignment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_assignment(name.get(), due.get());
        set_name.set(String::new());
        set_due.set(String::new());
    };

    view! {
        <form class="assignment-form" on:submit=add_assignment>
            <input
                type="text"
                placeholder="Assignment name"
                required
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="datetime-local"
                required
                prop:value=move || due.get()
                on:input=move |ev| set_due.set(event_target_value(&ev))
            />
            <button type="submit">"Add Assignment"</button>
        </form>
        <ul class="assignment-list">
            {move || store::assignments(&ctx.view).into_iter().enumerate().map(|(index, assignment)| view! {
                <li>
                    {assignment.label()}
                    <button title="Mark Complete" on:click=move |_| ctx.complete_assignment(index)>"✓"</button>
                </li>
            }).collect_view()}
        </ul>
    }
}
