//! Study Dashboard Frontend App
//!
//! Header with theme toggle, a tab bar, and one panel per tab.

use leptos::prelude::*;

use crate::components::{
    AssignmentPanel, DocumentReader, PomodoroTimer, ProgressChart, SchedulePanel, StudyCorner,
    Tab, TabBar, ThemeToggle, TodoPanel,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::load();
    provide_context(ctx);

    let (active_tab, set_active_tab) = signal(Tab::Todo);

    // Keep <body class="dark"> in step with the preference
    Effect::new(move |_| {
        let dark = ctx.theme.get().is_dark();
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force("dark", dark);
        }
    });

    let panel = move |tab: Tab| move || if active_tab.get() == tab { "tab-content active" } else { "tab-content" };

    view! {
        <header class="app-header">
            <h1>"Study Dashboard"</h1>
            <ThemeToggle />
        </header>

        <TabBar active_tab=active_tab set_active_tab=set_active_tab />

        <main class="app-main">
            <section class=panel(Tab::Todo)><TodoPanel /></section>
            <section class=panel(Tab::Schedule)><SchedulePanel /></section>
            <section class=panel(Tab::Assignments)><AssignmentPanel /></section>
            <section class=panel(Tab::Timer)><PomodoroTimer /></section>
            <section class=panel(Tab::Reader)><DocumentReader /></section>
            <section class=panel(Tab::Progress)>
                <ProgressChart />
                <StudyCorner />
            </section>
        </main>
    }
}
