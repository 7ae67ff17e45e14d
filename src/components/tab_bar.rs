//! Tab Bar Component

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Todo,
    Schedule,
    Assignments,
    Timer,
    Reader,
    Progress,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Todo, "To-Do"),
    (Tab::Schedule, "Schedule"),
    (Tab::Assignments, "Assignments"),
    (Tab::Timer, "Pomodoro"),
    (Tab::Reader, "Reader"),
    (Tab::Progress, "Progress"),
];

#[component]
pub fn TabBar(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {TABS.iter().map(|(tab, label)| {
                let tab = *tab;
                view! {
                    <button
                        class=move || if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_active_tab.set(tab)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
