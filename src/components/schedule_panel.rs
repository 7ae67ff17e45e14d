//! Class Schedule Panel Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::store;

#[component]
pub fn SchedulePanel() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (time, set_time) = signal(String::new());

    let add_class = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_class(name.get(), time.get());
        set_name.set(String::new());
        set_time.set(String::new());
    };

    view! {
        <form class="schedule-form" on:submit=add_class>
            <input
                type="text"
                placeholder="Class name"
                required
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="time"
                required
                prop:value=move || time.get()
                on:input=move |ev| set_time.set(event_target_value(&ev))
            />
            <button type="submit">"Add Class"</button>
        </form>
        <ul class="schedule-list">
            {move || store::schedule(&ctx.view).into_iter().map(|class| view! {
                <li>{class.label()}</li>
            }).collect_view()}
        </ul>
    }
}
