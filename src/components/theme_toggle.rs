//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app();
    view! {
        <button
            class="theme-toggle"
            title="Toggle dark mode"
            on:click=move |_| ctx.toggle_theme()
        >
            {move || ctx.theme.get().toggle_icon()}
        </button>
    }
}
