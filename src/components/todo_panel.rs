//! To-Do Panel Component
//!
//! Add form plus the reorderable list. Rows are dragged with leptos-dragdrop;
//! the core decides the landing position and persists the new order.

use leptos::html::Ul;
use leptos::prelude::*;
use studydash_core::list::DropTarget;
use studydash_core::Priority;

use crate::context::use_app;
use crate::store;

use leptos_dragdrop::*;

#[component]
pub fn TodoPanel() -> impl IntoView {
    let ctx = use_app();

    let (new_text, set_new_text) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());

    let list_ref = NodeRef::<Ul>::new();
    let dnd = create_dnd_signals(list_ref);
    bind_global_mouseup(dnd, move |from, target| {
        log::debug!("Drop: from={} target={:?}", from, target);
        ctx.reorder_todo(from, target);
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_todo(new_text.get(), priority.get());
        set_new_text.set(String::new());
    };

    // Keyed by position and content so every render rebuilds rows (and their
    // handlers) for the current indices.
    let rows = move || store::todos(&ctx.view).into_iter().enumerate().collect::<Vec<_>>();

    let list_class = move || {
        if dnd.drop_target.get() == Some(DropTarget::End) { "todo-list drop-end" } else { "todo-list" }
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                if let Ok(p) = event_target_value(&ev).parse::<Priority>() {
                    set_priority.set(p);
                }
            }>
                {Priority::ALL.iter().map(|p| {
                    let p = *p;
                    view! {
                        <option value=p.as_str() selected=move || priority.get() == p>{p.as_str()}</option>
                    }
                }).collect_view()}
            </select>
            <button type="submit">"Add"</button>
        </form>

        <ul class=list_class node_ref=list_ref>
            <For
                each=rows
                key=|(index, item)| (*index, item.text.clone(), item.priority)
                children=move |(index, item)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let is_dragging = move || dnd.dragging() == Some(index);
                    let is_drop_before = move || dnd.drop_target.get() == Some(DropTarget::Before(index));
                    let priority = item.priority.as_str();
                    view! {
                        <li
                            data-index=index.to_string()
                            class:dragging=is_dragging
                            class:drop-before=is_drop_before
                            on:mousedown=on_mousedown
                        >
                            <span class="todo-text">{item.text.clone()}</span>
                            <span class=format!("priority {}", priority)>{priority}</span>
                            <button title="Mark Complete" on:click=move |_| ctx.complete_todo(index)>"✓"</button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
