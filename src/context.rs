//! Application Context
//!
//! The single `Dashboard` plus the view store, provided via the Leptos
//! Context API. Every mutation goes through here so failures are logged in
//! one place.

use std::sync::Arc;

use leptos::prelude::*;
use studydash_core::list::DropTarget;
use studydash_core::{Dashboard, DomainResult, Priority, SharedStore, Theme};

use crate::storage::LocalStore;
use crate::store::{attach_surfaces, ViewState, ViewStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    dashboard: StoredValue<Dashboard>,
    pub view: ViewStore,
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl AppContext {
    /// Load the dashboard from local storage and render it into a new store
    pub fn load() -> Self {
        let store: SharedStore = Arc::new(LocalStore);
        let mut dashboard = Dashboard::load(store);
        let view = ViewStore::new(ViewState::default());
        attach_surfaces(&mut dashboard, view);
        let (theme, set_theme) = signal(dashboard.theme());
        Self {
            dashboard: StoredValue::new(dashboard),
            view,
            theme,
            set_theme,
        }
    }

    fn mutate<T>(&self, action: &str, f: impl FnOnce(&mut Dashboard) -> DomainResult<T>) -> Option<T> {
        let mut result = None;
        self.dashboard.update_value(|dash| match f(dash) {
            Ok(value) => result = Some(value),
            Err(e) => log::error!("{} failed: {}", action, e),
        });
        result
    }

    pub fn add_todo(&self, text: String, priority: Priority) {
        self.mutate("Add to-do", |d| d.add_todo(text, priority));
    }

    pub fn complete_todo(&self, index: usize) {
        self.mutate("Complete to-do", |d| d.complete_todo(index));
    }

    pub fn reorder_todo(&self, from: usize, target: DropTarget) {
        self.mutate("Reorder to-do", |d| d.reorder_todo(from, target));
    }

    pub fn add_class(&self, name: String, time: String) {
        self.mutate("Add class", |d| d.add_class(name, time));
    }

    pub fn add_assignment(&self, name: String, due: String) {
        self.mutate("Add assignment", |d| d.add_assignment(name, due));
    }

    pub fn complete_assignment(&self, index: usize) {
        self.mutate("Complete assignment", |d| d.complete_assignment(index));
    }

    pub fn toggle_theme(&self) {
        if let Some(theme) = self.mutate("Toggle theme", |d| d.toggle_theme()) {
            self.set_theme.set(theme);
        }
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
