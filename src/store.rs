//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The dashboard
//! core renders into this store through the surfaces below; components only
//! ever read from it.

use leptos::prelude::*;
use reactive_stores::Store;
use studydash_core::{Assignment, ClassSession, Dashboard, Progress, ProgressSink, RenderSurface, TodoItem};

/// Everything the components display
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    pub todos: Vec<TodoItem>,
    pub schedule: Vec<ClassSession>,
    pub assignments: Vec<Assignment>,
    pub progress: Progress,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Readers
// ========================

pub fn todos(store: &ViewStore) -> Vec<TodoItem> {
    store.todos().get()
}

pub fn schedule(store: &ViewStore) -> Vec<ClassSession> {
    store.schedule().get()
}

pub fn assignments(store: &ViewStore) -> Vec<Assignment> {
    store.assignments().get()
}

/// For timers and other non-reactive callers
pub fn assignments_untracked(store: &ViewStore) -> Vec<Assignment> {
    store.assignments().get_untracked()
}

pub fn progress(store: &ViewStore) -> Progress {
    store.progress().get()
}

// ========================
// Render Surfaces
// ========================

struct TodoRows(ViewStore);

impl RenderSurface<TodoItem> for TodoRows {
    fn render(&mut self, rows: &[TodoItem]) {
        *self.0.todos().write() = rows.to_vec();
    }
}

struct ScheduleRows(ViewStore);

impl RenderSurface<ClassSession> for ScheduleRows {
    fn render(&mut self, rows: &[ClassSession]) {
        *self.0.schedule().write() = rows.to_vec();
    }
}

struct AssignmentRows(ViewStore);

impl RenderSurface<Assignment> for AssignmentRows {
    fn render(&mut self, rows: &[Assignment]) {
        *self.0.assignments().write() = rows.to_vec();
    }
}

struct ProgressBars(ViewStore);

impl ProgressSink for ProgressBars {
    fn draw(&mut self, progress: Progress) {
        *self.0.progress().write() = progress;
    }
}

/// Point every dashboard surface at `store` and fill it once
pub fn attach_surfaces(dashboard: &mut Dashboard, store: ViewStore) {
    dashboard.set_todo_surface(Box::new(TodoRows(store)));
    dashboard.set_schedule_surface(Box::new(ScheduleRows(store)));
    dashboard.set_assignment_surface(Box::new(AssignmentRows(store)));
    dashboard.set_progress_sink(Box::new(ProgressBars(store)));
    dashboard.render_all();
}
