//! Dashboard application state
//!
//! One owner for every list, counter and preference, built from the store at
//! startup. Front ends keep a single `Dashboard` and call into it from their
//! event handlers.

use crate::domain::{Assignment, ClassSession, DomainResult, Priority, TodoItem};
use crate::list::{DropTarget, ListKeys, ReorderableList, RenderSurface};
use crate::progress::{Progress, ProgressSink};
use crate::storage::{keys, SharedStore};
use crate::theme::Theme;

pub const TODO_KEYS: ListKeys = ListKeys {
    items: keys::TODOS,
    completed: Some(keys::TASKS_COMPLETED),
};

pub const SCHEDULE_KEYS: ListKeys = ListKeys {
    items: keys::SCHEDULES,
    completed: None,
};

pub const ASSIGNMENT_KEYS: ListKeys = ListKeys {
    items: keys::ASSIGNMENTS,
    completed: Some(keys::ASSIGNMENTS_COMPLETED),
};

pub struct Dashboard {
    store: SharedStore,
    todos: ReorderableList<TodoItem>,
    schedule: ReorderableList<ClassSession>,
    assignments: ReorderableList<Assignment>,
    theme: Theme,
    progress_sink: Option<Box<dyn ProgressSink>>,
}

impl Dashboard {
    pub fn load(store: SharedStore) -> Self {
        let todos = ReorderableList::load(store.clone(), TODO_KEYS);
        let schedule = ReorderableList::load(store.clone(), SCHEDULE_KEYS);
        let assignments = ReorderableList::load(store.clone(), ASSIGNMENT_KEYS);
        let theme = Theme::load(store.as_ref());
        log::info!(
            "Dashboard loaded: {} todos, {} classes, {} assignments",
            todos.len(),
            schedule.len(),
            assignments.len()
        );
        Self {
            store,
            todos,
            schedule,
            assignments,
            theme,
            progress_sink: None,
        }
    }

    // ========================
    // Surfaces
    // ========================

    pub fn set_todo_surface(&mut self, surface: Box<dyn RenderSurface<TodoItem>>) {
        self.todos.set_surface(surface);
    }

    pub fn set_schedule_surface(&mut self, surface: Box<dyn RenderSurface<ClassSession>>) {
        self.schedule.set_surface(surface);
    }

    pub fn set_assignment_surface(&mut self, surface: Box<dyn RenderSurface<Assignment>>) {
        self.assignments.set_surface(surface);
    }

    pub fn set_progress_sink(&mut self, sink: Box<dyn ProgressSink>) {
        self.progress_sink = Some(sink);
    }

    /// Push the current state to every attached surface
    pub fn render_all(&mut self) {
        self.todos.render();
        self.schedule.render();
        self.assignments.render();
        self.publish_progress();
    }

    // ========================
    // To-dos
    // ========================

    pub fn todos(&self) -> &ReorderableList<TodoItem> {
        &self.todos
    }

    pub fn add_todo(&mut self, text: impl Into<String>, priority: Priority) -> DomainResult<()> {
        self.todos.append(TodoItem::new(text, priority))
    }

    pub fn complete_todo(&mut self, index: usize) -> DomainResult<TodoItem> {
        let item = self.todos.complete(index)?;
        self.publish_progress();
        Ok(item)
    }

    pub fn remove_todo(&mut self, index: usize) -> DomainResult<TodoItem> {
        self.todos.remove(index)
    }

    pub fn reorder_todo(&mut self, from: usize, target: DropTarget) -> DomainResult<()> {
        self.todos.reorder(from, target)
    }

    // ========================
    // Schedule
    // ========================

    pub fn schedule(&self) -> &ReorderableList<ClassSession> {
        &self.schedule
    }

    pub fn add_class(&mut self, name: impl Into<String>, time: impl Into<String>) -> DomainResult<()> {
        self.schedule.append(ClassSession::new(name, time))
    }

    pub fn remove_class(&mut self, index: usize) -> DomainResult<ClassSession> {
        self.schedule.remove(index)
    }

    // ========================
    // Assignments
    // ========================

    pub fn assignments(&self) -> &ReorderableList<Assignment> {
        &self.assignments
    }

    pub fn add_assignment(&mut self, name: impl Into<String>, due: impl Into<String>) -> DomainResult<()> {
        self.assignments.append(Assignment::new(name, due))
    }

    pub fn complete_assignment(&mut self, index: usize) -> DomainResult<Assignment> {
        let assignment = self.assignments.complete(index)?;
        self.publish_progress();
        Ok(assignment)
    }

    // ========================
    // Progress and theme
    // ========================

    pub fn progress(&self) -> Progress {
        Progress {
            tasks_completed: self.todos.completed_count(),
            assignments_completed: self.assignments.completed_count(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> DomainResult<()> {
        theme.save(self.store.as_ref())?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> DomainResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    fn publish_progress(&mut self) {
        let progress = self.progress();
        if let Some(sink) = self.progress_sink.as_mut() {
            sink.draw(progress);
        }
    }
}
