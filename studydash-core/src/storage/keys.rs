//! Keys the dashboard writes into the store.
//!
//! They match the names the browser build has always used in local storage,
//! so existing data keeps loading.

pub const TODOS: &str = "todos";
pub const TASKS_COMPLETED: &str = "tasksCompleted";
pub const SCHEDULES: &str = "schedules";
pub const ASSIGNMENTS: &str = "assignments";
pub const ASSIGNMENTS_COMPLETED: &str = "assignmentsCompleted";
pub const DARK_MODE: &str = "darkmode";
