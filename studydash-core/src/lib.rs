//! Study Dashboard Core
//!
//! Layered architecture:
//! - domain: entities and errors
//! - storage: key-value store abstraction and implementations
//! - list: reorderable list manager, drop-target resolution, drag gesture
//! - dashboard: application state tying the lists, counters and theme together
//!
//! Rendering, notifications and charting are injected through traits so the
//! same core drives both the web front end and the command line.

pub mod dashboard;
pub mod deadline;
pub mod domain;
pub mod list;
pub mod preview;
pub mod progress;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod tips;

#[cfg(test)]
mod tests;

pub use dashboard::Dashboard;
pub use domain::{Assignment, ClassSession, DomainError, DomainResult, Priority, TodoItem};
pub use list::{DropTarget, ReorderableList, RenderSurface};
pub use progress::{Progress, ProgressSink};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, SharedStore};
pub use theme::Theme;
