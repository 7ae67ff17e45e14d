//! Domain Layer
//!
//! Plain data entities persisted by the dashboard.
//! This layer only depends on serde and chrono.

mod assignment;
mod error;
mod schedule;
mod todo;

pub use assignment::Assignment;
pub use error::{DomainError, DomainResult};
pub use schedule::ClassSession;
pub use todo::{Priority, TodoItem};
