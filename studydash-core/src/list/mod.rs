//! Reorderable Lists
//!
//! Ordered sequences with positional identity, persisted after every
//! mutation and rendered through an injected surface.

mod drop_target;
mod gesture;
mod reorderable;
mod surface;

pub use drop_target::{resolve_drop_target, DropTarget, RowBounds};
pub use gesture::DragGesture;
pub use reorderable::{ListKeys, ReorderableList};
pub use surface::RenderSurface;
