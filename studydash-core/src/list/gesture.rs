//! Drag gesture state machine
//!
//! `Idle -> Dragging (start) -> Idle (finish or end)`. A finished drag always
//! yields a target, which may leave the order unchanged.

use super::drop_target::{resolve_drop_target, DropTarget, RowBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging { from: usize },
}

impl DragGesture {
    /// Begin dragging the row at `index`, replacing any gesture in progress
    pub fn start(&mut self, index: usize) {
        *self = DragGesture::Dragging { from: index };
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }

    /// Index of the row being dragged
    pub fn dragged(&self) -> Option<usize> {
        match self {
            DragGesture::Dragging { from } => Some(*from),
            DragGesture::Idle => None,
        }
    }

    /// Target under the pointer right now, for highlighting
    pub fn preview(&self, pointer_y: f64, rows: &[RowBounds]) -> Option<DropTarget> {
        let from = self.dragged()?;
        Some(resolve_against_others(from, pointer_y, rows))
    }

    /// Drop: returns `(from, target)` and goes back to idle
    pub fn finish(&mut self, pointer_y: f64, rows: &[RowBounds]) -> Option<(usize, DropTarget)> {
        let from = self.dragged()?;
        *self = DragGesture::Idle;
        Some((from, resolve_against_others(from, pointer_y, rows)))
    }

    /// Drag ended without a drop
    pub fn end(&mut self) {
        *self = DragGesture::Idle;
    }
}

fn resolve_against_others(from: usize, pointer_y: f64, rows: &[RowBounds]) -> DropTarget {
    let others: Vec<RowBounds> = rows.iter().copied().filter(|r| r.index != from).collect();
    resolve_drop_target(pointer_y, &others)
}
