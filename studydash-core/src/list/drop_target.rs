//! Drop-target resolution
//!
//! Maps the pointer's vertical position to an insertion point. The result
//! depends only on where the pointer sits relative to the other rows'
//! midpoints, never on where the drag started.

/// Where a dragged row should land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Immediately before the row currently at this index
    Before(usize),
    /// After the last row
    End,
}

/// Vertical extent of a rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    /// Position of the row in the list
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

impl RowBounds {
    pub fn new(index: usize, top: f64, height: f64) -> Self {
        Self { index, top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pick the nearest row whose midpoint lies below the pointer.
///
/// `rows` must not contain the row being dragged. Ties keep the first row
/// scanned; no row below the pointer means [`DropTarget::End`].
pub fn resolve_drop_target(pointer_y: f64, rows: &[RowBounds]) -> DropTarget {
    let mut closest: Option<(f64, usize)> = None;
    for row in rows {
        let offset = pointer_y - row.midpoint();
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, row.index));
        }
    }
    closest.map_or(DropTarget::End, |(_, index)| DropTarget::Before(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows 20px tall whose midpoints sit at 10, 30 and 50
    fn rows() -> Vec<RowBounds> {
        vec![
            RowBounds::new(0, 0.0, 20.0),
            RowBounds::new(1, 20.0, 20.0),
            RowBounds::new(2, 40.0, 20.0),
        ]
    }

    #[test]
    fn test_pointer_between_rows_targets_next_row() {
        assert_eq!(resolve_drop_target(25.0, &rows()), DropTarget::Before(1));
    }

    #[test]
    fn test_pointer_below_all_rows_targets_end() {
        assert_eq!(resolve_drop_target(60.0, &rows()), DropTarget::End);
    }

    #[test]
    fn test_pointer_above_first_midpoint_targets_first_row() {
        assert_eq!(resolve_drop_target(-5.0, &rows()), DropTarget::Before(0));
        assert_eq!(resolve_drop_target(9.0, &rows()), DropTarget::Before(0));
    }

    #[test]
    fn test_pointer_on_midpoint_is_not_above_it() {
        assert_eq!(resolve_drop_target(30.0, &rows()), DropTarget::Before(2));
    }

    #[test]
    fn test_empty_rows_target_end() {
        assert_eq!(resolve_drop_target(0.0, &[]), DropTarget::End);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let mut shuffled = rows();
        shuffled.reverse();
        assert_eq!(resolve_drop_target(25.0, &shuffled), DropTarget::Before(1));
    }
}
