//! Terminal rendering
//!
//! Stdout implementations of the dashboard's display seams.

use studydash_core::{Assignment, ClassSession, Progress, ProgressSink, RenderSurface, TodoItem};

const BAR_WIDTH: u32 = 30;

/// Reprints a whole list after each change
pub struct StdoutSurface;

impl RenderSurface<TodoItem> for StdoutSurface {
    fn render(&mut self, rows: &[TodoItem]) {
        print_todos(rows);
    }
}

impl RenderSurface<ClassSession> for StdoutSurface {
    fn render(&mut self, rows: &[ClassSession]) {
        print_schedule(rows);
    }
}

impl RenderSurface<Assignment> for StdoutSurface {
    fn render(&mut self, rows: &[Assignment]) {
        print_assignments(rows);
    }
}

impl ProgressSink for StdoutSurface {
    fn draw(&mut self, progress: Progress) {
        print_progress(progress);
    }
}

pub fn todo_line(index: usize, item: &TodoItem) -> String {
    format!("[{}] {:<8} {}", index, format!("({})", item.priority), item.text)
}

pub fn print_todos(rows: &[TodoItem]) {
    println!("To-Do");
    print_rows(rows.iter().enumerate().map(|(i, t)| todo_line(i, t)));
}

pub fn print_schedule(rows: &[ClassSession]) {
    println!("Schedule");
    print_rows(rows.iter().enumerate().map(|(i, c)| format!("[{}] {}", i, c.label())));
}

pub fn print_assignments(rows: &[Assignment]) {
    println!("Assignments");
    print_rows(rows.iter().enumerate().map(|(i, a)| format!("[{}] {}", i, a.label())));
}

fn print_rows(lines: impl Iterator<Item = String>) {
    let mut empty = true;
    for line in lines {
        empty = false;
        println!("  {}", line);
    }
    if empty {
        println!("  (empty)");
    }
}

/// Horizontal bar for `value` scaled against `max`
pub fn bar(value: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(value) * u64::from(BAR_WIDTH) / u64::from(max)) as usize
    };
    "█".repeat(filled)
}

pub fn print_progress(progress: Progress) {
    println!("Progress");
    let max = progress.scale_max();
    for (label, value) in progress.series() {
        println!("  {:<22} {:>4} {}", label, value, bar(value, max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studydash_core::Priority;

    #[test]
    fn test_todo_line() {
        let line = todo_line(2, &TodoItem::new("Read", Priority::High));
        assert_eq!(line, "[2] (high)   Read");
    }

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(0, 4).chars().count(), 0);
        assert_eq!(bar(2, 4).chars().count(), 15);
        assert_eq!(bar(4, 4).chars().count(), 30);
    }
}
