//! Progress counters and the chart seam.

/// Completed counts fed to the progress chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub tasks_completed: u32,
    pub assignments_completed: u32,
}

impl Progress {
    pub const LABELS: [&'static str; 2] = ["Tasks Completed", "Assignments Completed"];

    /// `(label, value)` pairs in chart order
    pub fn series(&self) -> [(&'static str, u32); 2] {
        [
            (Self::LABELS[0], self.tasks_completed),
            (Self::LABELS[1], self.assignments_completed),
        ]
    }

    /// Largest series value, at least 1, for scaling bars
    pub fn scale_max(&self) -> u32 {
        self.tasks_completed.max(self.assignments_completed).max(1)
    }
}

/// Chart target, redrawn whenever a counter changes
pub trait ProgressSink: Send + Sync {
    fn draw(&mut self, progress: Progress);
}
