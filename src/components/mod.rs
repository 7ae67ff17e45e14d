//! UI Components
//!
//! One component per dashboard panel.

mod assignment_panel;
mod document_reader;
mod pomodoro_timer;
mod progress_chart;
mod schedule_panel;
mod study_corner;
mod tab_bar;
mod theme_toggle;
mod todo_panel;

pub use assignment_panel::AssignmentPanel;
pub use document_reader::DocumentReader;
pub use pomodoro_timer::PomodoroTimer;
pub use progress_chart::ProgressChart;
pub use schedule_panel::SchedulePanel;
pub use study_corner::StudyCorner;
pub use tab_bar::{Tab, TabBar};
pub use theme_toggle::ThemeToggle;
pub use todo_panel::TodoPanel;
