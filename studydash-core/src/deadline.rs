//! Due-date reminders
//!
//! Stateless: each check reports every assignment currently inside the
//! window, so a host polling once a minute repeats the reminder until the
//! deadline passes.

use chrono::{Duration, NaiveDateTime};

use crate::domain::Assignment;

pub const DEFAULT_WINDOW_MINUTES: i64 = 60;

/// Where reminders go (desktop notification, stdout, ...)
pub trait NotificationSink: Send + Sync {
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWatcher {
    window: Duration,
}

impl Default for DeadlineWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MINUTES)
    }
}

impl DeadlineWatcher {
    pub fn new(window_minutes: i64) -> Self {
        Self {
            window: Duration::minutes(window_minutes),
        }
    }

    /// Assignments due strictly after `now` and strictly before `now + window`.
    /// Unparseable due dates are skipped.
    pub fn due_soon<'a>(&self, assignments: &'a [Assignment], now: NaiveDateTime) -> Vec<&'a Assignment> {
        assignments
            .iter()
            .filter(|a| {
                a.due_at().is_some_and(|due| {
                    let left = due - now;
                    left > Duration::zero() && left < self.window
                })
            })
            .collect()
    }

    pub fn message(&self, assignment: &Assignment) -> String {
        let minutes = self.window.num_minutes();
        let span = if minutes == 60 {
            "1 hour".to_string()
        } else {
            format!("{} minutes", minutes)
        };
        format!("Reminder: Assignment \"{}\" is due within {}!", assignment.name, span)
    }

    /// Send one reminder per assignment due soon; returns how many were sent
    pub fn check(
        &self,
        assignments: &[Assignment],
        now: NaiveDateTime,
        sink: &mut dyn NotificationSink,
    ) -> usize {
        let due = self.due_soon(assignments, now);
        for assignment in &due {
            sink.notify(&self.message(assignment));
        }
        if !due.is_empty() {
            log::info!("Sent {} deadline reminder(s)", due.len());
        }
        due.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<String>);

    impl NotificationSink for Collect {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_only_assignments_inside_window_fire() {
        let assignments = vec![
            Assignment::new("Essay", "2024-05-01T14:30"),     // 30 min away
            Assignment::new("Lab", "2024-05-01T15:30"),       // 90 min away
            Assignment::new("Quiz", "2024-05-01T13:30"),      // already past
            Assignment::new("Reading", "whenever"),           // unparseable
            Assignment::new("Exactly", "2024-05-01T15:00"),   // on the boundary
        ];
        let mut sink = Collect(Vec::new());
        let sent = DeadlineWatcher::default().check(&assignments, at("2024-05-01T14:00"), &mut sink);

        assert_eq!(sent, 1);
        assert_eq!(sink.0, vec!["Reminder: Assignment \"Essay\" is due within 1 hour!".to_string()]);
    }

    #[test]
    fn test_custom_window_message() {
        let watcher = DeadlineWatcher::new(15);
        let msg = watcher.message(&Assignment::new("Lab", "2024-05-01T15:30"));
        assert_eq!(msg, "Reminder: Assignment \"Lab\" is due within 15 minutes!");
    }
}
