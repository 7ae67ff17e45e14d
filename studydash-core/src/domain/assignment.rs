//! Assignment Entity
//!
//! Due dates are kept as the raw `datetime-local` string the user entered and
//! parsed on demand, so an unparseable value never blocks loading the list.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const DUE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub due: String,
}

impl Assignment {
    pub fn new(name: impl Into<String>, due: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due: due.into(),
        }
    }

    /// Local due time, if the stored string is a recognised timestamp
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        let raw = self.due.trim();
        DUE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    pub fn label(&self) -> String {
        format!("{} - Due: {}", self.name, self.due)
    }
}
