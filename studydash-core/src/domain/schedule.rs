//! Class Schedule Entity

use serde::{Deserialize, Serialize};

/// One entry of the class log, stored exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub name: String,
    pub time: String,
}

impl ClassSession {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.time)
    }
}
