//! Light/dark preference, persisted as a boolean under `darkmode`.

use crate::domain::DomainResult;
use crate::storage::{keys, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything but the literal `true` reads as light
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(keys::DARK_MODE) {
            Ok(Some(raw)) if raw.trim() == "true" => Theme::Dark,
            Ok(_) => Theme::Light,
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::Light
            }
        }
    }

    pub fn save(self, store: &dyn KeyValueStore) -> DomainResult<()> {
        store.set(keys::DARK_MODE, if self.is_dark() { "true" } else { "false" })
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon for the toggle button: offers the other theme
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
