//! ThemeMode: Dark/Light Presentation State
//!
//! Binary state toggled from a single control; reflected as one of two
//! mutually exclusive body classes. Not persisted across reloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl ThemeMode {
    /// Map the toggle control's checked state to a mode
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Body class carrying this mode's presentation
    pub fn class_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light-mode",
            ThemeMode::Dark => "dark-mode",
        }
    }
}
