//! Keyboard Shortcut
//!
//! Global key combination that toggles the command palette.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    pub key: String,
    /// Require ⌘ on macOS or Ctrl elsewhere (either is accepted)
    pub command_or_control: bool,
}

impl Default for Shortcut {
    fn default() -> Self {
        Self {
            key: "j".to_string(),
            command_or_control: true,
        }
    }
}

impl Shortcut {
    pub fn matches(&self, key: &str, meta: bool, ctrl: bool) -> bool {
        if key != self.key {
            return false;
        }
        !self.command_or_control || meta || ctrl
    }

    pub fn matches_event(&self, ev: &web_sys::KeyboardEvent) -> bool {
        self.matches(&ev.key(), ev.meta_key(), ev.ctrl_key())
    }

    /// Label shown next to the search box, e.g. `⌘J`
    pub fn hint(&self) -> String {
        let key = self.key.to_uppercase();
        if self.command_or_control {
            format!("⌘{key}")
        } else {
            key
        }
    }
}
