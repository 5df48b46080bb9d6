//! App Configuration
//!
//! Optional JSON embedded in the page:
//! `<script id="app-config" type="application/json">{ ... }</script>`.
//! Missing fields take their defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::shortcut::Shortcut;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub drag_threshold_px: i32,
    pub palette_shortcut: Shortcut,
    pub palette_suggestions: Vec<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            drag_threshold_px: leptos_dragdrop::DEFAULT_DRAG_THRESHOLD_PX,
            palette_shortcut: Shortcut::default(),
            palette_suggestions: vec![
                "Calendar".to_string(),
                "Search Emoji".to_string(),
                "Calculator".to_string(),
            ],
            breadcrumbs: vec![
                Breadcrumb { label: "Home".to_string(), href: "/".to_string() },
                Breadcrumb { label: "Components".to_string(), href: "/components".to_string() },
            ],
        }
    }
}

impl AppConfig {
    pub fn parse(json: &str) -> Result<Self, String> {
        let config: AppConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if config.drag_threshold_px < 0 {
            return Err(format!("drag_threshold_px must be >= 0, got {}", config.drag_threshold_px));
        }
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("unknown log level: {}", self.log_level))
    }

    /// Read the embedded config from the document
    ///
    /// `Ok(None)` when the page carries no config element.
    pub fn from_document() -> Result<Option<Self>, String> {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(None);
        };
        let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let text = el.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(&text).map(Some)
    }
}
