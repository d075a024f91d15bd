//! Configuration
//!
//! Board settings come from three layers: built-in defaults, an optional
//! JSON block embedded in the host page, and local storage overrides for
//! development against a server on another origin.

use serde::Deserialize;

/// Id of the `<script type="application/json">` element holding page config
pub const CONFIG_ELEMENT_ID: &str = "board-config";

/// Local storage key for the API base URL
pub const API_URL_KEY: &str = "activity_board_api_url";

/// Local storage key for the log level filter
pub const LOG_LEVEL_KEY: &str = "activity_board_log_level";

/// Board configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Prefix for API paths. Empty means same origin as the page.
    #[serde(default)]
    pub api_base: String,

    /// `tracing` filter directive, e.g. `info` or `activity_board=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl BoardConfig {
    /// Parse a JSON config block
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let mut config: BoardConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Load page config with local storage overrides, falling back to defaults
    pub fn load() -> Self {
        let mut config = Self::from_page().unwrap_or_default();

        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            config.apply_overrides(|key| storage.get_item(key).ok().flatten());
        }

        config
    }

    /// Apply values from `lookup` on top of the current settings
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_KEY) {
            self.api_base = url;
        }
        if let Some(level) = lookup(LOG_LEVEL_KEY).filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        self.normalize();
    }

    fn from_page() -> Option<Self> {
        let text = web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()?;

        // Logging is configured from this value, so report problems directly
        match Self::parse(&text) {
            Ok(config) => Some(config),
            Err(e) => {
                web_sys::console::warn_1(&format!("Ignoring page config: {}", e).into());
                None
            }
        }
    }

    fn normalize(&mut self) {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_string();
        self.log_level = self.log_level.trim().to_string();
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse board config: {0}")]
    Parse(String),
}
