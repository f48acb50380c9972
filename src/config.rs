//! App Configuration
//!
//! Defaults, optionally overridden from the page URL query string
//! (`?slot=MY_KEY&log=debug`).

use std::str::FromStr;

use log::LevelFilter;

/// Storage slot used by every release so far
pub const DEFAULT_STORAGE_KEY: &str = "TASKS_MANANGER_V1_B0828055";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the snapshot
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Apply `slot` and `log` overrides from a query string; anything else is ignored
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else { continue };
            match key {
                "slot" if !value.is_empty() => config.storage_key = value.to_string(),
                "log" => {
                    if let Ok(level) = LevelFilter::from_str(value) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read overrides from `window.location.search`
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
