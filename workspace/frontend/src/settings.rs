use bankscope::{BankSelectionMode, ChartSelection, CompetitorPruning};
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

const STORAGE_PREFIX: &str = "bankscope_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "reports.example.com")
    pub api_host: String,

    /// Backend API port
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Trends form lets the user pick several banks instead of one
    pub trends_multi_bank: bool,

    /// Urgent form drops the new base bank from the selected competitors
    pub urgent_prune_on_base_change: bool,

    /// Trends preview shows only the `trends` chart
    pub preview_trends_chart_only: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: "/api".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
            trends_multi_bank: false,
            urgent_prune_on_base_change: false,
            preview_trends_chart_only: false,
        }
    }
}

fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn read_flag(storage: &Storage, key: &str) -> Option<bool> {
    read_item(storage, key).map(|value| value.eq_ignore_ascii_case("true"))
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(api_host) = read_item(&storage, "api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = read_item(&storage, "api_port").and_then(|p| p.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read_item(&storage, "api_path") {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read_flag(&storage, "api_use_https") {
                settings.api_use_https = use_https;
            }
            if let Some(log_level) = read_item(&storage, "log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
            if let Some(duration) =
                read_item(&storage, "toast_duration_ms").and_then(|d| d.parse::<u32>().ok())
            {
                settings.toast_duration_ms = duration;
            }
            if let Some(multi) = read_flag(&storage, "trends_multi_bank") {
                settings.trends_multi_bank = multi;
            }
            if let Some(prune) = read_flag(&storage, "urgent_prune_on_base_change") {
                settings.urgent_prune_on_base_change = prune;
            }
            if let Some(only_trends) = read_flag(&storage, "preview_trends_chart_only") {
                settings.preview_trends_chart_only = only_trends;
            }
        }

        settings
    }

    /// Storage entries for the flags the settings panel edits.
    ///
    /// Connection and logging settings are left out so environment
    /// detection keeps deciding them on the next load.
    pub fn display_flag_entries(&self) -> [(&'static str, String); 3] {
        [
            ("trends_multi_bank", self.trends_multi_bank.to_string()),
            (
                "urgent_prune_on_base_change",
                self.urgent_prune_on_base_change.to_string(),
            ),
            (
                "preview_trends_chart_only",
                self.preview_trends_chart_only.to_string(),
            ),
        ]
    }

    /// Persist the display flags to localStorage
    pub fn save_display_flags(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for (key, value) in self.display_flag_entries() {
                    storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), &value)?;
                }
            }
        }
        Ok(())
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Root of the backend, without the API path (for `/health`)
    pub fn server_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.api_host, self.api_port)
    }

    pub fn trends_mode(&self) -> BankSelectionMode {
        if self.trends_multi_bank {
            BankSelectionMode::Multiple
        } else {
            BankSelectionMode::Single
        }
    }

    pub fn competitor_pruning(&self) -> CompetitorPruning {
        if self.urgent_prune_on_base_change {
            CompetitorPruning::OnBaseChange
        } else {
            CompetitorPruning::Keep
        }
    }

    pub fn chart_selection(&self) -> ChartSelection {
        if self.preview_trends_chart_only {
            ChartSelection::TrendsOnly
        } else {
            ChartSelection::AnyChart
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_flag_entries_skip_connection_and_logging() {
        let settings = AppSettings {
            api_host: "reports.internal".to_string(),
            log_level: Level::Debug,
            trends_multi_bank: true,
            ..AppSettings::default()
        };

        let entries = settings.display_flag_entries();
        let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();

        assert_eq!(
            keys,
            vec![
                "trends_multi_bank",
                "urgent_prune_on_base_change",
                "preview_trends_chart_only"
            ]
        );
        assert_eq!(entries[0].1, "true");
        assert!(!keys.iter().any(|key| key.starts_with("api_") || *key == "log_level"));
    }
}
