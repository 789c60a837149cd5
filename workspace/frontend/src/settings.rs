use log::Level;
use web_sys::window;

const STORAGE_API_BASE: &str = "fraudlens_api_base";
const STORAGE_LOG_LEVEL: &str = "fraudlens_log_level";
const STORAGE_TOAST_DURATION: &str = "fraudlens_toast_duration_ms";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL the endpoint paths are appended to (e.g. "http://127.0.0.1:5000").
    /// Empty means same-origin requests.
    pub api_base: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location, then apply localStorage overrides.
    /// Overrides are set from the browser devtools, e.g.
    /// `localStorage.setItem("fraudlens_api_base", "http://127.0.0.1:5000")`.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(origin) = window.location().origin() {
            settings.api_base = origin;
        }

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base)) = storage.get_item(STORAGE_API_BASE) {
                if !api_base.is_empty() {
                    settings.api_base = api_base;
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                if let Ok(level) = log_level.parse::<Level>() {
                    settings.log_level = level;
                }
            }

            if let Ok(Some(duration)) = storage.get_item(STORAGE_TOAST_DURATION) {
                if let Ok(duration) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration;
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint)
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

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
