use log::Level;
use web_sys::window;

/// Prefix for every localStorage key read or written by the dashboard.
const STORAGE_PREFIX: &str = "ecowatt_";

/// How failures are surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationStyle {
    /// Blocking `window.alert` dialog.
    #[default]
    Alert,
    /// Non-blocking toast in the corner of the page.
    Toast,
}

impl NotificationStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "alert" => Some(Self::Alert),
            "toast" => Some(Self::Toast),
            _ => None,
        }
    }
}

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Absolute origin of the prediction API (e.g. "http://localhost:5000").
    /// `None` means same origin as the page.
    pub api_origin: Option<String>,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How prediction failures are reported
    pub notification_style: NotificationStyle,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: None,
            api_path: "/api".to_string(),
            log_level: Level::Info,
            debug_mode: false,
            notification_style: NotificationStyle::Alert,
            toast_duration_ms: 5000,
        }
    }
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

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| storage.get_item(&format!("{STORAGE_PREFIX}{key}")).ok().flatten());
        }

        settings
    }

    /// Apply overrides from a key/value source. Unknown or malformed values keep the
    /// current setting.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup("api_origin") {
            let origin = origin.trim().trim_end_matches('/').to_string();
            self.api_origin = (!origin.is_empty()).then_some(origin);
        }

        if let Some(path) = lookup("api_path") {
            self.api_path = normalize_path(&path);
        }

        if let Some(log_level) = lookup("log_level") {
            self.log_level = match log_level.to_lowercase().as_str() {
                "error" => Level::Error,
                "warn" => Level::Warn,
                "info" => Level::Info,
                "debug" => Level::Debug,
                "trace" => Level::Trace,
                _ => self.log_level,
            };
        }

        if let Some(style) = lookup("notification_style").as_deref().and_then(NotificationStyle::parse) {
            self.notification_style = style;
        }

        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the base API URL (optional origin + path prefix)
    pub fn api_base_url(&self) -> String {
        match &self.api_origin {
            Some(origin) => format!("{}{}", origin, self.api_path),
            None => self.api_path.clone(),
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_targets_same_origin_api() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "/api");
        assert_eq!(settings.api_url("/predict"), "/api/predict");
        assert_eq!(settings.notification_style, NotificationStyle::Alert);
    }

    #[test]
    fn test_overrides_are_applied() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup(&[
            ("api_origin", "http://localhost:5000/"),
            ("api_path", "v2/api/"),
            ("log_level", "TRACE"),
            ("notification_style", "toast"),
            ("toast_duration_ms", "2500"),
        ]));

        assert_eq!(settings.api_url("/predict"), "http://localhost:5000/v2/api/predict");
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.notification_style, NotificationStyle::Toast);
        assert_eq!(settings.toast_duration_ms, 2500);
    }

    #[test]
    fn test_malformed_overrides_keep_current_values() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup(&[
            ("log_level", "loud"),
            ("notification_style", "carrier-pigeon"),
            ("toast_duration_ms", "soon"),
            ("api_origin", "   "),
        ]));

        assert_eq!(settings, AppSettings::default());
    }
}
