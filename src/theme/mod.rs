//! Configuration for countrydir: color palette, user settings and XDG paths.
//!
//! Both files use the same `key = value` format with `#` comments. Missing
//! files and unknown keys fall back to built-in defaults.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings access.
mod settings;
/// Theme loading and caching.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{SETTINGS_SKELETON_CONTENT, parse_settings, settings};
pub use store::theme;
pub use types::{FALLBACK_API_BASE_URL, Settings, Theme, build_time_api_base_url};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
