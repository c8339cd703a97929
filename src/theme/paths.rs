use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under every XDG base directory.
const APP_DIR: &str = "countrydir";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    base_dir_from(
        env::var(var).ok().as_deref(),
        env::var("HOME").ok().as_deref(),
        home_default,
    )
}

/// Pure half of [`xdg_base_dir`], split out so tests need not mutate the environment.
fn base_dir_from(xdg: Option<&str>, home: Option<&str>, home_default: &[&str]) -> PathBuf {
    if let Some(p) = xdg
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let mut base = PathBuf::from(home.unwrap_or("."));
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for countrydir (ensured to exist when possible).
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Directory receiving the log file.
///
/// Output:
/// - `$XDG_STATE_HOME/countrydir/logs` when `XDG_STATE_HOME` is set, otherwise
///   `<config_dir>/logs`. Creation is attempted; callers handle open failures.
pub fn logs_dir() -> PathBuf {
    let dir = match env::var("XDG_STATE_HOME") {
        Ok(state) if !state.trim().is_empty() => Path::new(&state).join(APP_DIR).join("logs"),
        _ => config_dir().join("logs"),
    };
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf` inside [`config_dir`], if the file exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    existing_file(config_dir().join("settings.conf"))
}

/// Path of `theme.conf` inside [`config_dir`], if the file exists.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    existing_file(config_dir().join("theme.conf"))
}

fn existing_file(p: PathBuf) -> Option<PathBuf> {
    p.is_file().then_some(p)
}
