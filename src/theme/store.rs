use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{parse_color_value, split_key_value};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Palette loaded once per process.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Overlay color keys from `content` onto `base`.
///
/// Output:
/// - The updated theme and the keys that could not be applied (unknown key or bad color).
pub(crate) fn apply_theme_overrides(content: &str, mut base: Theme) -> (Theme, Vec<String>) {
    let mut rejected = Vec::new();
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            rejected.push(key);
            continue;
        };
        let slot = match key.trim_start_matches("color_") {
            "base" | "background" => Some(&mut base.base),
            "mantle" | "panel" => Some(&mut base.mantle),
            "crust" => Some(&mut base.crust),
            "surface1" => Some(&mut base.surface1),
            "surface2" => Some(&mut base.surface2),
            "overlay1" | "border" => Some(&mut base.overlay1),
            "text" | "foreground" => Some(&mut base.text),
            "subtext0" | "muted" => Some(&mut base.subtext0),
            "sapphire" | "accent" => Some(&mut base.sapphire),
            "mauve" | "heading" => Some(&mut base.mauve),
            "green" => Some(&mut base.green),
            "red" | "error" => Some(&mut base.red),
            "lavender" | "highlight" => Some(&mut base.lavender),
            _ => None,
        };
        match slot {
            Some(slot) => *slot = color,
            None => rejected.push(key),
        }
    }
    (base, rejected)
}

fn load_theme_from_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (theme, rejected) = apply_theme_overrides(&content, Theme::default());
            if !rejected.is_empty() {
                tracing::warn!(path = %path.display(), keys = ?rejected, "ignored theme entries");
            }
            tracing::info!(path = %path.display(), "loaded theme configuration");
            theme
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read theme; using defaults");
            Theme::default()
        }
    }
}

fn load_theme() -> Theme {
    resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from_file(&p))
}

/// Return the application's theme palette, loading `theme.conf` on first use.
///
/// Format: key = value, one per line; values are colors as "#RRGGBB" or "R,G,B".
/// Keys absent from the file keep the built-in palette.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_theme)
}
