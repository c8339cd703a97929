use std::fs;

use super::parsing::{parse_bool, split_key_value};
use super::paths::resolve_settings_config_path;
use super::types::Settings;
use crate::state::{PAGE_SIZE_OPTIONS, SortColumn, SortDirection};

/// Commented template written on first run so users can discover the keys.
pub const SETTINGS_SKELETON_CONTENT: &str = "# countrydir settings
# Lines are `key = value`. `#` starts a comment.

# Base URL of the countries API.
# api_base_url = https://restcountries.com/v3.1

# Rows per page: 5, 10, 25, 50, 75 or 100.
page_size = 25

# Initial sort: flag, name, cca2, cca3, native_name, alternate_names, idd
sort_column = name
# asc or desc
sort_direction = desc

# Show the key-hint footer.
show_footer = true
";

/// Load user settings from `settings.conf`.
/// Falls back to `Settings::default()` when missing or unreadable.
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_config_path() else {
        write_skeleton_if_missing();
        return out;
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings");
        }
    }
    out
}

/// What: Apply every recognized `key = value` line of `content` onto `out`.
///
/// Inputs:
/// - `content`: Raw file text.
/// - `out`: Settings to update in place; unknown keys and invalid values leave it untouched.
///
/// Details:
/// - Page sizes outside the pager options are rejected with a warning.
pub fn parse_settings(content: &str, out: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "api_url" => {
                if !val.is_empty() {
                    val.trim_end_matches('/').clone_into(&mut out.api_base_url);
                }
            }
            "page_size" | "rows_per_page" => match val.parse::<usize>() {
                Ok(n) if PAGE_SIZE_OPTIONS.contains(&n) => out.page_size = n,
                _ => tracing::warn!(value = val, "ignoring unsupported page_size"),
            },
            "sort_column" | "sort_by" => {
                if let Some(col) = SortColumn::from_config_key(val) {
                    out.sort_column = col;
                }
            }
            "sort_direction" | "sort_order" => {
                if let Some(dir) = SortDirection::from_config_key(val) {
                    out.sort_direction = dir;
                }
            }
            "show_footer" | "show_keybinds_footer" => {
                out.show_footer = parse_bool(val);
            }
            _ => {}
        }
    }
}

fn write_skeleton_if_missing() {
    let target = super::paths::config_dir().join("settings.conf");
    if target.exists() {
        return;
    }
    if let Err(e) = fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        tracing::debug!(path = %target.display(), error = %e, "could not write settings skeleton");
    }
}
