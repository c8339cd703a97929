use ratatui::style::Color;

use crate::state::{DEFAULT_PAGE_SIZE, SortColumn, SortDirection};

/// Base URL used when neither the CLI, the settings file, nor the build environment
/// provides one.
pub const FALLBACK_API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// What: Base URL compiled into the binary.
///
/// Output:
/// - `COUNTRIES_API_URL` as seen at build time, or [`FALLBACK_API_BASE_URL`].
#[must_use]
pub fn build_time_api_base_url() -> &'static str {
    match option_env!("COUNTRIES_API_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => FALLBACK_API_BASE_URL,
    }
}

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels and overlays.
    pub mantle: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for unfocused borders.
    pub surface1: Color,
    /// Subtle surface color for header rows.
    pub surface2: Color,
    /// Muted line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color for interactive elements (search prompt, links).
    pub sapphire: Color,
    /// Accent color for headings and focused borders.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for the highlighted row.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the countries API (no trailing slash needed).
    pub api_base_url: String,
    /// Initial rows per page.
    pub page_size: usize,
    /// Initial sort column.
    pub sort_column: SortColumn,
    /// Initial sort direction.
    pub sort_direction: SortDirection,
    /// Show the key-hint footer.
    pub show_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: build_time_api_base_url().to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: SortColumn::Name,
            sort_direction: SortDirection::Descending,
            show_footer: true,
        }
    }
}
