//! Command-line argument definition and processing.

use clap::Parser;

/// countrydir - A fast, friendly TUI for browsing the countries of the world
#[derive(Parser, Debug, Default)]
#[command(name = "countrydir")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing the countries of the world", long_about = None)]
pub struct Args {
    /// Base URL of the countries API (overrides settings.conf)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Initial rows per page (5, 10, 25, 50, 75 or 100)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print countries matching NAME (default: usa) and exit without starting the TUI
    #[arg(long, value_name = "NAME", num_args = 0..=1)]
    pub lookup: Option<Option<String>>,
}

/// What: Merge CLI overrides into the settings loaded from disk.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings from `settings.conf`, updated in place.
///
/// Details:
/// - `--api-url` always wins over the file.
/// - `--page-size` is ignored with a warning unless it is one of the pager options.
pub fn apply_overrides(args: &Args, settings: &mut crate::theme::Settings) {
    if let Some(url) = args.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        url.trim_end_matches('/').clone_into(&mut settings.api_base_url);
    }
    if let Some(n) = args.page_size {
        if crate::state::PAGE_SIZE_OPTIONS.contains(&n) {
            settings.page_size = n;
        } else {
            tracing::warn!(page_size = n, "ignoring unsupported --page-size");
        }
    }
}
