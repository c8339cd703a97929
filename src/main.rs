//! countrydir binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use countrydir::{app, args, theme};

struct CountrydirTimer;

impl tracing_subscriber::fmt::time::FormatTime for CountrydirTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        // "YYYY-MM-DD-T HH:MM:SS" in UTC
        let ts = chrono::Utc::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter directive when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `<logs_dir>/countrydir.log` without ANSI; falls back to stderr when the file
///   cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("countrydir.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CountrydirTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is not blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CountrydirTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = theme::settings();
    args::apply_overrides(&cli, &mut settings);

    if let Some(name) = &cli.lookup {
        let code = args::handle_lookup(&settings.api_base_url, name.as_deref()).await;
        std::process::exit(code);
    }

    tracing::info!(base_url = %settings.api_base_url, "countrydir starting");
    let options = app::RunOptions {
        settings,
        ..Default::default()
    };
    if let Err(err) = app::run(options).await {
        eprintln!("countrydir: {err}");
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("countrydir exited");
}
