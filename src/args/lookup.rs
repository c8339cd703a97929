//! Command-line lookup: print countries matching a name and exit.

use unicode_width::UnicodeWidthStr;

use crate::sources::{ApiClient, fetch_by_name, map_records};
use crate::state::CountryRecord;

/// What: Render records as aligned plain-text lines for the terminal.
///
/// Inputs:
/// - `records`: Mapped countries in response order.
///
/// Output:
/// - One header line plus one line per record; the name column is padded by display width.
#[must_use]
pub fn format_lookup_lines(records: &[CountryRecord]) -> Vec<String> {
    let name_w = records
        .iter()
        .map(|r| r.name.width())
        .chain(std::iter::once("Name".width()))
        .max()
        .unwrap_or(4);
    let pad = |s: &str| format!("{s}{}", " ".repeat(name_w.saturating_sub(s.width())));
    let mut out = Vec::with_capacity(records.len() + 1);
    out.push(format!("{}  CCA2  CCA3  IDD    Native Name", pad("Name")));
    for r in records {
        out.push(format!(
            "{}  {:<4}  {:<4}  {:<5}  {}",
            pad(&r.name),
            r.cca2,
            r.cca3,
            r.calling_code,
            r.native_name
        ));
    }
    out
}

/// What: Fetch countries by name and format them.
///
/// Inputs:
/// - `client`: Configured API client.
/// - `name`: Name to look up; `None` uses the default lookup name.
///
/// Output:
/// - Formatted lines, or the service error.
pub async fn lookup_lines(client: &ApiClient, name: Option<&str>) -> crate::sources::Result<Vec<String>> {
    let raw = fetch_by_name(client, name).await?;
    Ok(format_lookup_lines(&map_records(raw)))
}

/// What: Handle `--lookup` by printing matches to stdout.
///
/// Output:
/// - Process exit code: `0` on success, `1` on any failure.
///
/// Details:
/// - Does not start the TUI; errors go to stderr and the log.
pub async fn handle_lookup(base_url: &str, name: Option<&str>) -> i32 {
    tracing::info!(name = ?name, base_url, "lookup mode requested from CLI");
    let client = match ApiClient::new(base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("countrydir: {e}");
            tracing::error!(error = %e, "invalid API configuration");
            return 1;
        }
    };
    match lookup_lines(&client, name).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            0
        }
        Err(e) => {
            eprintln!("countrydir: {e}");
            tracing::error!(error = %e, "lookup failed");
            1
        }
    }
}
