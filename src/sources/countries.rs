//! Country endpoints, the raw response schema, and mapping into `CountryRecord`.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{ApiClient, ApiError, Result};
use crate::state::CountryRecord;

/// Name used by [`fetch_by_name`] when the caller passes none.
pub const DEFAULT_LOOKUP_NAME: &str = "usa";

/// `name` object of a raw country.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawName {
    /// Official name.
    pub official: Option<String>,
    /// Common name.
    pub common: Option<String>,
}

/// `idd` object of a raw country.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawIdd {
    /// Dialing prefix root such as `+6`.
    pub root: Option<String>,
}

/// `flags` object of a raw country.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawFlags {
    /// PNG flag URL.
    pub png: Option<String>,
}

/// One unmapped country object as returned by the API.
///
/// Every field is optional: `null` and missing values both deserialize to `None`
/// and become empty strings in [`map_records`]. Unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCountry {
    /// Names block.
    pub name: Option<RawName>,
    /// Alpha-2 code.
    pub cca2: Option<String>,
    /// Alpha-3 code.
    pub cca3: Option<String>,
    /// Dialing code block.
    pub idd: Option<RawIdd>,
    /// Flag images block.
    pub flags: Option<RawFlags>,
    /// Alternate spellings.
    #[serde(rename = "altSpellings")]
    pub alt_spellings: Option<Vec<String>>,
}

/// What: Validate a JSON body as a list of raw countries.
///
/// Inputs:
/// - `value`: Parsed response body.
///
/// Output:
/// - Raw countries in response order.
///
/// # Errors
/// - `ApiError::Schema` when the body is not an array of objects or a known field has
///   the wrong type (e.g. `cca2` is a number).
pub fn parse_countries(value: Value) -> Result<Vec<RawCountry>> {
    if !value.is_array() {
        return Err(ApiError::Schema(format!(
            "expected a JSON array of countries, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Schema(e.to_string()))
}

/// Short type name of a JSON value for error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What: Map raw countries into display records.
///
/// Inputs:
/// - `raw`: Countries in response order.
///
/// Output:
/// - Records whose `id` is the position in `raw`; absent scalars become `""` and absent
///   spellings an empty list.
#[must_use]
pub fn map_records(raw: Vec<RawCountry>) -> Vec<CountryRecord> {
    raw.into_iter()
        .enumerate()
        .map(|(id, c)| {
            let name = c.name.unwrap_or_default();
            CountryRecord {
                id,
                name: name.official.unwrap_or_default(),
                native_name: name.common.unwrap_or_default(),
                cca2: c.cca2.unwrap_or_default(),
                cca3: c.cca3.unwrap_or_default(),
                calling_code: c.idd.and_then(|i| i.root).unwrap_or_default(),
                flag_url: c.flags.and_then(|f| f.png).unwrap_or_default(),
                alternate_names: c.alt_spellings.unwrap_or_default(),
            }
        })
        .collect()
}

/// What: Fetch every country (`GET /all`).
///
/// Output:
/// - Raw countries in response order.
///
/// # Errors
/// - Whatever [`ApiClient::get_json`] returns, unchanged.
/// - `ApiError::Schema` when the body is not a country list.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<RawCountry>> {
    let body = client.get_json("/all").await?;
    let out = parse_countries(body)?;
    info!(count = out.len(), "fetched all countries");
    Ok(out)
}

/// What: Fetch countries matching a name (`GET /name/{name}`).
///
/// Inputs:
/// - `name`: Search name; `None` uses [`DEFAULT_LOOKUP_NAME`].
///
/// Output:
/// - Raw countries in response order.
///
/// # Errors
/// - Same as [`fetch_all`]. The API answers 404 for unknown names, which surfaces as
///   `ApiError::Status`.
pub async fn fetch_by_name(client: &ApiClient, name: Option<&str>) -> Result<Vec<RawCountry>> {
    let name = name.unwrap_or(DEFAULT_LOOKUP_NAME);
    let body = client.get_json_segments(&["name", name]).await?;
    let out = parse_countries(body)?;
    info!(name = name, count = out.len(), "fetched countries by name");
    Ok(out)
}
