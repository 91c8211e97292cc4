//! Adzuna search response types.
//!
//! Every field of a job record is optional on the wire. Accessors on
//! [`RawJob`] document the default used when a field is missing. Text fields
//! accept any JSON scalar and `null`, so an odd value degrades to a default
//! instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page of `GET /v1/api/jobs/{country}/search/{page}`.
///
/// `results` is kept as raw JSON so a single malformed record can be skipped
/// without losing the rest of the page.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<Value>,
    /// Total matches reported by Adzuna across all pages.
    #[serde(default)]
    pub count: Option<u64>,
}

/// A single job advert as returned by Adzuna.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJob {
    /// Usually a numeric string; older responses send a bare number.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<RawCompany>,
    #[serde(default)]
    pub location: Option<RawLocation>,
    /// ISO-8601 timestamp, e.g. `"2025-03-01T09:00:00Z"`.
    #[serde(default, deserialize_with = "scalar_text")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub redirect_url: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub contract_time: Option<String>,
    #[serde(default)]
    pub category: Option<RawCategory>,
    /// Annual figure; kept as raw JSON so a non-numeric value degrades to
    /// "unknown" instead of failing the record.
    #[serde(default)]
    pub salary_min: Option<Value>,
    #[serde(default)]
    pub salary_max: Option<Value>,
    /// `"1"` when Adzuna estimated the salary rather than reading it from
    /// the advert.
    #[serde(default)]
    pub salary_is_predicted: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCompany {
    #[serde(default, deserialize_with = "scalar_text")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLocation {
    #[serde(default, deserialize_with = "scalar_text")]
    pub display_name: Option<String>,
    /// Administrative areas from country down to district.
    #[serde(default, deserialize_with = "area_list")]
    pub area: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "scalar_text")]
    pub label: Option<String>,
}

impl RawJob {
    /// The identifier as a string; `None` when absent, blank or not a
    /// string/number.
    #[must_use]
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Identifier if present, else the redirect URL.
    #[must_use]
    pub fn dedup_key(&self) -> Option<String> {
        self.id_string().or_else(|| {
            self.redirect_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string)
        })
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_of))
}

/// `null` or a non-list reads as no areas; non-scalar entries are dropped.
fn area_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items.into_iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    })
}
