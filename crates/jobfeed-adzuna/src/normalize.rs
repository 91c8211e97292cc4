//! Normalization of Adzuna records into [`JobRecord`]s.
//!
//! Pure functions of the raw record, keyword, salary threshold and display
//! clock: normalizing the same input twice yields equal records.

use chrono::{DateTime, NaiveDateTime, Utc};
use jobfeed_core::{DisplayClock, JobRecord, SalaryFit, SOURCE_TAG};
use serde_json::{Number, Value};

use crate::types::RawJob;

/// Lower-case markers for the remote/hybrid heuristic.
const REMOTE_TERMS: &[&str] = &[
    "remote",
    "homeoffice",
    "home office",
    "hybrid",
    "partial-remote",
    "teil-remote",
];

/// Converts a raw Adzuna record into a [`JobRecord`].
///
/// `exclude_reason` is left empty; filtering happens afterwards.
#[must_use]
pub fn normalize_job(
    raw: &RawJob,
    keyword: &str,
    salary_min_year: u32,
    clock: &DisplayClock,
) -> JobRecord {
    let title = trimmed(raw.title.as_deref());
    let description = trimmed(raw.description.as_deref());
    let created = trimmed(raw.created.as_deref());
    let created_local = parse_created(&created).map(|instant| clock.format(instant));

    let (location, areas) = match &raw.location {
        Some(loc) => (
            trimmed(loc.display_name.as_deref()),
            loc.area.iter().map(|a| a.trim().to_string()).collect(),
        ),
        None => (String::new(), Vec::new()),
    };

    let is_remote_guess = is_remote_guess(&title, &description);

    JobRecord {
        id: raw.id_string().unwrap_or_default(),
        company: trimmed(raw.company.as_ref().and_then(|c| c.display_name.as_deref())),
        location,
        areas,
        created,
        created_local,
        redirect_url: non_blank(raw.redirect_url.as_deref()),
        contract_type: trimmed(raw.contract_type.as_deref()),
        contract_time: trimmed(raw.contract_time.as_deref()),
        category: non_blank(raw.category.as_ref().and_then(|c| c.label.as_deref())),
        salary_min: raw.salary_min.as_ref().and_then(number_value),
        salary_max: raw.salary_max.as_ref().and_then(number_value),
        salary_is_predicted: raw.salary_is_predicted.as_ref().is_some_and(flag_value),
        source: SOURCE_TAG.to_string(),
        is_remote_guess,
        meets_salary: salary_fit(
            raw.salary_min.as_ref(),
            raw.salary_max.as_ref(),
            salary_min_year,
        ),
        keyword: keyword.to_string(),
        exclude_reason: None,
        title,
        description,
    }
}

/// Parses an Adzuna `created` timestamp.
///
/// Accepts RFC 3339 (`Z` or numeric offset) and offset-less ISO-8601, which
/// is read as UTC. Returns `None` for anything else.
#[must_use]
pub fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `true` if title or description mention remote or hybrid work.
#[must_use]
pub fn is_remote_guess(title: &str, description: &str) -> bool {
    let text = format!("{title} {description}").to_lowercase();
    REMOTE_TERMS.iter().any(|term| text.contains(term))
}

/// Compares the advertised salary with `minimum`.
///
/// Uses the maximum bound, or the minimum bound when no maximum is given.
/// Unknown when both bounds are absent or the chosen bound is not numeric.
#[must_use]
pub fn salary_fit(min: Option<&Value>, max: Option<&Value>, minimum: u32) -> SalaryFit {
    fn present(value: Option<&Value>) -> Option<&Value> {
        value.filter(|v| !v.is_null())
    }

    let Some(chosen) = present(max).or_else(|| present(min)) else {
        return SalaryFit::Unknown;
    };
    number_value(chosen)
        .as_ref()
        .and_then(Number::as_f64)
        .map_or(SalaryFit::Unknown, |value| SalaryFit::compare(value, minimum))
}

/// Reads a JSON number as sent, or a string holding one. Integral strings
/// stay integers so `"60000"` and `60000` serialize the same way.
fn number_value(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    }
}

/// Adzuna sends `"0"` / `"1"`; booleans and numbers are accepted too.
fn flag_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => matches!(s.trim(), "1" | "true"),
        _ => false,
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
