//! Text helpers for the HTML view models.

use std::sync::LazyLock;

use jobfeed_core::JobRecord;
use regex::Regex;
use serde_json::Number;

/// Longest description shown on a card, in characters, ellipsis included.
pub const DESCRIPTION_MAX_CHARS: usize = 360;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses whitespace and truncates to `max_chars` with a trailing `…`.
///
/// Returns plain text; the template escapes it afterwards, so an entity is
/// never cut in half.
#[must_use]
pub fn clean_description(text: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let collapsed = collapsed.trim();
    if collapsed.chars().count() <= max_chars {
        return collapsed.to_string();
    }
    let head: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    let mut shortened = head.trim_end().to_string();
    shortened.push('…');
    shortened
}

/// Formats an integer with comma thousands separators: `54000` → `"54,000"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole euros for display. Zero, negative and non-finite figures are
/// treated as absent.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn euros(value: Option<&Number>) -> Option<String> {
    let value = value
        .and_then(Number::as_f64)
        .filter(|v| v.is_finite() && *v >= 1.0)?;
    Some(format!("€{}", group_thousands(value.trunc() as u64)))
}

/// `"min €48,000 / max €60,000 p.a."`, or `"Salary: unknown"` when the
/// posting carries no usable figure.
#[must_use]
pub fn salary_text(job: &JobRecord) -> String {
    let parts: Vec<String> = [
        euros(job.salary_min.as_ref()).map(|v| format!("min {v}")),
        euros(job.salary_max.as_ref()).map(|v| format!("max {v}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "Salary: unknown".to_string()
    } else {
        format!("{} p.a.", parts.join(" / "))
    }
}

/// Localized creation time, else the first 16 characters of the raw value.
#[must_use]
pub fn created_display(job: &JobRecord) -> String {
    match &job.created_local {
        Some(local) => local.clone(),
        None => job.created.chars().take(16).collect(),
    }
}
