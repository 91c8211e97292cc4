//! Static HTML page for browsing the kept postings.
//!
//! Markup lives in `templates/index.html`; askama escapes every value, so
//! the view models below carry plain text.

use askama::Template;
use jobfeed_core::{DisplayClock, JobRecord, RunOutput, SalaryFit};

use crate::error::ReportError;
use crate::text::{
    clean_description, created_display, group_thousands, salary_text, DESCRIPTION_MAX_CHARS,
};

pub const EMPTY_PLACEHOLDER: &str = "No matching postings found.";

/// Salary badge shown next to the salary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBadge {
    pub class: &'static str,
    pub label: &'static str,
}

impl From<SalaryFit> for SalaryBadge {
    fn from(fit: SalaryFit) -> Self {
        let (class, label) = match fit {
            SalaryFit::Meets => ("good", "≥ minimum salary"),
            SalaryFit::Unknown => ("neutral", "salary unknown"),
            SalaryFit::Below => ("warn", "below minimum salary"),
        };
        Self { class, label }
    }
}

/// One card on the page.
#[derive(Debug, Clone)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
    pub source: String,
    pub created: String,
    pub keyword: String,
    pub salary: String,
    pub badge: SalaryBadge,
    pub description: String,
    pub href: String,
}

impl From<&JobRecord> for JobCard {
    fn from(job: &JobRecord) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            is_remote: job.is_remote_guess,
            source: job.source.clone(),
            created: created_display(job),
            keyword: job.keyword.clone(),
            salary: salary_text(job),
            badge: SalaryBadge::from(job.meets_salary),
            description: clean_description(&job.description, DESCRIPTION_MAX_CHARS),
            href: job.redirect_url.clone().unwrap_or_else(|| "#".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeywordRow {
    pub keyword: String,
    pub hits: usize,
}

/// View model for the whole page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    pub home_city: String,
    pub radius_km: u32,
    pub exclude_city: Option<String>,
    pub updated: String,
    pub min_salary: String,
    pub sources: String,
    pub keywords: String,
    pub exclude_terms: String,
    pub kept: usize,
    pub keyword_rows: Vec<KeywordRow>,
    pub cards: Vec<JobCard>,
    pub empty_placeholder: &'static str,
    pub year: i32,
}

impl IndexView {
    /// Builds the page model for `output`, with timestamps in `clock`'s zone.
    #[must_use]
    pub fn new(output: &RunOutput, clock: &DisplayClock) -> Self {
        Self {
            home_city: output.home_city.clone(),
            radius_km: output.radius_km,
            exclude_city: output
                .exclude_city
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            updated: clock.format(output.generated_at_utc),
            min_salary: group_thousands(u64::from(output.salary_min_year)),
            sources: output.sources.join(", "),
            keywords: output.keywords.join(", "),
            exclude_terms: output.exclude_terms.join(", "),
            kept: output.counts.kept,
            keyword_rows: output
                .counts
                .per_keyword
                .iter()
                .map(|(keyword, hits)| KeywordRow {
                    keyword: keyword.to_string(),
                    hits,
                })
                .collect(),
            cards: output.jobs.iter().map(JobCard::from).collect(),
            empty_placeholder: EMPTY_PLACEHOLDER,
            year: clock.year(output.generated_at_utc),
        }
    }
}

/// Renders the complete page for `output`.
///
/// # Errors
///
/// Returns [`ReportError::Template`] if the template fails to render.
pub fn render_html(output: &RunOutput, clock: &DisplayClock) -> Result<String, ReportError> {
    Ok(IndexView::new(output, clock).render()?)
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
