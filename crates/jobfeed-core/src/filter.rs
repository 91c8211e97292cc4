//! Exclusion rules and final ordering for normalized postings.
//!
//! Rules run in a fixed order and the first match wins: the city rule is
//! checked before the term rule, so a posting matching both reports
//! [`EXCLUDED_CITY`].

use std::cmp::Reverse;

use crate::app_config::AppConfig;
use crate::jobs::JobRecord;

pub const EXCLUDED_CITY: &str = "excluded_city";
pub const EXCLUDED_TERM_PREFIX: &str = "excluded_term:";

/// Caseless form of `text` for substring matching: lower case with `ß`
/// expanded to `ss`, so `Straße` and `STRASSE` compare equal.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase().replace('ß', "ss")
}

/// Case-folded exclusion rules built once per run.
#[derive(Debug, Clone)]
pub struct FilterRules {
    exclude_city: Option<String>,
    /// `(configured spelling, folded)` pairs.
    exclude_terms: Vec<(String, String)>,
}

impl FilterRules {
    #[must_use]
    pub fn new(exclude_city: Option<&str>, exclude_terms: &[String]) -> Self {
        let exclude_city = exclude_city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(fold_case);
        let exclude_terms = exclude_terms
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| (t.to_string(), fold_case(t)))
            .collect();
        Self {
            exclude_city,
            exclude_terms,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.exclude_city.as_deref(), &config.exclude_terms)
    }

    /// Returns the reason `job` must be dropped, or `None` to keep it.
    #[must_use]
    pub fn exclusion_reason(&self, job: &JobRecord) -> Option<String> {
        if self.mentions_excluded_city(job) {
            return Some(EXCLUDED_CITY.to_string());
        }

        let haystack = fold_case(&format!("{} {} {}", job.title, job.company, job.description));
        self.exclude_terms
            .iter()
            .find(|(_, folded)| haystack.contains(folded.as_str()))
            .map(|(term, _)| format!("{EXCLUDED_TERM_PREFIX}{term}"))
    }

    /// Location string and area list are checked first; title and
    /// description catch postings whose location is only the region.
    fn mentions_excluded_city(&self, job: &JobRecord) -> bool {
        let Some(city) = self.exclude_city.as_deref() else {
            return false;
        };
        let contains = |text: &str| fold_case(text).contains(city);

        contains(&job.location)
            || job.areas.iter().any(|a| contains(a))
            || contains(&job.title)
            || contains(&job.description)
    }
}

/// Result of [`partition_jobs`].
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Kept postings in final display order.
    pub kept: Vec<JobRecord>,
    /// Dropped postings in fetch order, each with `exclude_reason` set.
    pub excluded: Vec<JobRecord>,
}

/// Splits `jobs` into kept and excluded postings and sorts the kept ones.
#[must_use]
pub fn partition_jobs(jobs: Vec<JobRecord>, rules: &FilterRules) -> Partition {
    let mut partition = Partition::default();
    for mut job in jobs {
        match rules.exclusion_reason(&job) {
            Some(reason) => {
                job.exclude_reason = Some(reason);
                partition.excluded.push(job);
            }
            None => partition.kept.push(job),
        }
    }
    sort_for_display(&mut partition.kept);
    partition
}

/// Orders by descending rank tier, then company and title ignoring case.
///
/// The sort is stable, so postings equal on all three keys keep fetch order.
pub fn sort_for_display(jobs: &mut [JobRecord]) {
    jobs.sort_by_cached_key(|job| {
        (
            Reverse(job.rank_tier()),
            fold_case(&job.company),
            fold_case(&job.title),
        )
    });
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
