//! The per-run aggregate written to `jobs.json`.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::app_config::AppConfig;
use crate::jobs::{JobRecord, SOURCE_TAG};

/// New-posting counts per search keyword, kept in configuration order.
///
/// Serializes as a JSON object keyed by keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts(Vec<(String, usize)>);

impl KeywordCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `hits` to `keyword`, registering it on first sight.
    pub fn record(&mut self, keyword: &str, hits: usize) {
        if let Some((_, count)) = self.0.iter_mut().find(|(k, _)| k == keyword) {
            *count += hits;
        } else {
            self.0.push((keyword.to_string(), hits));
        }
    }

    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == keyword).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for KeywordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (keyword, count) in &self.0 {
            map.serialize_entry(keyword, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub fetched_total: usize,
    pub kept: usize,
    pub excluded: usize,
    pub per_keyword: KeywordCounts,
}

/// Everything one run produced. Built once, then serialized.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub generated_at_utc: DateTime<Utc>,
    pub home_city: String,
    pub exclude_city: Option<String>,
    pub radius_km: u32,
    pub salary_min_year: u32,
    pub keywords: Vec<String>,
    pub exclude_terms: Vec<String>,
    pub sources: Vec<String>,
    pub counts: RunCounts,
    pub jobs: Vec<JobRecord>,
}

impl RunOutput {
    /// Assembles the aggregate, deriving every count from its inputs so
    /// `counts.kept` always equals `jobs.len()`.
    #[must_use]
    pub fn new(
        config: &AppConfig,
        generated_at_utc: DateTime<Utc>,
        per_keyword: KeywordCounts,
        kept: Vec<JobRecord>,
        excluded: usize,
    ) -> Self {
        Self {
            generated_at_utc,
            home_city: config.home_city.clone(),
            exclude_city: config.exclude_city.clone(),
            radius_km: config.radius_km,
            salary_min_year: config.salary_min_year,
            keywords: config.keywords.clone(),
            exclude_terms: config.exclude_terms.clone(),
            sources: vec![SOURCE_TAG.to_string()],
            counts: RunCounts {
                fetched_total: kept.len() + excluded,
                kept: kept.len(),
                excluded,
                per_keyword,
            },
            jobs: kept,
        }
    }
}
