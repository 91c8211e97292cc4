//! Keyword-by-keyword pagination with run-wide deduplication.

use std::collections::HashSet;
use std::time::Duration;

use jobfeed_core::KeywordCounts;

use crate::client::{AdzunaClient, SearchQuery};
use crate::types::RawJob;

/// A raw record paired with the keyword whose search surfaced it first.
#[derive(Debug, Clone)]
pub struct FetchedPosting {
    pub keyword: String,
    pub raw: RawJob,
}

/// Everything collected by [`fetch_all_keywords`].
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Unique postings in fetch order.
    pub postings: Vec<FetchedPosting>,
    /// New (non-duplicate) postings per keyword.
    pub per_keyword: KeywordCounts,
}

/// Accumulates postings for one run, suppressing repeats by dedup key.
///
/// Records without identifier and redirect URL share the `None` key, so
/// only the first of them survives.
#[derive(Debug, Default)]
struct RunCollector {
    seen: HashSet<Option<String>>,
    outcome: FetchOutcome,
}

impl RunCollector {
    /// Returns `true` if `raw` was new and has been retained.
    fn offer(&mut self, keyword: &str, raw: RawJob) -> bool {
        if !self.seen.insert(raw.dedup_key()) {
            return false;
        }
        self.outcome.postings.push(FetchedPosting {
            keyword: keyword.to_owned(),
            raw,
        });
        true
    }
}

/// Fetches up to `max_pages` pages for every keyword, in order.
///
/// A failed request or an empty page ends pagination for that keyword only;
/// the next keyword still runs. `inter_request_delay_ms` is slept before
/// every request except the first of the run.
pub async fn fetch_all_keywords(
    client: &AdzunaClient,
    keywords: &[String],
    query: &SearchQuery,
    max_pages: u32,
    inter_request_delay_ms: u64,
) -> FetchOutcome {
    let mut collector = RunCollector::default();
    let mut is_first_request = true;

    for keyword in keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        let mut hits = 0usize;

        for page in 1..=max_pages {
            if !is_first_request && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }
            is_first_request = false;

            let response = match client.search_page(keyword, page, query).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        keyword,
                        page,
                        error = %e,
                        "Adzuna request failed, skipping remaining pages for keyword"
                    );
                    break;
                }
            };

            if response.results.is_empty() {
                tracing::debug!(keyword, page, "empty page, pagination exhausted");
                break;
            }

            let page_len = response.results.len();
            for value in response.results {
                let raw = match serde_json::from_value::<RawJob>(value) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::debug!(keyword, page, error = %e, "skipping malformed job record");
                        continue;
                    }
                };
                if collector.offer(keyword, raw) {
                    hits += 1;
                }
            }

            tracing::debug!(keyword, page, page_len, hits, "fetched page");
        }

        tracing::info!(keyword, hits, "keyword done");
        collector.outcome.per_keyword.record(keyword, hits);
    }

    collector.outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<&str>, url: Option<&str>) -> RawJob {
        RawJob {
            id: id.map(|s| serde_json::Value::String(s.to_owned())),
            redirect_url: url.map(str::to_owned),
            ..RawJob::default()
        }
    }

    #[test]
    fn offer_rejects_repeated_id_across_keywords() {
        let mut collector = RunCollector::default();
        assert!(collector.offer("SEO", raw(Some("1"), None)));
        assert!(!collector.offer("TYPO3", raw(Some("1"), Some("https://x/1"))));
        assert_eq!(collector.outcome.postings.len(), 1);
        assert_eq!(collector.outcome.postings[0].keyword, "SEO");
    }

    #[test]
    fn offer_uses_redirect_url_when_id_missing() {
        let mut collector = RunCollector::default();
        assert!(collector.offer("SEO", raw(None, Some("https://x/1"))));
        assert!(!collector.offer("SEO", raw(None, Some("https://x/1"))));
        assert!(collector.offer("SEO", raw(None, Some("https://x/2"))));
    }

    #[test]
    fn offer_keeps_only_first_keyless_record() {
        let mut collector = RunCollector::default();
        assert!(collector.offer("SEO", raw(None, None)));
        assert!(!collector.offer("SEO", raw(None, None)));
    }
}
