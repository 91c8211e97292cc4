//! Adzuna job-search client: paginated fetching, run-wide deduplication and
//! normalization into [`jobfeed_core::JobRecord`]s.

pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod types;

pub use client::{AdzunaClient, SearchQuery};
pub use error::AdzunaError;
pub use fetch::{fetch_all_keywords, FetchOutcome, FetchedPosting};
pub use normalize::normalize_job;
pub use types::{RawJob, SearchPage};
