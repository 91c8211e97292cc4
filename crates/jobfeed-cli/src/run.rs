//! One complete run: fetch, normalize, filter, rank, write.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use jobfeed_adzuna::{fetch_all_keywords, normalize_job, AdzunaClient, SearchQuery};
use jobfeed_core::{partition_jobs, AppConfig, DisplayClock, FilterRules, JobRecord, RunOutput};
use jobfeed_report::write_report;

/// Executes a run and prints the one-line summary.
///
/// Request failures only cost the affected keyword; the run still writes
/// whatever was collected.
///
/// # Errors
///
/// Returns an error if the Adzuna client cannot be built or the artifacts
/// cannot be written.
pub(crate) async fn execute(
    config: &AppConfig,
    out_dir: Option<PathBuf>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let clock = display_clock(config);
    let client = AdzunaClient::from_config(config)?;

    tracing::info!(
        keywords = config.keywords.len(),
        max_pages = config.max_pages,
        home_city = %config.home_city,
        "starting run"
    );
    let output = build_run_output(config, &client, &clock, Utc::now()).await;

    if dry_run {
        tracing::info!("dry run, no files written");
        println!("{}", summary_line(&output));
        return Ok(());
    }

    let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
    let paths = write_report(&output, &clock, &out_dir)?;
    println!(
        "{} HTML & JSON written ({}, {}).",
        summary_line(&output),
        paths.html.display(),
        paths.json.display()
    );
    Ok(())
}

/// Resolves the configured timezone, warning once when it is unknown.
pub(crate) fn display_clock(config: &AppConfig) -> DisplayClock {
    let clock = DisplayClock::from_name(&config.timezone);
    if clock.is_fallback() {
        tracing::warn!(
            timezone = %config.timezone,
            "unknown timezone, rendering timestamps in UTC"
        );
    }
    clock
}

/// Fetches every keyword and turns the result into the run aggregate.
pub(crate) async fn build_run_output(
    config: &AppConfig,
    client: &AdzunaClient,
    clock: &DisplayClock,
    generated_at: DateTime<Utc>,
) -> RunOutput {
    let query = SearchQuery::from_config(config);
    let fetched = fetch_all_keywords(
        client,
        &config.keywords,
        &query,
        config.max_pages,
        config.inter_request_delay_ms,
    )
    .await;

    let jobs: Vec<JobRecord> = fetched
        .postings
        .iter()
        .map(|p| normalize_job(&p.raw, &p.keyword, config.salary_min_year, clock))
        .collect();

    let partition = partition_jobs(jobs, &FilterRules::from_config(config));
    for job in &partition.excluded {
        tracing::debug!(
            id = %job.id,
            title = %job.title,
            reason = job.exclude_reason.as_deref().unwrap_or_default(),
            "posting excluded"
        );
    }

    let excluded = partition.excluded.len();
    tracing::info!(
        fetched = fetched.postings.len(),
        kept = partition.kept.len(),
        excluded,
        "filtering done"
    );

    RunOutput::new(
        config,
        generated_at,
        fetched.per_keyword,
        partition.kept,
        excluded,
    )
}

pub(crate) fn summary_line(output: &RunOutput) -> String {
    format!(
        "[OK] {} raw postings, {} after filters.",
        output.counts.fetched_total, output.counts.kept
    )
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
