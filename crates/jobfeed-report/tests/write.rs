//! Integration tests for `write_report`, using a temporary output directory.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use jobfeed_core::{AppConfig, DisplayClock, JobRecord, KeywordCounts, RunOutput, SalaryFit};
use jobfeed_report::{write_report, ReportPaths};
use serde_json::Number;

fn test_config() -> AppConfig {
    AppConfig {
        adzuna_app_id: "id".to_owned(),
        adzuna_app_key: "key".to_owned(),
        adzuna_country: "de".to_owned(),
        adzuna_base_url: "https://api.adzuna.com".to_owned(),
        home_city: "Lauffen am Neckar".to_owned(),
        exclude_city: Some("Stuttgart".to_owned()),
        radius_km: 30,
        salary_min_year: 54_000,
        keywords: vec!["Webdesigner".to_owned()],
        exclude_terms: vec!["Arbeitnehmerüberlassung".to_owned()],
        max_pages: 2,
        results_per_page: 50,
        timezone: "Europe/Berlin".to_owned(),
        output_dir: PathBuf::from("site"),
        request_timeout_secs: 20,
        inter_request_delay_ms: 0,
        user_agent: "jobfeed-test/0.1".to_owned(),
        log_level: "info".to_owned(),
    }
}

fn make_job(id: &str, salary_max: Option<Number>, fit: SalaryFit) -> JobRecord {
    JobRecord {
        id: id.to_owned(),
        title: "Webdesigner".to_owned(),
        company: "Agentur Nord".to_owned(),
        location: "Heilbronn".to_owned(),
        areas: vec![],
        created: "2025-03-01T09:00:00Z".to_owned(),
        created_local: Some("01.03.2025 10:00".to_owned()),
        redirect_url: None,
        description: String::new(),
        contract_type: String::new(),
        contract_time: String::new(),
        category: None,
        salary_min: None,
        salary_max,
        salary_is_predicted: false,
        source: "Adzuna".to_owned(),
        is_remote_guess: false,
        meets_salary: fit,
        keyword: "Webdesigner".to_owned(),
        exclude_reason: None,
    }
}

fn make_output(jobs: Vec<JobRecord>, excluded: usize) -> RunOutput {
    let mut per_keyword = KeywordCounts::new();
    per_keyword.record("Webdesigner", jobs.len() + excluded);
    RunOutput::new(
        &test_config(),
        Utc.with_ymd_and_hms(2025, 3, 2, 5, 0, 0).unwrap(),
        per_keyword,
        jobs,
        excluded,
    )
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("json file should exist");
    serde_json::from_str(&text).expect("json file should parse")
}

#[test]
fn writes_both_artifacts_with_matching_counts() {
    let dir = tempfile::tempdir().unwrap();
    let output = make_output(
        vec![
            make_job("1", Some(Number::from(60_000)), SalaryFit::Meets),
            make_job("2", None, SalaryFit::Unknown),
        ],
        3,
    );

    let paths = write_report(&output, &DisplayClock::from_name("Europe/Berlin"), dir.path())
        .expect("report should be written");

    assert_eq!(paths, ReportPaths::under(dir.path()));
    assert!(paths.html.exists());

    let json = read_json(&paths.json);
    assert_eq!(json["counts"]["kept"], 2);
    assert_eq!(json["counts"]["excluded"], 3);
    assert_eq!(json["counts"]["fetched_total"], 5);
    assert_eq!(json["counts"]["per_keyword"]["Webdesigner"], 5);
    assert_eq!(
        json["counts"]["kept"].as_u64().unwrap(),
        json["jobs"].as_array().unwrap().len() as u64
    );
    assert_eq!(json["generated_at_utc"], "2025-03-02T05:00:00Z");
    assert_eq!(json["sources"], serde_json::json!(["Adzuna"]));
    assert_eq!(json["salary_min_year"], 54_000);
    assert_eq!(json["jobs"][0]["meets_salary"], true);
    assert!(json["jobs"][1]["meets_salary"].is_null());
    assert!(json["jobs"][0].get("exclude_reason").is_none());
}

#[test]
fn json_keeps_non_ascii_text_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let output = make_output(vec![], 0);

    let paths = write_report(&output, &DisplayClock::from_name("Europe/Berlin"), dir.path())
        .expect("report should be written");

    let text = std::fs::read_to_string(&paths.json).unwrap();
    assert!(text.contains("Arbeitnehmerüberlassung"));
}

#[test]
fn empty_run_writes_empty_jobs_and_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let output = make_output(vec![], 0);

    let paths = write_report(&output, &DisplayClock::from_name("Europe/Berlin"), dir.path())
        .expect("report should be written");

    let json = read_json(&paths.json);
    assert_eq!(json["jobs"], serde_json::json!([]));
    assert_eq!(json["counts"]["kept"], 0);

    let html = std::fs::read_to_string(&paths.html).unwrap();
    assert!(html.contains("No matching postings found."));
}

#[test]
fn rerun_overwrites_previous_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let clock = DisplayClock::from_name("Europe/Berlin");

    write_report(
        &make_output(vec![make_job("1", None, SalaryFit::Unknown)], 0),
        &clock,
        dir.path(),
    )
    .unwrap();
    let paths = write_report(&make_output(vec![], 0), &clock, dir.path()).unwrap();

    let json = read_json(&paths.json);
    assert_eq!(json["counts"]["kept"], 0);
}

#[test]
fn integral_salary_is_written_without_fraction() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = make_job("1", Some(Number::from(60_000)), SalaryFit::Meets);
    job.salary_min = Number::from_f64(48_000.5);
    let output = make_output(vec![job], 0);

    let paths = write_report(&output, &DisplayClock::from_name("Europe/Berlin"), dir.path())
        .expect("report should be written");

    let text = std::fs::read_to_string(&paths.json).unwrap();
    assert!(text.contains("\"salary_max\": 60000,"));
    assert!(text.contains("\"salary_min\": 48000.5,"));
}

#[test]
fn html_escapes_provider_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = make_job("1", None, SalaryFit::Unknown);
    job.title = "<img src=x onerror=alert(1)>".to_owned();
    let output = make_output(vec![job], 0);

    let paths = write_report(&output, &DisplayClock::from_name("Europe/Berlin"), dir.path())
        .expect("report should be written");

    let html = std::fs::read_to_string(&paths.html).unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}
