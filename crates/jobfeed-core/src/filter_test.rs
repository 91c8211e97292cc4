use super::*;
use crate::jobs::{SalaryFit, SOURCE_TAG};

fn make_job(id: &str, title: &str, company: &str, fit: SalaryFit) -> JobRecord {
    JobRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        company: company.to_owned(),
        location: "Heilbronn, Baden-Württemberg".to_owned(),
        areas: vec![
            "Deutschland".to_owned(),
            "Baden-Württemberg".to_owned(),
            "Heilbronn".to_owned(),
        ],
        created: "2025-03-01T09:00:00Z".to_owned(),
        created_local: Some("01.03.2025 10:00".to_owned()),
        redirect_url: Some(format!("https://www.adzuna.de/details/{id}")),
        description: "Wir suchen Verstärkung für unser Team.".to_owned(),
        contract_type: String::new(),
        contract_time: "full_time".to_owned(),
        category: Some("IT-Stellen".to_owned()),
        salary_min: None,
        salary_max: None,
        salary_is_predicted: false,
        source: SOURCE_TAG.to_owned(),
        is_remote_guess: false,
        meets_salary: fit,
        keyword: "Webdesigner".to_owned(),
        exclude_reason: None,
    }
}

fn default_rules() -> FilterRules {
    FilterRules::new(
        Some("Stuttgart"),
        &["Zeitarbeit".to_owned(), "Personaldienstleister".to_owned()],
    )
}

// -----------------------------------------------------------------------
// exclusion_reason
// -----------------------------------------------------------------------

#[test]
fn keeps_posting_without_matches() {
    let job = make_job("1", "Webdesigner (m/w/d)", "Agentur Nord", SalaryFit::Unknown);
    assert_eq!(default_rules().exclusion_reason(&job), None);
}

#[test]
fn city_in_location_is_excluded_case_insensitively() {
    let mut job = make_job("1", "Webdesigner", "Agentur", SalaryFit::Unknown);
    job.location = "STUTTGART, Baden-Württemberg".to_owned();
    assert_eq!(
        default_rules().exclusion_reason(&job).as_deref(),
        Some(EXCLUDED_CITY)
    );
}

#[test]
fn city_in_area_list_is_excluded() {
    let mut job = make_job("1", "Webdesigner", "Agentur", SalaryFit::Unknown);
    job.location = "Baden-Württemberg".to_owned();
    job.areas.push("Stuttgart-Mitte".to_owned());
    assert_eq!(
        default_rules().exclusion_reason(&job).as_deref(),
        Some(EXCLUDED_CITY)
    );
}

#[test]
fn city_in_description_is_excluded() {
    let mut job = make_job("1", "Webdesigner", "Agentur", SalaryFit::Unknown);
    job.description = "Arbeitsort: Stuttgart-Vaihingen".to_owned();
    assert_eq!(
        default_rules().exclusion_reason(&job).as_deref(),
        Some(EXCLUDED_CITY)
    );
}

#[test]
fn term_in_company_is_excluded_with_configured_spelling() {
    let job = make_job("1", "Webdesigner", "Top personaldienstleister GmbH", SalaryFit::Unknown);
    assert_eq!(
        default_rules().exclusion_reason(&job).as_deref(),
        Some("excluded_term:Personaldienstleister")
    );
}

#[test]
fn city_rule_wins_over_term_rule() {
    let mut job = make_job("1", "Webdesigner in Zeitarbeit", "Agentur", SalaryFit::Unknown);
    job.location = "Stuttgart".to_owned();
    assert_eq!(
        default_rules().exclusion_reason(&job).as_deref(),
        Some(EXCLUDED_CITY)
    );
}

#[test]
fn missing_city_disables_city_rule() {
    let rules = FilterRules::new(None, &["Zeitarbeit".to_owned()]);
    let mut job = make_job("1", "Webdesigner", "Agentur", SalaryFit::Unknown);
    job.location = "Stuttgart".to_owned();
    assert_eq!(rules.exclusion_reason(&job), None);
}

#[test]
fn blank_city_and_terms_are_ignored() {
    let rules = FilterRules::new(Some("  "), &[String::new(), " ".to_owned()]);
    let job = make_job("1", "Webdesigner", "Agentur", SalaryFit::Unknown);
    assert_eq!(rules.exclusion_reason(&job), None);
}

#[test]
fn sharp_s_matches_double_s_in_either_direction() {
    let rules = FilterRules::new(None, &["Straßenbau".to_owned()]);
    let job = make_job("1", "Bauleiter STRASSENBAU", "Agentur", SalaryFit::Unknown);
    assert_eq!(
        rules.exclusion_reason(&job).as_deref(),
        Some("excluded_term:Straßenbau")
    );

    let rules = FilterRules::new(Some("GIESSEN"), &[]);
    let mut job = make_job("2", "Webdesigner", "Agentur", SalaryFit::Unknown);
    job.location = "Gießen, Hessen".to_owned();
    assert_eq!(rules.exclusion_reason(&job).as_deref(), Some(EXCLUDED_CITY));
}

#[test]
fn fold_case_lowers_and_expands_sharp_s() {
    assert_eq!(fold_case("Straße"), "strasse");
    assert_eq!(fold_case("STRASSE"), "strasse");
    assert_eq!(fold_case("Müller"), "müller");
}

// -----------------------------------------------------------------------
// partition_jobs / sort_for_display
// -----------------------------------------------------------------------

#[test]
fn partition_records_reason_on_excluded_jobs() {
    let mut in_city = make_job("2", "SEO Manager", "Agentur", SalaryFit::Meets);
    in_city.location = "Stuttgart".to_owned();
    let jobs = vec![
        make_job("1", "Webdesigner", "Agentur", SalaryFit::Meets),
        in_city,
    ];

    let partition = partition_jobs(jobs, &default_rules());

    assert_eq!(partition.kept.len(), 1);
    assert_eq!(partition.kept[0].id, "1");
    assert!(partition.kept[0].exclude_reason.is_none());
    assert_eq!(partition.excluded.len(), 1);
    assert_eq!(partition.excluded[0].exclude_reason.as_deref(), Some(EXCLUDED_CITY));
}

#[test]
fn kept_jobs_sorted_by_tier_then_company_then_title() {
    let jobs = vec![
        make_job("below", "Designer", "Alpha", SalaryFit::Below),
        make_job("unknown-b", "Designer", "beta", SalaryFit::Unknown),
        make_job("meets", "Designer", "Zeta", SalaryFit::Meets),
        make_job("unknown-a2", "b title", "Alpha", SalaryFit::Unknown),
        make_job("unknown-a1", "A title", "alpha", SalaryFit::Unknown),
    ];

    let partition = partition_jobs(jobs, &default_rules());
    let order: Vec<&str> = partition.kept.iter().map(|j| j.id.as_str()).collect();

    assert_eq!(
        order,
        vec!["meets", "unknown-a1", "unknown-a2", "unknown-b", "below"]
    );
}

#[test]
fn full_ties_keep_fetch_order() {
    let mut jobs = vec![
        make_job("first", "Designer", "Alpha", SalaryFit::Unknown),
        make_job("second", "designer", "ALPHA", SalaryFit::Unknown),
    ];
    sort_for_display(&mut jobs);
    assert_eq!(jobs[0].id, "first");
    assert_eq!(jobs[1].id, "second");
}

#[test]
fn no_lower_tier_precedes_higher_tier() {
    let jobs = vec![
        make_job("a", "X", "A", SalaryFit::Below),
        make_job("b", "X", "B", SalaryFit::Unknown),
        make_job("c", "X", "C", SalaryFit::Below),
        make_job("d", "X", "D", SalaryFit::Meets),
    ];
    let partition = partition_jobs(jobs, &default_rules());
    let tiers: Vec<u8> = partition.kept.iter().map(JobRecord::rank_tier).collect();
    assert!(tiers.windows(2).all(|w| w[0] >= w[1]), "tiers not descending: {tiers:?}");
}
