use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_KEYWORDS: &[&str] = &[
    "Mediengestalter",
    "Webdesigner",
    "WordPress",
    "TYPO3",
    "SEO",
    "Content Manager",
    "Social Media",
    "Digital Marketing",
];

const DEFAULT_EXCLUDE_TERMS: &[&str] = &[
    "Zeitarbeit",
    "Leiharbeit",
    "Arbeitnehmerüberlassung",
    "Personaldienstleister",
    "Personalleasing",
];

/// Load run configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if either Adzuna credential is missing or blank.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load run configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if either Adzuna credential is missing or blank.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build run configuration using the provided env-var lookup function.
///
/// Blank values count as unset everywhere, so `KEYWORDS=` falls back to the
/// default list instead of producing an empty run.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let present = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        present(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { present(var).unwrap_or_else(|| default.to_string()) };

    let list_or_default = |var: &str, default: &[&str]| -> Vec<String> {
        present(var)
            .map(|raw| parse_semicolon_list(&raw))
            .filter(|items| !items.is_empty())
            .unwrap_or_else(|| default.iter().map(|s| (*s).to_string()).collect())
    };

    let adzuna_app_id = require("ADZUNA_APP_ID")?;
    let adzuna_app_key = require("ADZUNA_APP_KEY")?;

    let adzuna_country = or_default("ADZUNA_COUNTRY", "de").to_lowercase();
    let adzuna_base_url = or_default("ADZUNA_BASE_URL", "https://api.adzuna.com");
    let home_city = or_default("HOME_CITY", "Lauffen am Neckar");
    let exclude_city = Some(or_default("EXCLUDE_CITY", "Stuttgart"));

    let radius_km = lenient_int(present("RADIUS_KM").as_deref(), 30);
    let salary_min_year = lenient_int(present("SALARY_MIN_YEAR").as_deref(), 54_000);
    let max_pages = lenient_int(present("ADZUNA_MAX_PAGES").as_deref(), 2);
    let results_per_page = lenient_int(present("RESULTS_PER_PAGE").as_deref(), 50);

    let keywords = list_or_default("KEYWORDS", DEFAULT_KEYWORDS);
    let exclude_terms = list_or_default("EXCLUDE_TERMS", DEFAULT_EXCLUDE_TERMS);

    let timezone = or_default("JOBFEED_TIMEZONE", "Europe/Berlin");
    let output_dir = PathBuf::from(or_default("JOBFEED_OUTPUT_DIR", "site"));
    let request_timeout_secs =
        lenient_int(present("JOBFEED_REQUEST_TIMEOUT_SECS").as_deref(), 20);
    let inter_request_delay_ms =
        lenient_int(present("JOBFEED_INTER_REQUEST_DELAY_MS").as_deref(), 300);
    let user_agent = or_default("JOBFEED_USER_AGENT", "jobfeed/0.1 (job-search)");
    let log_level = or_default("JOBFEED_LOG_LEVEL", "info");

    Ok(AppConfig {
        adzuna_app_id,
        adzuna_app_key,
        adzuna_country,
        adzuna_base_url,
        home_city,
        exclude_city,
        radius_km,
        salary_min_year,
        keywords,
        exclude_terms,
        max_pages,
        results_per_page,
        timezone,
        output_dir,
        request_timeout_secs,
        inter_request_delay_ms,
        user_agent,
        log_level,
    })
}

/// Parse an integer that may carry formatting noise such as `"54.000"` or
/// `"30 km"`.
///
/// Every non-digit character is dropped before parsing. Falls back to
/// `default` when no digit remains or the value does not fit in `T`.
#[must_use]
pub fn lenient_int<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr,
{
    let Some(raw) = raw else {
        return default;
    };
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return default;
    }
    digits.parse::<T>().unwrap_or(default)
}

/// Split a `;`-delimited list, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_semicolon_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
