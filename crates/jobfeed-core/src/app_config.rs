use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_country: String,
    pub adzuna_base_url: String,
    pub home_city: String,
    /// City whose postings are dropped; `None` disables the city rule.
    pub exclude_city: Option<String>,
    pub radius_km: u32,
    pub salary_min_year: u32,
    pub keywords: Vec<String>,
    pub exclude_terms: Vec<String>,
    pub max_pages: u32,
    pub results_per_page: u32,
    /// IANA timezone name used for every human-readable timestamp.
    pub timezone: String,
    pub output_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("adzuna_app_id", &"[redacted]")
            .field("adzuna_app_key", &"[redacted]")
            .field("adzuna_country", &self.adzuna_country)
            .field("adzuna_base_url", &self.adzuna_base_url)
            .field("home_city", &self.home_city)
            .field("exclude_city", &self.exclude_city)
            .field("radius_km", &self.radius_km)
            .field("salary_min_year", &self.salary_min_year)
            .field("keywords", &self.keywords)
            .field("exclude_terms", &self.exclude_terms)
            .field("max_pages", &self.max_pages)
            .field("results_per_page", &self.results_per_page)
            .field("timezone", &self.timezone)
            .field("output_dir", &self.output_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
