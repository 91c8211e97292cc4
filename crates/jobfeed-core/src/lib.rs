//! Domain types, configuration and filtering rules shared by the `jobfeed`
//! crates.

pub mod app_config;
pub mod clock;
pub mod config;
pub mod filter;
pub mod jobs;
pub mod output;

use thiserror::Error;

pub use app_config::AppConfig;
pub use clock::DisplayClock;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{partition_jobs, FilterRules, Partition};
pub use jobs::{JobRecord, SalaryFit, SOURCE_TAG};
pub use output::{KeywordCounts, RunCounts, RunOutput};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}
