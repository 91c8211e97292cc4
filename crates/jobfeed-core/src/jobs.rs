use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Source tag attached to every record; the feed has a single provider.
pub const SOURCE_TAG: &str = "Adzuna";

/// Whether a posting's advertised salary reaches the configured minimum.
///
/// Serialized as `true` / `false` / `null` so the JSON feed keeps a plain
/// nullable boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum SalaryFit {
    Meets,
    Below,
    Unknown,
}

impl SalaryFit {
    /// Compares an annual salary figure against `minimum`.
    #[must_use]
    pub fn compare(value: f64, minimum: u32) -> Self {
        if value >= f64::from(minimum) {
            Self::Meets
        } else {
            Self::Below
        }
    }

    /// Primary sort key: 2 for meets, 1 for unknown, 0 for below.
    #[must_use]
    pub fn rank_tier(self) -> u8 {
        match self {
            Self::Meets => 2,
            Self::Unknown => 1,
            Self::Below => 0,
        }
    }
}

impl From<Option<bool>> for SalaryFit {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Meets,
            Some(false) => Self::Below,
            None => Self::Unknown,
        }
    }
}

impl From<SalaryFit> for Option<bool> {
    fn from(value: SalaryFit) -> Self {
        match value {
            SalaryFit::Meets => Some(true),
            SalaryFit::Below => Some(false),
            SalaryFit::Unknown => None,
        }
    }
}

/// A job posting normalized from the provider's raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Provider identifier; empty when the provider sent none.
    pub id: String,
    pub title: String,
    pub company: String,
    /// Provider display string, e.g. `"Heilbronn, Baden-Württemberg"`.
    pub location: String,
    /// Administrative areas from country down to district.
    pub areas: Vec<String>,
    /// Creation timestamp exactly as the provider sent it.
    pub created: String,
    /// `created` rendered in the display timezone; `None` if unparseable.
    pub created_local: Option<String>,
    pub redirect_url: Option<String>,
    pub description: String,
    pub contract_type: String,
    pub contract_time: String,
    pub category: Option<String>,
    /// Salary bounds exactly as the provider sent them; integral figures
    /// stay integral in the feed.
    pub salary_min: Option<Number>,
    pub salary_max: Option<Number>,
    pub salary_is_predicted: bool,
    pub source: String,
    pub is_remote_guess: bool,
    pub meets_salary: SalaryFit,
    /// Search keyword whose results first surfaced this posting.
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_reason: Option<String>,
}

impl JobRecord {
    #[must_use]
    pub fn rank_tier(&self) -> u8 {
        self.meets_salary.rank_tier()
    }
}
