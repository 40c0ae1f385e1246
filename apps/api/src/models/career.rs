use serde::{Deserialize, Serialize};

/// Growth outlook label carried by every catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Growth {
    Explosive,
    High,
    Moderate,
    Stable,
    Low,
}

/// One catalog entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub traits: Vec<String>,
    /// `[min, max]` annual compensation in INR.
    pub salary: [u64; 2],
    #[serde(rename = "work_env")]
    pub work_environment: String,
    pub growth: Growth,
    #[serde(default)]
    pub locations: Vec<String>,
    pub demand_score: f64,
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsdc_trainings: Option<u32>,
}

impl CareerRecord {
    pub fn min_salary(&self) -> u64 {
        self.salary[0]
    }

    pub fn max_salary(&self) -> u64 {
        self.salary[1]
    }
}
