//! User profile as assembled by the wizard: traits, skills, interests,
//! weighted values and decision-tree answers.
//!
//! Every field is optional on the wire. Missing or unrecognised answers read as
//! "no preference" so the matcher never has to reject a profile.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Importance assumed for a value the user never touched (slider midpoint).
pub const DEFAULT_IMPORTANCE: u32 = 50;
const MAX_IMPORTANCE: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_traits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: ValueWeights,
    #[serde(default, deserialize_with = "null_as_default")]
    pub decision_answers: DecisionAnswers,
}

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Importance scores (0–100) for the five value sliders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueWeights {
    #[serde(default, deserialize_with = "importance")]
    pub salary: Option<u32>,
    #[serde(default, deserialize_with = "importance")]
    pub work_life_balance: Option<u32>,
    #[serde(default, deserialize_with = "importance")]
    pub job_security: Option<u32>,
    #[serde(default, deserialize_with = "importance")]
    pub creativity: Option<u32>,
    #[serde(default, deserialize_with = "importance")]
    pub leadership: Option<u32>,
}

impl ValueWeights {
    pub fn salary_importance(&self) -> u32 {
        self.salary.unwrap_or(DEFAULT_IMPORTANCE)
    }

    pub fn work_life_importance(&self) -> u32 {
        self.work_life_balance.unwrap_or(DEFAULT_IMPORTANCE)
    }
}

/// The wizard sends slider values as single-element arrays (`[80]`);
/// API clients tend to send a bare number. Both are accepted, rounded and
/// clamped to 0..=100. Anything else reads as unset.
fn importance<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match &raw {
        Some(serde_json::Value::Array(values)) => values.first().and_then(|v| v.as_f64()),
        Some(value) => value.as_f64(),
        None => None,
    };

    match number {
        Some(n) => Ok(Some(n.round().clamp(0.0, MAX_IMPORTANCE) as u32)),
        None => {
            if let Some(value) = raw.filter(|v| !is_empty_slider(v)) {
                debug!("Ignoring unrecognised importance value: {value}");
            }
            Ok(None)
        }
    }
}

fn is_empty_slider(value: &serde_json::Value) -> bool {
    value.as_array().is_some_and(|values| values.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Decision-tree answers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Technology,
    Healthcare,
    Business,
    Creative,
    Education,
    Social,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Technology => "technology",
            Domain::Healthcare => "healthcare",
            Domain::Business => "business",
            Domain::Creative => "creative",
            Domain::Education => "education",
            Domain::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreference {
    Office,
    Remote,
    Hybrid,
    Field,
    Lab,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthPreference {
    VeryHigh,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkLifePreference {
    Strict,
    Flexible,
    Integrated,
    Workfirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTolerance {
    High,
    Moderate,
    Low,
    VeryLow,
}

/// Answers to the five decision-tree questions. `risk` is collected but does
/// not feed the matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionAnswers {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentPreference>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub growth: Option<GrowthPreference>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub worklife: Option<WorkLifePreference>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskTolerance>,
}

/// Reads an answer value, mapping anything outside the option set to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value::<T>(value.clone()) {
        Ok(answer) => Some(answer),
        Err(_) => {
            debug!("Ignoring unrecognised decision answer: {value}");
            None
        }
    }))
}
