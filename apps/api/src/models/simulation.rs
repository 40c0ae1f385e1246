//! Ten-year career projection records. These mirror the JSON contract the
//! generative model is prompted with, so field names are camelCase.

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

pub const DEFAULT_SEEKER_NAME: &str = "Career Seeker";
pub const DEFAULT_SEEKER_AGE: u32 = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMethod {
    #[serde(rename = "gemini-flash")]
    GeminiFlash,
    #[default]
    #[serde(rename = "enhanced-mock")]
    EnhancedMock,
}

impl GenerationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::GeminiFlash => "gemini-flash",
            GenerationMethod::EnhancedMock => "enhanced-mock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Certification,
    Leadership,
    #[serde(rename = "Industry-Specific")]
    IndustrySpecific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub priority: Priority,
    pub description: String,
    pub estimated_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    pub title: String,
    pub salary: u64,
    /// 1.0 – 5.0
    pub satisfaction: f64,
    /// 1.0 – 5.0
    pub work_life_balance: f64,
    /// 1.0 – 5.0
    pub burnout_risk: f64,
    pub lifestyle: String,
    pub key_milestone: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub recommended_courses: Vec<RecommendedCourse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub avg_salary: u64,
    pub peak_salary: u64,
    pub avg_satisfaction: f64,
    pub avg_work_life_balance: f64,
    pub avg_burnout_risk: f64,
    pub career_progression: String,
    pub total_growth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSimulation {
    pub career: String,
    pub description: String,
    pub industry_overview: String,
    #[serde(default)]
    pub entry_requirements: Vec<String>,
    pub yearly_projections: Vec<YearlyProjection>,
    pub summary: SimulationSummary,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, rename = "isAIGenerated")]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub generation_method: GenerationMethod,
}

impl CareerSimulation {
    pub fn first_year_salary(&self) -> Option<u64> {
        self.yearly_projections.first().map(|y| y.salary)
    }
}

/// Profile fields forwarded to the simulator: identity plus the wizard profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
            profile: UserProfile::default(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_SEEKER_NAME.to_string()
}

fn default_age() -> u32 {
    DEFAULT_SEEKER_AGE
}

/// A single career to project for a given profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub career: String,
    pub profile: SimulationProfile,
}
