//! Display-window filtering over an already-ranked match list.
//! Filters never rescore or reorder; they only drop entries and cap the window.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::CareerMatch;
use crate::models::career::Growth;

/// Matches shown at once on the results page.
pub const DISPLAY_WINDOW: usize = 12;

const HIGH_SALARY_FLOOR: u64 = 1_500_000;
const MEDIUM_SALARY_FLOOR: u64 = 800_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryRange {
    High,
    Medium,
    Entry,
}

impl SalaryRange {
    /// Band membership is decided by the career's top salary.
    pub fn contains(&self, max_salary: u64) -> bool {
        match self {
            SalaryRange::High => max_salary >= HIGH_SALARY_FLOOR,
            SalaryRange::Medium => (MEDIUM_SALARY_FLOOR..HIGH_SALARY_FLOOR).contains(&max_salary),
            SalaryRange::Entry => max_salary < MEDIUM_SALARY_FLOOR,
        }
    }
}

/// All criteria are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub growth: Option<Growth>,
    #[serde(default)]
    pub work_env: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
}

impl MatchFilter {
    pub fn accepts(&self, m: &CareerMatch) -> bool {
        if let Some(term) = non_blank(&self.search) {
            let term = term.to_lowercase();
            let in_name = m.career.to_lowercase().contains(&term);
            let in_traits = m
                .data
                .traits
                .iter()
                .any(|t| t.to_lowercase().contains(&term));
            if !in_name && !in_traits {
                return false;
            }
        }

        if let Some(growth) = self.growth {
            if m.data.growth != growth {
                return false;
            }
        }

        if let Some(env) = non_blank(&self.work_env) {
            if !m
                .data
                .work_environment
                .to_lowercase()
                .contains(&env.to_lowercase())
            {
                return false;
            }
        }

        if let Some(range) = self.salary_range {
            if !range.contains(m.data.max_salary()) {
                return false;
            }
        }

        true
    }

    /// Applies the filter and caps the result at `DISPLAY_WINDOW`, preserving order.
    pub fn apply<'a>(&self, matches: &'a [CareerMatch]) -> Vec<&'a CareerMatch> {
        matches
            .iter()
            .filter(|m| self.accepts(m))
            .take(DISPLAY_WINDOW)
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
