//! Session report: comparative analysis plus a downloadable text export.

pub mod analysis;
pub mod format;
pub mod handlers;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::models::simulation::DEFAULT_SEEKER_NAME;

/// Identity and profile lines printed at the top of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportUser {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_SEEKER_NAME.to_string()
}

/// Download name: `career-report-<name>-<YYYY-MM-DD>.txt`, with anything
/// outside `[A-Za-z0-9_-]` in the name replaced by `-`.
pub fn report_filename(name: &str, date: chrono::NaiveDate) -> String {
    let name = if name.trim().is_empty() {
        "Career-Seeker"
    } else {
        name
    };
    let clean: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("career-report-{clean}-{}.txt", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_filename_is_sanitised() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            report_filename("Asha K. Rao", date),
            "career-report-Asha-K--Rao-2026-01-05.txt"
        );
        assert_eq!(
            report_filename("", date),
            "career-report-Career-Seeker-2026-01-05.txt"
        );
    }
}
