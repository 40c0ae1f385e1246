//! Gate the wizard applies before moving on to simulations.
//! Matching itself accepts any profile; only simulations need a ready one.

use serde::Serialize;

use crate::models::profile::UserProfile;

pub const MIN_TRAITS: usize = 3;
pub const MIN_SKILLS: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub issues: Vec<String>,
}

/// Lists what still blocks the simulation step; an empty list means ready.
pub fn check_readiness(name: Option<&str>, profile: &UserProfile) -> Readiness {
    let mut issues = Vec::new();

    if name.map(str::trim).unwrap_or_default().is_empty() {
        issues.push("Name is required".to_string());
    }

    let traits = profile
        .selected_traits
        .iter()
        .filter(|t| !t.trim().is_empty())
        .count();
    if traits < MIN_TRAITS {
        issues.push(format!(
            "Select at least {MIN_TRAITS} traits ({traits} selected)"
        ));
    }

    let skills = profile
        .skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .count();
    if skills < MIN_SKILLS {
        issues.push("Select at least one skill".to_string());
    }

    Readiness {
        ready: issues.is_empty(),
        issues,
    }
}
