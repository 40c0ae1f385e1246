//! Fixed lookup tables consulted by the weighted matcher.
//!
//! These are part of the scoring contract: changing an entry changes which
//! careers earn the all-or-nothing bonuses.

use crate::models::career::Growth;
use crate::models::profile::{Domain, EnvironmentPreference, GrowthPreference};

/// Careers that earn the domain bonus for each decision-tree domain.
pub const DOMAIN_CAREERS: &[(Domain, &[&str])] = &[
    (
        Domain::Technology,
        &[
            "Software Engineer",
            "AI/ML Engineer",
            "Data Scientist",
            "UX Designer",
            "Cybersecurity Specialist",
            "Blockchain Developer",
            "Cloud Architect",
        ],
    ),
    (
        Domain::Healthcare,
        &[
            "Doctor (MBBS)",
            "Telemedicine Doctor",
            "Medical Robotics Engineer",
            "Healthcare Data Analyst",
            "Clinical Research Associate",
        ],
    ),
    (
        Domain::Business,
        &[
            "Chartered Accountant",
            "Banking & Finance Analyst",
            "Digital Marketer",
            "Product Manager",
            "Marketing Manager",
        ],
    ),
    (
        Domain::Creative,
        &[
            "UX Designer",
            "Graphic Designer",
            "VFX Artist",
            "Game Developer",
            "Fashion Technologist",
            "Creative Writer",
        ],
    ),
    (
        Domain::Education,
        &[
            "Puppetry-Based Educator",
            "Youth AI Ethics Educator",
            "Sanskrit AI Linguist",
        ],
    ),
    (
        Domain::Social,
        &[
            "Civil Services (IAS/IPS)",
            "Disaster Management Specialist",
            "Urban Planner",
        ],
    ),
];

/// Trait pairs treated as equivalent even without substring overlap.
/// Compared lower-cased, in either direction.
pub const TRAIT_SYNONYMS: &[(&str, &str)] = &[
    ("logical", "analytical"),
    ("creative", "innovative"),
    ("communicative", "collaborative"),
];

pub fn domain_careers(domain: Domain) -> &'static [&'static str] {
    DOMAIN_CAREERS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, careers)| *careers)
        .unwrap_or(&[])
}

/// Work-environment substrings accepted for each environment preference.
pub fn environment_categories(preference: EnvironmentPreference) -> &'static [&'static str] {
    match preference {
        EnvironmentPreference::Office => &["Office", "Corporate", "Hospital", "Clinic"],
        EnvironmentPreference::Remote => &["Remote", "Freelance"],
        EnvironmentPreference::Hybrid => &["Hybrid", "Office/Remote", "Office/Hybrid"],
        EnvironmentPreference::Field => &["Field", "On-site", "Manufacturing"],
        EnvironmentPreference::Lab => &["Lab", "Research"],
        EnvironmentPreference::Client => &["Consulting", "Client"],
    }
}

/// Growth labels that satisfy each growth preference.
pub fn acceptable_growth(preference: GrowthPreference) -> &'static [Growth] {
    match preference {
        GrowthPreference::VeryHigh => &[Growth::Explosive],
        GrowthPreference::High => &[Growth::High, Growth::Explosive],
        GrowthPreference::Moderate => &[Growth::Moderate, Growth::High],
        GrowthPreference::Low => &[Growth::Stable, Growth::Moderate, Growth::Low],
    }
}

pub fn are_synonyms(a: &str, b: &str) -> bool {
    TRAIT_SYNONYMS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ux_designer_is_in_two_domains() {
        assert!(domain_careers(Domain::Technology).contains(&"UX Designer"));
        assert!(domain_careers(Domain::Creative).contains(&"UX Designer"));
    }

    #[test]
    fn test_every_domain_has_a_list() {
        for domain in [
            Domain::Technology,
            Domain::Healthcare,
            Domain::Business,
            Domain::Creative,
            Domain::Education,
            Domain::Social,
        ] {
            assert!(!domain_careers(domain).is_empty(), "{}", domain.as_str());
        }
    }

    #[test]
    fn test_synonyms_are_symmetric_and_exact() {
        assert!(are_synonyms("logical", "analytical"));
        assert!(are_synonyms("analytical", "logical"));
        assert!(are_synonyms("innovative", "creative"));
        assert!(!are_synonyms("logical", "analytical-minded"));
        assert!(!are_synonyms("logical", "creative"));
    }

    #[test]
    fn test_low_growth_preference_accepts_stable_careers() {
        let accepted = acceptable_growth(GrowthPreference::Low);
        assert!(accepted.contains(&Growth::Stable));
        assert!(!accepted.contains(&Growth::Explosive));
    }
}
