//! Career Matcher: pluggable, trait-based scorer ranking the catalog for a profile.
//!
//! Default: `WeightedCareerMatcher` (pure, synchronous, deterministic).
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>`; the catalog is passed in on
//! every call rather than captured, so tests substitute synthetic catalogs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CareerCatalog;
use crate::matching::tables::{
    acceptable_growth, are_synonyms, domain_careers, environment_categories,
};
use crate::models::career::CareerRecord;
use crate::models::profile::{UserProfile, WorkLifePreference};

/// Upper bound on the ranked list handed back to callers.
pub const MAX_MATCHES: usize = 20;

/// Salary importance above which high-paying careers earn a bonus.
const SALARY_IMPORTANCE_THRESHOLD: u32 = 70;
/// Career max salary (INR) above which the salary bonus applies.
const HIGH_EARNING_THRESHOLD: u64 = 1_000_000;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One scored career. Produced fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career: String,
    pub data: CareerRecord,
    pub match_score: f64, // 0.0 – 1.0
    pub match_percentage: u8, // 0 – 100
    pub match_reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub traits: f64,
    pub domain: f64,
    pub environment: f64,
    pub growth: f64,
    pub demand: f64,
    pub salary: f64,
    pub work_life: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            traits: 0.35,
            domain: 0.25,
            environment: 0.15,
            growth: 0.10,
            demand: 0.10,
            salary: 0.05,
            work_life: 0.05,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks a catalog for a profile. Implementations must be pure: the same
/// inputs always yield the same ranked list.
pub trait CareerMatcher: Send + Sync {
    fn compute_matches(&self, profile: &UserProfile, catalog: &CareerCatalog)
        -> Vec<CareerMatch>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedCareerMatcher, the default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Multi-factor weighted scorer.
///
/// Algorithm, per career, in this order (order fixes `match_reasons`):
/// 1. trait overlap (substring or synonym) × 0.35
/// 2. domain membership → +0.25
/// 3. work-environment fit → +0.15
/// 4. growth-preference fit → +0.10
/// 5. demand_score / 10 × 0.10 (silent)
/// 6. salary importance > 70 and max salary > 10L → +0.05
/// 7. strict work-life and remote/hybrid environment → +0.05
///
/// The sum is clamped to 1.0 at the end only. Results are stable-sorted by
/// score descending and truncated to `MAX_MATCHES`.
#[derive(Debug, Clone, Default)]
pub struct WeightedCareerMatcher {
    weights: MatchWeights,
}

impl WeightedCareerMatcher {
    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    fn score_career(
        &self,
        name: &str,
        record: &CareerRecord,
        profile: &UserProfile,
        user_traits: &[String],
    ) -> CareerMatch {
        let answers = &profile.decision_answers;
        let mut score = 0.0_f64;
        let mut reasons = Vec::new();

        // 1. Trait overlap
        let matched = count_trait_matches(user_traits, &record.traits);
        score += trait_sub_score(matched, user_traits.len(), record.traits.len())
            * self.weights.traits;
        if matched > 0 {
            reasons.push(format!(
                "Strong trait alignment: {matched} matching traits"
            ));
        }

        // 2. Domain
        if let Some(domain) = answers.domain {
            if domain_careers(domain).contains(&name) {
                score += self.weights.domain;
                reasons.push(format!("Matches your {} interest", domain.as_str()));
            }
        }

        // 3. Work environment
        if let Some(environment) = answers.environment {
            let env_match = environment_categories(environment)
                .iter()
                .any(|category| record.work_environment.contains(category));
            if env_match {
                score += self.weights.environment;
                reasons.push("Suitable work environment".to_string());
            }
        }

        // 4. Growth expectations
        if let Some(growth) = answers.growth {
            if acceptable_growth(growth).contains(&record.growth) {
                score += self.weights.growth;
                reasons.push("Matches growth expectations".to_string());
            }
        }

        // 5. Demand
        score += (record.demand_score / 10.0) * self.weights.demand;

        // 6. Salary importance
        if profile.values.salary_importance() > SALARY_IMPORTANCE_THRESHOLD
            && record.max_salary() > HIGH_EARNING_THRESHOLD
        {
            score += self.weights.salary;
            reasons.push("High earning potential".to_string());
        }

        // 7. Work-life balance
        if answers.worklife == Some(WorkLifePreference::Strict)
            && (record.work_environment.contains("Remote")
                || record.work_environment.contains("Hybrid"))
        {
            score += self.weights.work_life;
            reasons.push("Good work-life balance".to_string());
        }

        let match_score = score.min(1.0);

        CareerMatch {
            career: name.to_string(),
            data: record.clone(),
            match_score,
            match_percentage: (match_score * 100.0).round() as u8,
            match_reasons: reasons,
        }
    }
}

impl CareerMatcher for WeightedCareerMatcher {
    fn compute_matches(
        &self,
        profile: &UserProfile,
        catalog: &CareerCatalog,
    ) -> Vec<CareerMatch> {
        if catalog.is_empty() {
            return Vec::new();
        }

        let user_traits = normalize_traits(&profile.selected_traits);

        let mut matches: Vec<CareerMatch> = catalog
            .iter()
            .map(|(name, record)| self.score_career(name, record, profile, &user_traits))
            .collect();

        // Stable sort, equal scores keep catalog order
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        matches.truncate(MAX_MATCHES);

        debug!(
            "Ranked {} careers (kept {}), top: {:?}",
            catalog.len(),
            matches.len(),
            matches.first().map(|m| (&m.career, m.match_percentage))
        );

        matches
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait overlap helpers
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cases and de-duplicates the user's traits, dropping blanks.
/// First occurrence wins so ordering stays stable.
fn normalize_traits(traits: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(traits.len());
    for trait_name in traits {
        let lower = trait_name.trim().to_lowercase();
        if !lower.is_empty() && !normalized.contains(&lower) {
            normalized.push(lower);
        }
    }
    normalized
}

/// Whether a (lower-cased) user trait matches a (lower-cased) career trait.
fn traits_match(user_trait: &str, career_trait: &str) -> bool {
    career_trait.contains(user_trait)
        || user_trait.contains(career_trait)
        || are_synonyms(user_trait, career_trait)
}

/// Counts user traits that match at least one career trait.
fn count_trait_matches(user_traits: &[String], career_traits: &[String]) -> usize {
    let career_lower: Vec<String> = career_traits.iter().map(|t| t.to_lowercase()).collect();
    user_traits
        .iter()
        .filter(|user_trait| {
            career_lower
                .iter()
                .any(|career_trait| traits_match(user_trait, career_trait))
        })
        .count()
}

fn trait_sub_score(matched: usize, user_count: usize, career_count: usize) -> f64 {
    let denominator = user_count.max(career_count);
    if denominator == 0 {
        return 0.0;
    }
    matched as f64 / denominator as f64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::Growth;
    use crate::models::profile::{
        DecisionAnswers, Domain, EnvironmentPreference, GrowthPreference, ValueWeights,
    };

    const EPS: f64 = 1e-9;

    fn make_record(
        traits: &[&str],
        salary: [u64; 2],
        work_env: &str,
        growth: Growth,
        demand: f64,
    ) -> CareerRecord {
        CareerRecord {
            traits: traits.iter().map(|t| t.to_string()).collect(),
            salary,
            work_environment: work_env.to_string(),
            growth,
            locations: vec!["Bangalore".to_string()],
            demand_score: demand,
            rank: 1,
            nsdc_trainings: None,
        }
    }

    fn software_engineer() -> CareerRecord {
        make_record(
            &["Analytical", "Technical"],
            [600_000, 2_500_000],
            "Hybrid",
            Growth::High,
            9.0,
        )
    }

    fn catalog(entries: Vec<(&str, CareerRecord)>) -> CareerCatalog {
        CareerCatalog::new(
            entries
                .into_iter()
                .map(|(name, record)| (name.to_string(), record))
                .collect(),
        )
        .unwrap()
    }

    fn profile_with_traits(traits: &[&str]) -> UserProfile {
        UserProfile {
            selected_traits: traits.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn full_scenario_profile() -> UserProfile {
        UserProfile {
            selected_traits: vec!["Logical".to_string()],
            values: ValueWeights {
                salary: Some(80),
                ..Default::default()
            },
            decision_answers: DecisionAnswers {
                domain: Some(Domain::Technology),
                environment: Some(EnvironmentPreference::Hybrid),
                growth: Some(GrowthPreference::High),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn score_one(profile: &UserProfile, name: &str, record: CareerRecord) -> CareerMatch {
        let matches = WeightedCareerMatcher::default()
            .compute_matches(profile, &catalog(vec![(name, record)]));
        matches.into_iter().next().unwrap()
    }

    #[test]
    fn test_full_scenario_sums_every_term() {
        let m = score_one(
            &full_scenario_profile(),
            "Software Engineer",
            software_engineer(),
        );
        // 0.35 * 1/2 + 0.25 + 0.15 + 0.10 + 0.09 + 0.05
        assert!((m.match_score - 0.815).abs() < EPS, "got {}", m.match_score);
        assert_eq!(m.match_percentage, 82);
        assert_eq!(
            m.match_reasons,
            vec![
                "Strong trait alignment: 1 matching traits",
                "Matches your technology interest",
                "Suitable work environment",
                "Matches growth expectations",
                "High earning potential",
            ]
        );
    }

    #[test]
    fn test_empty_profile_scores_demand_only() {
        let m = score_one(&UserProfile::default(), "Software Engineer", software_engineer());
        assert!((m.match_score - 0.09).abs() < EPS);
        assert_eq!(m.match_percentage, 9);
        assert!(m.match_reasons.is_empty());
    }

    #[test]
    fn test_salary_importance_alone_without_answers_scores_demand_plus_bonus() {
        let profile = UserProfile {
            values: ValueWeights {
                salary: Some(71),
                ..Default::default()
            },
            ..Default::default()
        };
        let m = score_one(&profile, "Software Engineer", software_engineer());
        assert!((m.match_score - 0.14).abs() < EPS);
        assert_eq!(m.match_reasons, vec!["High earning potential"]);
    }

    #[test]
    fn test_salary_importance_threshold_is_strict() {
        let profile = UserProfile {
            values: ValueWeights {
                salary: Some(70),
                ..Default::default()
            },
            ..Default::default()
        };
        let m = score_one(&profile, "Software Engineer", software_engineer());
        assert!(m.match_reasons.is_empty());
    }

    #[test]
    fn test_salary_bonus_needs_max_above_ten_lakh() {
        let profile = UserProfile {
            values: ValueWeights {
                salary: Some(95),
                ..Default::default()
            },
            ..Default::default()
        };
        let record = make_record(&["Creative"], [200_000, 1_000_000], "Office", Growth::Low, 0.0);
        let m = score_one(&profile, "Illustrator", record);
        assert_eq!(m.match_score, 0.0);
    }

    #[test]
    fn test_synonym_matches_in_both_directions() {
        let creative_user = score_one(
            &profile_with_traits(&["Creative"]),
            "Inventor",
            make_record(&["Innovative"], [1, 2], "Lab", Growth::Low, 0.0),
        );
        let innovative_user = score_one(
            &profile_with_traits(&["Innovative"]),
            "Artist",
            make_record(&["Creative"], [1, 2], "Studio", Growth::Low, 0.0),
        );
        assert!((creative_user.match_score - 0.35).abs() < EPS);
        assert!((innovative_user.match_score - 0.35).abs() < EPS);
    }

    #[test]
    fn test_substring_matches_either_way_and_ignores_case() {
        // "data" is inside "data-driven"; "problem-solving" contains "solving"
        let m = score_one(
            &profile_with_traits(&["DATA", "problem-solving"]),
            "Analyst",
            make_record(&["Data-driven", "Solving"], [1, 2], "Office", Growth::Low, 0.0),
        );
        assert!((m.match_score - 0.35).abs() < EPS);
        assert_eq!(m.match_reasons[0], "Strong trait alignment: 2 matching traits");
    }

    #[test]
    fn test_trait_denominator_uses_larger_side() {
        // 1 of 4 user traits matches a 2-trait career → 1/4
        let m = score_one(
            &profile_with_traits(&["Technical", "Patient", "Musical", "Athletic"]),
            "Software Engineer",
            make_record(&["Analytical", "Technical"], [1, 2], "Office", Growth::Low, 0.0),
        );
        assert!((m.match_score - 0.35 * 0.25).abs() < EPS);
    }

    #[test]
    fn test_duplicate_user_traits_count_once() {
        let m = score_one(
            &profile_with_traits(&["Technical", "technical", " TECHNICAL "]),
            "Software Engineer",
            make_record(&["Technical"], [1, 2], "Office", Growth::Low, 0.0),
        );
        assert!((m.match_score - 0.35).abs() < EPS);
        assert_eq!(m.match_reasons[0], "Strong trait alignment: 1 matching traits");
    }

    #[test]
    fn test_blank_traits_are_dropped_and_padding_trimmed() {
        let record = make_record(&["Technical", "Analytical"], [1, 2], "Office", Growth::Low, 0.0);

        let blank = score_one(&profile_with_traits(&["", "   "]), "Software Engineer", record.clone());
        assert_eq!(blank.match_score, 0.0);
        assert!(blank.match_reasons.is_empty());

        let padded = score_one(&profile_with_traits(&[" logical "]), "Software Engineer", record);
        assert!((padded.match_score - 0.175).abs() < EPS);
    }

    #[test]
    fn test_domain_bonus_is_exactly_a_quarter() {
        let base = profile_with_traits(&["Logical"]);
        let mut with_domain = base.clone();
        with_domain.decision_answers.domain = Some(Domain::Technology);

        let without = score_one(&base, "Software Engineer", software_engineer());
        let with = score_one(&with_domain, "Software Engineer", software_engineer());
        assert!((with.match_score - without.match_score - 0.25).abs() < EPS);
    }

    #[test]
    fn test_domain_bonus_requires_listed_career() {
        let mut profile = UserProfile::default();
        profile.decision_answers.domain = Some(Domain::Healthcare);
        let m = score_one(&profile, "Software Engineer", software_engineer());
        assert!(m.match_reasons.is_empty());
    }

    #[test]
    fn test_environment_matches_by_substring() {
        let mut profile = UserProfile::default();
        profile.decision_answers.environment = Some(EnvironmentPreference::Office);
        let m = score_one(
            &profile,
            "Doctor (MBBS)",
            make_record(&["Empathetic"], [1, 2], "Hospital/Clinic", Growth::Stable, 0.0),
        );
        assert_eq!(m.match_reasons, vec!["Suitable work environment"]);
        assert!((m.match_score - 0.15).abs() < EPS);
    }

    #[test]
    fn test_environment_compare_is_case_sensitive() {
        let mut profile = UserProfile::default();
        profile.decision_answers.environment = Some(EnvironmentPreference::Remote);
        let m = score_one(
            &profile,
            "Writer",
            make_record(&["Creative"], [1, 2], "remote", Growth::Stable, 0.0),
        );
        assert!(m.match_reasons.is_empty());
    }

    #[test]
    fn test_growth_preference_table() {
        let mut profile = UserProfile::default();
        profile.decision_answers.growth = Some(GrowthPreference::VeryHigh);
        let high = score_one(&profile, "Software Engineer", software_engineer());
        assert!(high.match_reasons.is_empty());

        profile.decision_answers.growth = Some(GrowthPreference::Moderate);
        let moderate = score_one(&profile, "Software Engineer", software_engineer());
        assert_eq!(moderate.match_reasons, vec!["Matches growth expectations"]);
    }

    #[test]
    fn test_strict_work_life_rewards_remote_or_hybrid() {
        let mut profile = UserProfile::default();
        profile.decision_answers.worklife = Some(WorkLifePreference::Strict);
        let hybrid = score_one(&profile, "Software Engineer", software_engineer());
        assert_eq!(hybrid.match_reasons, vec!["Good work-life balance"]);

        let field = score_one(
            &profile,
            "Surveyor",
            make_record(&["Precise"], [1, 2], "Field", Growth::Stable, 0.0),
        );
        assert!(field.match_reasons.is_empty());

        profile.decision_answers.worklife = Some(WorkLifePreference::Flexible);
        let flexible = score_one(&profile, "Software Engineer", software_engineer());
        assert!(flexible.match_reasons.is_empty());
    }

    #[test]
    fn test_score_is_clamped_at_one() {
        let weights = MatchWeights {
            traits: 0.6,
            domain: 0.6,
            ..Default::default()
        };
        let matcher = WeightedCareerMatcher { weights };
        let mut profile = profile_with_traits(&["Technical"]);
        profile.decision_answers.domain = Some(Domain::Technology);
        let matches = matcher.compute_matches(
            &profile,
            &catalog(vec![("Software Engineer", software_engineer())]),
        );
        assert_eq!(matches[0].match_score, 1.0);
        assert_eq!(matches[0].match_percentage, 100);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let matches = WeightedCareerMatcher::default()
            .compute_matches(&full_scenario_profile(), &CareerCatalog::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let record = make_record(&["Calm"], [1, 2], "Office", Growth::Stable, 5.0);
        let matches = WeightedCareerMatcher::default().compute_matches(
            &UserProfile::default(),
            &catalog(vec![
                ("Charlie", record.clone()),
                ("Alpha", record.clone()),
                ("Bravo", record),
            ]),
        );
        let names: Vec<&str> = matches.iter().map(|m| m.career.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_embedded_catalog_properties() {
        let catalog = CareerCatalog::embedded().unwrap();
        let matcher = WeightedCareerMatcher::default();
        let profile = UserProfile {
            selected_traits: vec![
                "Creative".to_string(),
                "Communicative".to_string(),
                "Technical".to_string(),
            ],
            values: ValueWeights {
                salary: Some(90),
                ..Default::default()
            },
            decision_answers: DecisionAnswers {
                domain: Some(Domain::Creative),
                environment: Some(EnvironmentPreference::Remote),
                growth: Some(GrowthPreference::High),
                worklife: Some(WorkLifePreference::Strict),
                risk: None,
            },
            ..Default::default()
        };

        let first = matcher.compute_matches(&profile, &catalog);
        let second = matcher.compute_matches(&profile, &catalog);
        assert_eq!(first, second, "ranking must be deterministic");

        assert_eq!(first.len(), MAX_MATCHES.min(catalog.len()));
        for pair in first.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        for m in &first {
            assert!((0.0..=1.0).contains(&m.match_score));
            assert!(m.match_percentage <= 100);
            assert_eq!(m.match_percentage, (m.match_score * 100.0).round() as u8);
        }
    }

    #[test]
    fn test_empty_profile_ranks_by_demand() {
        let catalog = CareerCatalog::embedded().unwrap();
        let matches = WeightedCareerMatcher::default()
            .compute_matches(&UserProfile::default(), &catalog);
        for pair in matches.windows(2) {
            assert!(pair[0].data.demand_score >= pair[1].data.demand_score);
        }
        assert_eq!(matches[0].career, "AI/ML Engineer");
    }

    #[test]
    fn test_trait_sub_score_guards_zero_denominator() {
        assert_eq!(trait_sub_score(0, 0, 0), 0.0);
        assert_eq!(trait_sub_score(2, 4, 3), 0.5);
    }
}
