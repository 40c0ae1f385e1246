//! Offline 10-year projection generator.
//!
//! Used whenever the model is unavailable or returns something unusable.
//! Variance comes from an RNG seeded by the career and the selected traits,
//! so the same request always yields the same projection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::models::simulation::{
    CareerSimulation, GenerationMethod, SimulationRequest, SimulationSummary, YearlyProjection,
};
use crate::simulation::templates::{self, template_for, to_strings};

pub const PROJECTION_YEARS: u32 = 10;

const HIGH_GROWTH_TRAITS: &[&str] = &[
    "Leadership",
    "Strategic",
    "Entrepreneurial",
    "Innovative",
    "Ambitious",
];
const STABILITY_TRAITS: &[&str] = &["Organized", "Detail-oriented", "Patient", "Methodical"];

const SCORE_MIN: f64 = 1.0;
const SCORE_MAX: f64 = 5.0;

pub fn generate(request: &SimulationRequest) -> CareerSimulation {
    let career = request.career.as_str();
    let traits = &request.profile.profile.selected_traits;
    let template = template_for(career);

    let high_growth = traits
        .iter()
        .any(|t| HIGH_GROWTH_TRAITS.contains(&t.as_str()));
    let stability = traits
        .iter()
        .any(|t| STABILITY_TRAITS.contains(&t.as_str()));

    let mut rng = StdRng::seed_from_u64(seed_for(career, traits));
    let mut salary = template.starting_salary;
    let mut projections = Vec::with_capacity(PROJECTION_YEARS as usize);

    for year in 1..=PROJECTION_YEARS {
        let mut growth = template.base_growth_rate + rng.gen_range(-0.05..0.05);
        if high_growth && year <= 5 {
            growth *= 1.3;
        }
        if stability && year > 5 {
            growth *= 1.1;
        }
        salary *= 1.0 + growth;

        let mut satisfaction = template.base_satisfaction;
        if high_growth && year <= 3 {
            satisfaction += 0.5;
        }
        if stability && year > 5 {
            satisfaction += 0.3;
        }
        satisfaction = clamp_score(satisfaction + rng.gen_range(-0.5..0.5));

        let mut work_life = template.base_work_life;
        if stability && year > 5 {
            work_life += 0.5;
        }
        work_life = clamp_score(work_life + rng.gen_range(-0.4..0.4));

        let mut burnout = template.base_burnout;
        if high_growth && year <= 5 {
            burnout += 0.5;
        }
        if work_life < 3.0 {
            burnout += 0.5;
        }
        burnout = clamp_score(burnout + rng.gen_range(-0.3..0.3));

        projections.push(YearlyProjection {
            year,
            title: job_title(&template.titles, year, high_growth).to_string(),
            salary: salary.round() as u64,
            satisfaction: round1(satisfaction),
            work_life_balance: round1(work_life),
            burnout_risk: round1(burnout),
            lifestyle: templates::lifestyle(year, work_life).to_string(),
            key_milestone: templates::milestone(year).to_string(),
            skills_required: templates::skills_required(career, year),
            challenges: templates::challenges(year),
            opportunities: templates::opportunities(year),
            recommended_courses: templates::recommended_courses(career, year),
        });
    }

    CareerSimulation {
        career: career.to_string(),
        description: template.description.to_string(),
        industry_overview: template.industry_overview.to_string(),
        entry_requirements: to_strings(template.entry_requirements),
        summary: summarize(&projections),
        yearly_projections: projections,
        pros: to_strings(template.pros),
        cons: to_strings(template.cons),
        recommendations: to_strings(template.recommendations),
        is_ai_generated: false,
        generation_method: GenerationMethod::EnhancedMock,
    }
}

/// Title ladder position: one rung every 1.2 years, or every year for
/// high-growth profiles, capped at the top rung.
fn job_title<'a>(titles: &[&'a str; 10], year: u32, high_growth: bool) -> &'a str {
    let steps = f64::from(year.saturating_sub(1));
    let index = if high_growth {
        steps as usize
    } else {
        (steps / 1.2).floor() as usize
    };
    titles[index.min(titles.len() - 1)]
}

pub fn summarize(projections: &[YearlyProjection]) -> SimulationSummary {
    let count = projections.len().max(1) as f64;
    let mean = |f: fn(&YearlyProjection) -> f64| -> f64 {
        round1(projections.iter().map(f).sum::<f64>() / count)
    };

    let first = projections.first().map(|p| p.salary).unwrap_or(0);
    let peak = projections.iter().map(|p| p.salary).max().unwrap_or(0);
    let total_salary: u64 = projections.iter().map(|p| p.salary).sum();
    let growth_percent = if first > 0 {
        ((peak - first) as f64 / first as f64 * 100.0).round()
    } else {
        0.0
    };

    SimulationSummary {
        avg_salary: (total_salary as f64 / count).round() as u64,
        peak_salary: peak,
        avg_satisfaction: mean(|p| p.satisfaction),
        avg_work_life_balance: mean(|p| p.work_life_balance),
        avg_burnout_risk: mean(|p| p.burnout_risk),
        career_progression: projections
            .last()
            .map(|p| p.title.clone())
            .unwrap_or_default(),
        total_growth: format!("{growth_percent}%"),
    }
}

/// First eight bytes of SHA-256 over the career and each trait, NUL-separated.
fn seed_for(career: &str, traits: &[String]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(career.as_bytes());
    for trait_name in traits {
        hasher.update([0u8]);
        hasher.update(trait_name.as_bytes());
    }
    let digest = hasher.finalize();
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::simulation::SimulationProfile;

    fn request(career: &str, traits: &[&str]) -> SimulationRequest {
        let mut profile = SimulationProfile::default();
        profile.profile.selected_traits = traits.iter().map(|t| t.to_string()).collect();
        SimulationRequest {
            career: career.to_string(),
            profile,
        }
    }

    #[test]
    fn test_projection_spans_ten_years() {
        let sim = generate(&request("Data Scientist", &["Curious"]));
        assert_eq!(sim.yearly_projections.len(), 10);
        let years: Vec<u32> = sim.yearly_projections.iter().map(|y| y.year).collect();
        assert_eq!(years, (1..=10).collect::<Vec<_>>());
        assert_eq!(sim.generation_method, GenerationMethod::EnhancedMock);
        assert!(!sim.is_ai_generated);
    }

    #[test]
    fn test_same_request_gives_same_projection() {
        let a = generate(&request("Product Manager", &["Strategic", "Organized"]));
        let b = generate(&request("Product Manager", &["Strategic", "Organized"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_is_fixed_across_builds() {
        assert_eq!(
            seed_for("Software Engineer", &["Strategic".to_string()]),
            11_376_398_191_829_437_372
        );
        assert_eq!(seed_for("Software Engineer", &[]), 112_720_338_677_223_530);
        // Trait boundaries are part of the seed
        assert_ne!(
            seed_for("Data Scientist", &["ab".to_string(), "c".to_string()]),
            seed_for("Data Scientist", &["a".to_string(), "bc".to_string()])
        );
    }

    #[test]
    fn test_scores_stay_in_range() {
        for career in ["Software Engineer", "Data Scientist", "Product Manager", "Urban Planner"] {
            let sim = generate(&request(career, &["Leadership", "Patient"]));
            for y in &sim.yearly_projections {
                for score in [y.satisfaction, y.work_life_balance, y.burnout_risk] {
                    assert!((1.0..=5.0).contains(&score), "{career} year {}: {score}", y.year);
                }
            }
        }
    }

    #[test]
    fn test_salary_grows_every_year() {
        // Minimum growth is 0.10 for Software Engineer, so no year can shrink.
        let sim = generate(&request("Software Engineer", &[]));
        for pair in sim.yearly_projections.windows(2) {
            assert!(pair[1].salary > pair[0].salary);
        }
        assert!(sim.yearly_projections[0].salary > 600_000);
    }

    #[test]
    fn test_summary_matches_projections() {
        let sim = generate(&request("Data Scientist", &["Innovative"]));
        let salaries: Vec<u64> = sim.yearly_projections.iter().map(|y| y.salary).collect();
        let peak = *salaries.iter().max().unwrap();
        let avg = (salaries.iter().sum::<u64>() as f64 / 10.0).round() as u64;

        assert_eq!(sim.summary.peak_salary, peak);
        assert_eq!(sim.summary.avg_salary, avg);
        assert_eq!(
            sim.summary.career_progression,
            sim.yearly_projections[9].title
        );
        let growth = ((peak - salaries[0]) as f64 / salaries[0] as f64 * 100.0).round();
        assert_eq!(sim.summary.total_growth, format!("{growth}%"));
    }

    #[test]
    fn test_high_growth_profile_climbs_faster() {
        let ambitious = generate(&request("Software Engineer", &["Ambitious"]));
        let steady = generate(&request("Software Engineer", &["Calm"]));
        assert_eq!(ambitious.yearly_projections[5].title, "Engineering Manager");
        assert_eq!(steady.yearly_projections[5].title, "Principal Engineer");
        assert_eq!(ambitious.summary.career_progression, "CTO");
        assert_eq!(steady.summary.career_progression, "Director of Engineering");
    }

    #[test]
    fn test_unknown_career_keeps_its_name() {
        let sim = generate(&request("Urban Planner", &[]));
        assert_eq!(sim.career, "Urban Planner");
        assert_eq!(sim.yearly_projections[0].title, "Junior Software Developer");
    }

    #[test]
    fn test_trait_match_is_exact() {
        assert_eq!(
            job_title(&template_for("Software Engineer").titles, 4, false),
            "Senior Software Engineer"
        );
        let lower = generate(&request("Software Engineer", &["leadership"]));
        assert_eq!(lower.yearly_projections[3].title, "Senior Software Engineer");
    }
}
