//! Plain-text export of a simulation session.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::simulation::CareerSimulation;
use crate::report::analysis::ComparativeAnalysis;
use crate::report::format::format_lakhs;
use crate::report::ReportUser;

const COURSES_PER_YEAR: usize = 2;

const NEXT_STEPS: &str = "\
Recommendations & Next Steps

Based on your comprehensive career analysis, here are our recommendations:

1. Immediate Actions (Next 3 months):
   - Focus on developing skills in your chosen career path
   - Network with professionals in your target industry
   - Consider relevant certifications or training programs

2. Short-term Goals (6-12 months):
   - Apply for entry-level positions in your preferred career
   - Build a portfolio showcasing your relevant skills
   - Seek mentorship from industry professionals

3. Long-term Strategy (2-5 years):
   - Plan for career advancement opportunities
   - Consider specialization in high-demand areas
   - Build leadership and management skills
";

pub fn render_text_report(
    user: &ReportUser,
    simulations: &[CareerSimulation],
    analysis: &ComparativeAnalysis,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    // `write!` into a String cannot fail
    let _ = writeln!(out, "Career Simulation Report");
    let _ = writeln!(out, "Generated for: {}", user.name);
    let _ = writeln!(out, "Date: {}", generated_at.format("%Y-%m-%d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Executive Summary");
    let _ = writeln!(
        out,
        "This career analysis report provides detailed insights into your top career \
         matches based on your personality traits, skills, and preferences."
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Profile");
    let _ = writeln!(out, "- Selected Traits: {}", or_none(&user.traits));
    let _ = writeln!(out, "- Key Skills: {}", or_none(&user.skills));
    let _ = writeln!(out, "- Interests: {}", or_none(&user.interests));
    let _ = writeln!(out);
    let _ = writeln!(out, "Career Simulations Overview");

    for (index, sim) in simulations.iter().enumerate() {
        write_career_section(&mut out, index + 1, sim);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Comparative Analysis");
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Metrics Comparison");
    let _ = writeln!(
        out,
        "Career | Avg Salary | Peak Salary | Satisfaction | Growth | Method"
    );
    for sim in simulations {
        let _ = writeln!(out, "{}", metrics_row(sim));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "AI Recommendations");
    let _ = writeln!(out, "- Best Overall Match: {}", analysis.best_overall_match);
    let _ = writeln!(out, "- Highest Growth Potential: {}", analysis.highest_growth);
    let _ = writeln!(out, "- Best Work-Life Balance: {}", analysis.best_work_life);
    let _ = writeln!(out);
    out.push_str(NEXT_STEPS);
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "This report was generated using AI-powered career simulation technology."
    );

    out
}

fn write_career_section(out: &mut String, number: usize, sim: &CareerSimulation) {
    let summary = &sim.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "{number}. {}", sim.career);
    let _ = writeln!(out, "- Average Salary: {}", format_lakhs(summary.avg_salary));
    let _ = writeln!(out, "- Peak Salary: {}", format_lakhs(summary.peak_salary));
    let _ = writeln!(out, "- Average Satisfaction: {}/5", summary.avg_satisfaction);
    let _ = writeln!(out, "- Career Progression: {}", summary.career_progression);
    let _ = writeln!(out, "- Generation Method: {}", sim.generation_method.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "Complete 10-Year Journey with Course Recommendations:");

    for year in &sim.yearly_projections {
        let courses: Vec<&str> = year
            .recommended_courses
            .iter()
            .take(COURSES_PER_YEAR)
            .map(|c| c.title.as_str())
            .collect();
        let _ = writeln!(
            out,
            "- Year {}: {} - {} (Satisfaction: {}/5)",
            year.year,
            year.title,
            format_lakhs(year.salary),
            year.satisfaction
        );
        let _ = writeln!(out, "  - Milestone: {}", year.key_milestone);
        let _ = writeln!(
            out,
            "  - Top Courses: {}",
            if courses.is_empty() {
                "N/A".to_string()
            } else {
                courses.join(", ")
            }
        );
    }
}

fn metrics_row(sim: &CareerSimulation) -> String {
    let growth = match sim.first_year_salary() {
        Some(first) if first > 0 => format!(
            "{:.1}%",
            (sim.summary.peak_salary as f64 - first as f64) / first as f64 * 100.0
        ),
        _ => "N/A".to_string(),
    };
    format!(
        "{} | {} | {} | {}/5 | {} | {}",
        sim.career,
        format_lakhs(sim.summary.avg_salary),
        format_lakhs(sim.summary.peak_salary),
        sim.summary.avg_satisfaction,
        growth,
        sim.generation_method.as_str()
    )
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::simulation::{SimulationProfile, SimulationRequest};
    use crate::report::analysis::compare;
    use crate::simulation::mock;
    use chrono::TimeZone;

    fn sims() -> Vec<CareerSimulation> {
        ["Software Engineer", "Data Scientist"]
            .iter()
            .map(|career| {
                mock::generate(&SimulationRequest {
                    career: career.to_string(),
                    profile: SimulationProfile::default(),
                })
            })
            .collect()
    }

    fn user() -> ReportUser {
        ReportUser {
            name: "Asha".to_string(),
            traits: vec!["Logical".to_string(), "Curious".to_string()],
            skills: vec!["Programming".to_string()],
            interests: vec![],
        }
    }

    fn render() -> String {
        let sims = sims();
        let analysis = compare(&sims).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        render_text_report(&user(), &sims, &analysis, at)
    }

    #[test]
    fn test_header_and_profile() {
        let report = render();
        assert!(report.starts_with("Career Simulation Report\nGenerated for: Asha\nDate: 2026-03-14\n"));
        assert!(report.contains("- Selected Traits: Logical, Curious"));
        assert!(report.contains("- Interests: None"));
    }

    #[test]
    fn test_every_career_and_year_is_listed() {
        let report = render();
        assert!(report.contains("\n1. Software Engineer\n"));
        assert!(report.contains("\n2. Data Scientist\n"));
        assert_eq!(report.matches("- Year ").count(), 20);
        assert!(report.contains("Top Courses: Complete Web Development Bootcamp, Git & GitHub Masterclass"));
    }

    #[test]
    fn test_metrics_and_recommendations_sections() {
        let report = render();
        assert!(report.contains("Key Metrics Comparison"));
        assert_eq!(report.matches(" | enhanced-mock").count(), 2);
        assert!(report.contains("- Best Overall Match: "));
        assert!(report.contains("3. Long-term Strategy (2-5 years):"));
        assert!(report.trim_end().ends_with("career simulation technology."));
    }

    #[test]
    fn test_metrics_row_growth_uses_first_year() {
        let mut sim = sims().remove(0);
        sim.yearly_projections[0].salary = 1_000_000;
        sim.summary.peak_salary = 2_500_000;
        assert!(metrics_row(&sim).contains("| 150.0% |"));
    }
}
