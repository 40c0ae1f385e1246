//! Side-by-side comparison of simulated careers: the three headline picks
//! and the normalised radar scores.

use serde::{Deserialize, Serialize};

use crate::models::simulation::CareerSimulation;
use crate::report::format::format_lakhs;

pub const RADAR_ATTRIBUTES: [&str; 6] = [
    "Salary",
    "Growth",
    "Satisfaction",
    "Stability",
    "Innovation",
    "Work-Life Balance",
];

/// Average salary that maps to a full Salary score.
const SALARY_CEILING: f64 = 2_000_000.0;
const SCORE_SCALE: f64 = 5.0;
const LABEL_MAX_CHARS: usize = 15;
const LABEL_KEEP_CHARS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarScore {
    pub career: String,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub attribute: String,
    pub scores: Vec<RadarScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    pub best_overall_match: String,
    pub highest_growth: String,
    pub best_work_life: String,
    pub radar_data: Vec<RadarPoint>,
}

/// Compares the given simulations. `None` when there is nothing to compare.
/// Ties go to the later simulation.
pub fn compare(simulations: &[CareerSimulation]) -> Option<ComparativeAnalysis> {
    let best = last_max_by(simulations, |s| s.summary.avg_satisfaction)?;
    let growth = last_max_by(simulations, |s| s.summary.peak_salary as f64)?;
    let balanced = last_max_by(simulations, |s| s.summary.avg_work_life_balance)?;

    Some(ComparativeAnalysis {
        best_overall_match: format!(
            "{} offers the best balance of satisfaction ({}/5) and growth potential based on your profile.",
            best.career, best.summary.avg_satisfaction
        ),
        highest_growth: format!(
            "{} shows the highest earning potential with peak salary of {}.",
            growth.career,
            format_lakhs(growth.summary.peak_salary)
        ),
        best_work_life: format!(
            "{} typically offers better work-life balance with an average score of {}/5.",
            balanced.career, balanced.summary.avg_work_life_balance
        ),
        radar_data: radar_data(simulations),
    })
}

fn last_max_by<F>(simulations: &[CareerSimulation], key: F) -> Option<&CareerSimulation>
where
    F: Fn(&CareerSimulation) -> f64,
{
    simulations.iter().reduce(|prev, current| {
        if key(prev) > key(current) {
            prev
        } else {
            current
        }
    })
}

pub fn radar_data(simulations: &[CareerSimulation]) -> Vec<RadarPoint> {
    RADAR_ATTRIBUTES
        .iter()
        .map(|attribute| RadarPoint {
            attribute: attribute.to_string(),
            scores: simulations
                .iter()
                .map(|sim| RadarScore {
                    career: radar_label(&sim.career),
                    value: to_score(radar_value(attribute, sim)),
                })
                .collect(),
        })
        .collect()
}

fn radar_value(attribute: &str, sim: &CareerSimulation) -> f64 {
    let summary = &sim.summary;
    match attribute {
        "Salary" => summary.avg_salary as f64 / SALARY_CEILING * 100.0,
        "Growth" => match sim.first_year_salary() {
            Some(first) if first > 0 => {
                (summary.peak_salary as f64 - first as f64) / first as f64 * 10.0
            }
            _ => 0.0,
        },
        "Satisfaction" => summary.avg_satisfaction / SCORE_SCALE * 100.0,
        "Stability" => 100.0 - summary.avg_burnout_risk / SCORE_SCALE * 100.0,
        "Innovation" => innovation_score(&sim.career),
        "Work-Life Balance" => summary.avg_work_life_balance / SCORE_SCALE * 100.0,
        _ => 0.0,
    }
}

fn innovation_score(career: &str) -> f64 {
    if career.contains("Engineer") {
        85.0
    } else if career.contains("Data") {
        90.0
    } else {
        75.0
    }
}

fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// Chart labels longer than 15 characters keep 12 plus an ellipsis.
pub fn radar_label(career: &str) -> String {
    if career.chars().count() > LABEL_MAX_CHARS {
        let kept: String = career.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{kept}...")
    } else {
        career.to_string()
    }
}
