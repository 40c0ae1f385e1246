//! Fixed option lists and decision-tree questions rendered by the wizard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraitGroup {
    pub group: &'static str,
    pub traits: &'static [&'static str],
}

pub const TRAIT_GROUPS: &[TraitGroup] = &[
    TraitGroup {
        group: "Personality",
        traits: &[
            "Logical",
            "Analytical",
            "Creative",
            "Empathetic",
            "Patient",
            "Curious",
            "Detail-oriented",
            "Strategic",
            "Independent",
            "Collaborative",
            "Organized",
            "Decisive",
            "Communicative",
            "Innovative",
            "Technical",
        ],
    },
    TraitGroup {
        group: "Work Style",
        traits: &[
            "Problem-solving",
            "Research-oriented",
            "User-focused",
            "Data-driven",
            "Process-oriented",
            "Quality-focused",
            "Safety-conscious",
            "Risk-tolerant",
            "Adaptable",
            "Resilient",
            "Energetic",
            "Persistent",
        ],
    },
    TraitGroup {
        group: "Professional",
        traits: &[
            "Business-savvy",
            "Entrepreneurial",
            "Regulatory-aware",
            "Ethical",
            "Eco-conscious",
            "Health-focused",
            "Traditional",
            "Visionary",
            "Mathematical",
            "Artistic",
            "Musical",
            "Athletic",
            "Mechanical",
        ],
    },
    TraitGroup {
        group: "Interpersonal",
        traits: &[
            "Sociable",
            "Persuasive",
            "Mentoring",
            "Team-oriented",
            "Client-focused",
            "Cultural-aware",
            "Linguistic",
            "Diplomatic",
            "Negotiation-skilled",
        ],
    },
];

pub const SKILL_OPTIONS: &[&str] = &[
    "Programming",
    "Data Analysis",
    "Communication",
    "Leadership",
    "Design",
    "Marketing",
    "Sales",
    "Research",
    "Problem Solving",
    "Project Management",
    "Writing",
    "Public Speaking",
    "Financial Analysis",
    "Teaching",
    "Counseling",
];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology",
    "Healthcare",
    "Education",
    "Finance",
    "Arts & Design",
    "Sports",
    "Environment",
    "Social Impact",
    "Business",
    "Science",
    "Travel",
    "Food",
    "Fashion",
    "Gaming",
    "Music",
];

/// The five value sliders, in display order (camelCase wire keys).
pub const VALUE_KEYS: &[&str] = &[
    "salary",
    "workLifeBalance",
    "jobSecurity",
    "creativity",
    "leadership",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [AnswerOption],
}

const fn opt(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption { value, label }
}

pub const DECISION_TREE: &[Question] = &[
    Question {
        id: "domain",
        question: "Which domain interests you most?",
        options: &[
            opt("technology", "Technology & Software"),
            opt("healthcare", "Healthcare & Medicine"),
            opt("business", "Business & Finance"),
            opt("creative", "Creative & Arts"),
            opt("education", "Education & Research"),
            opt("social", "Social Impact & Non-profit"),
        ],
    },
    Question {
        id: "environment",
        question: "What work environment do you prefer?",
        options: &[
            opt("office", "Traditional Office Setting"),
            opt("remote", "Remote/Work from Home"),
            opt("hybrid", "Hybrid (Office + Remote)"),
            opt("field", "Field Work/Travel"),
            opt("lab", "Laboratory/Research Facility"),
            opt("client", "Client Sites/Consulting"),
        ],
    },
    Question {
        id: "growth",
        question: "How important is rapid career advancement?",
        options: &[
            opt("very-high", "Very Important - I want to climb quickly"),
            opt("high", "Important - Steady progression matters"),
            opt("moderate", "Moderate - Some growth is fine"),
            opt("low", "Not Important - I prefer stability"),
        ],
    },
    Question {
        id: "worklife",
        question: "How do you view work-life balance?",
        options: &[
            opt("strict", "Strict boundaries - Work stays at work"),
            opt("flexible", "Flexible - Some overlap is okay"),
            opt("integrated", "Integrated - Work and life blend"),
            opt("workfirst", "Work-focused - Career comes first"),
        ],
    },
    Question {
        id: "risk",
        question: "What's your risk tolerance for career choices?",
        options: &[
            opt("high", "High - I'm comfortable with uncertainty"),
            opt("moderate", "Moderate - Some risk is acceptable"),
            opt("low", "Low - I prefer stable, predictable paths"),
            opt("very-low", "Very Low - Security is paramount"),
        ],
    },
];
