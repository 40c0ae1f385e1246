//! Reference data behind the offline projection generator: per-career base
//! figures, title ladders, phase text and the course table.
//!
//! Careers without their own entry borrow the Software Engineer tables.

use crate::models::simulation::CourseType::{
    self, Certification, IndustrySpecific, Leadership, SoftSkills, Technical,
};
use crate::models::simulation::Difficulty::{self, Advanced, Beginner, Intermediate};
use crate::models::simulation::Priority::{self, High, Medium};
use crate::models::simulation::RecommendedCourse;

pub const FALLBACK_CAREER: &str = "Software Engineer";

pub struct CareerTemplate {
    pub career: &'static str,
    pub starting_salary: f64,
    pub base_growth_rate: f64,
    pub base_satisfaction: f64,
    pub base_work_life: f64,
    pub base_burnout: f64,
    pub description: &'static str,
    pub industry_overview: &'static str,
    pub entry_requirements: &'static [&'static str],
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub titles: [&'static str; 10],
}

const TEMPLATES: &[CareerTemplate] = &[
    CareerTemplate {
        career: FALLBACK_CAREER,
        starting_salary: 600_000.0,
        base_growth_rate: 0.15,
        base_satisfaction: 4.0,
        base_work_life: 3.5,
        base_burnout: 2.5,
        description: "Software Engineers design, develop, and maintain software applications \
            and systems that power the digital world.",
        industry_overview: "The software industry in India is experiencing explosive growth with \
            increasing demand for skilled developers across startups and MNCs.",
        entry_requirements: &[
            "Bachelor's in Computer Science or related field",
            "Programming skills in modern languages",
            "Problem-solving abilities",
            "Portfolio of projects",
        ],
        pros: &[
            "High salary potential",
            "Remote work opportunities",
            "Continuous learning",
            "Global job market",
            "Innovation opportunities",
        ],
        cons: &[
            "High competition",
            "Rapid technology changes",
            "Long working hours",
            "Deadline pressure",
            "Continuous upskilling required",
        ],
        recommendations: &[
            "Master multiple programming languages",
            "Build a strong GitHub portfolio",
            "Contribute to open source projects",
            "Stay updated with latest technologies",
            "Develop soft skills for team collaboration",
        ],
        titles: [
            "Junior Software Developer",
            "Software Engineer",
            "Senior Software Engineer",
            "Lead Software Engineer",
            "Principal Engineer",
            "Engineering Manager",
            "Senior Engineering Manager",
            "Director of Engineering",
            "VP Engineering",
            "CTO",
        ],
    },
    CareerTemplate {
        career: "Data Scientist",
        starting_salary: 700_000.0,
        base_growth_rate: 0.18,
        base_satisfaction: 4.2,
        base_work_life: 3.8,
        base_burnout: 2.3,
        description: "Data Scientists analyze complex data to extract insights that drive \
            strategic business decisions and innovation.",
        industry_overview: "Data Science is one of the fastest-growing fields with massive demand \
            across industries for data-driven decision making.",
        entry_requirements: &[
            "Strong mathematics and statistics background",
            "Programming skills in Python/R",
            "Machine learning knowledge",
            "Business acumen",
        ],
        pros: &[
            "Excellent salary growth",
            "High demand across industries",
            "Intellectual stimulation",
            "Impact on business decisions",
            "Remote work flexibility",
        ],
        cons: &[
            "Requires continuous learning",
            "Data quality challenges",
            "Complex stakeholder management",
            "Long analysis cycles",
            "High expectations for insights",
        ],
        recommendations: &[
            "Master statistical analysis and ML algorithms",
            "Develop domain expertise in specific industries",
            "Learn data visualization tools",
            "Build communication skills",
            "Create a portfolio of data projects",
        ],
        titles: [
            "Data Analyst",
            "Junior Data Scientist",
            "Data Scientist",
            "Senior Data Scientist",
            "Lead Data Scientist",
            "Principal Data Scientist",
            "Data Science Manager",
            "Senior DS Manager",
            "Director of Data Science",
            "Chief Data Officer",
        ],
    },
    CareerTemplate {
        career: "Product Manager",
        starting_salary: 800_000.0,
        base_growth_rate: 0.16,
        base_satisfaction: 4.1,
        base_work_life: 3.2,
        base_burnout: 3.0,
        description: "Product Managers guide product development from conception to launch, \
            balancing user needs with business objectives.",
        industry_overview: "Product Management is crucial in India's growing tech ecosystem with \
            high demand for strategic product leaders.",
        entry_requirements: &[
            "Business or technical background",
            "Strategic thinking abilities",
            "User empathy",
            "Communication skills",
            "Analytical mindset",
        ],
        pros: &[
            "High strategic impact",
            "Cross-functional collaboration",
            "Business leadership opportunities",
            "Excellent compensation",
            "Career advancement potential",
        ],
        cons: &[
            "High pressure and responsibility",
            "Balancing multiple stakeholders",
            "Long working hours",
            "Ambiguous success metrics",
            "Constant prioritization challenges",
        ],
        recommendations: &[
            "Develop strong analytical and communication skills",
            "Learn user research methodologies",
            "Understand technical concepts",
            "Build relationships across teams",
            "Study successful product case studies",
        ],
        titles: [
            "Associate Product Manager",
            "Product Manager",
            "Senior Product Manager",
            "Principal Product Manager",
            "Group Product Manager",
            "Director of Product",
            "Senior Director Product",
            "VP Product",
            "Chief Product Officer",
            "CEO",
        ],
    },
];

/// Base data for `career`, or the Software Engineer entry when unknown.
pub fn template_for(career: &str) -> &'static CareerTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.career == career)
        .or_else(|| TEMPLATES.iter().find(|t| t.career == FALLBACK_CAREER))
        .unwrap_or(&TEMPLATES[0])
}

// ────────────────────────────────────────────────────────────────────────────
// Year-indexed text
// ────────────────────────────────────────────────────────────────────────────

pub const MILESTONES: [&str; 10] = [
    "Successfully completed onboarding and first project delivery",
    "Received positive performance review and salary increment",
    "Led first independent project and mentored junior colleague",
    "Promoted to senior role with increased responsibilities",
    "Completed advanced certification and expanded skill set",
    "Successfully delivered major project with significant business impact",
    "Recognized as subject matter expert and thought leader",
    "Built and led high-performing team to achieve ambitious goals",
    "Drove strategic initiatives with company-wide impact",
    "Achieved senior leadership position with industry recognition",
];

pub const DEFAULT_MILESTONE: &str = "Continued professional excellence and growth";

pub fn milestone(year: u32) -> &'static str {
    (year as usize)
        .checked_sub(1)
        .and_then(|i| MILESTONES.get(i))
        .copied()
        .unwrap_or(DEFAULT_MILESTONE)
}

/// Lifestyle line for the career phase; the balanced variant applies when
/// the year's work-life score is above 3.5.
pub fn lifestyle(year: u32, work_life_balance: f64) -> &'static str {
    let balanced = work_life_balance > 3.5;
    match (year, balanced) {
        (0..=3, true) => "Balanced lifestyle with learning opportunities and moderate work hours",
        (0..=3, false) => {
            "Intense learning phase with longer hours but exciting growth opportunities"
        }
        (4..=7, true) => {
            "Established routine with good work-life balance and increased responsibilities"
        }
        (4..=7, false) => {
            "High-responsibility phase with challenging projects and leadership opportunities"
        }
        (_, true) => "Strategic role with flexible schedule and focus on mentoring others",
        (_, false) => {
            "Executive responsibilities with high impact decisions and significant influence"
        }
    }
}

const SOFTWARE_SKILLS: [&[&str]; 5] = [
    &["Programming Fundamentals", "Version Control", "Debugging"],
    &["Framework Proficiency", "Database Design", "Testing"],
    &["System Design", "Code Review", "Mentoring"],
    &["Architecture Planning", "Team Leadership", "Project Management"],
    &["Strategic Planning", "Technology Evaluation", "Stakeholder Management"],
];

const DATA_SKILLS: [&[&str]; 5] = [
    &["Statistics", "Python/R", "Data Visualization"],
    &["Machine Learning", "SQL", "Business Intelligence"],
    &["Advanced ML", "Big Data Tools", "A/B Testing"],
    &["MLOps", "Team Leadership", "Strategy Development"],
    &["Executive Communication", "Data Strategy", "Innovation Leadership"],
];

const CHALLENGES: [&[&str]; 5] = [
    &["Learning curve", "Adapting to work culture"],
    &["Increased complexity", "Time management"],
    &["Leadership responsibilities", "Technical depth vs breadth"],
    &["Strategic thinking", "Managing larger teams"],
    &["Industry changes", "Succession planning"],
];

const OPPORTUNITIES: [&[&str]; 5] = [
    &["Skill development", "Network building"],
    &["Specialization", "Cross-team collaboration"],
    &["Leadership roles", "Industry recognition"],
    &["Strategic influence", "Mentoring others"],
    &["Industry leadership", "Board positions"],
];

/// Two-year phase index (0..=4) for a 1-based year.
fn phase(year: u32) -> usize {
    ((year.saturating_sub(1) / 2) as usize).min(4)
}

pub fn skills_required(career: &str, year: u32) -> Vec<String> {
    let table = match career {
        "Data Scientist" => &DATA_SKILLS,
        _ => &SOFTWARE_SKILLS,
    };
    to_strings(table[phase(year)])
}

pub fn challenges(year: u32) -> Vec<String> {
    to_strings(CHALLENGES[phase(year)])
}

pub fn opportunities(year: u32) -> Vec<String> {
    to_strings(OPPORTUNITIES[phase(year)])
}

pub fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Course table
// ────────────────────────────────────────────────────────────────────────────

struct CourseSpec {
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    course_type: CourseType,
    priority: Priority,
    description: &'static str,
    cost: &'static str,
}

impl CourseSpec {
    fn to_course(&self) -> RecommendedCourse {
        RecommendedCourse {
            title: self.title.to_string(),
            provider: self.provider.to_string(),
            duration: self.duration.to_string(),
            difficulty: self.difficulty,
            course_type: self.course_type,
            priority: self.priority,
            description: self.description.to_string(),
            estimated_cost: self.cost.to_string(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
const fn course(
    title: &'static str,
    provider: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    course_type: CourseType,
    priority: Priority,
    description: &'static str,
    cost: &'static str,
) -> CourseSpec {
    CourseSpec {
        title,
        provider,
        duration,
        difficulty,
        course_type,
        priority,
        description,
        cost,
    }
}

/// Software Engineer courses, one slice per year 1..=10.
#[rustfmt::skip]
const SOFTWARE_COURSES: [&[CourseSpec]; 10] = [
    &[
        course("Complete Web Development Bootcamp", "Udemy", "12 weeks", Beginner, Technical, High,
            "Master HTML, CSS, JavaScript, and modern frameworks to build full-stack applications", "₹2,000"),
        course("Git & GitHub Masterclass", "Coursera", "4 weeks", Beginner, Technical, High,
            "Essential version control skills for collaborative software development", "Free"),
        course("Programming Fundamentals with Python", "NPTEL", "8 weeks", Beginner, Technical, Medium,
            "Build strong programming foundations with Python", "Free"),
    ],
    &[
        course("React.js Complete Course", "Pluralsight", "6 weeks", Intermediate, Technical, High,
            "Master React.js for building modern user interfaces", "₹3,500"),
        course("Database Design and SQL", "edX", "8 weeks", Intermediate, Technical, High,
            "Learn database design principles and advanced SQL queries", "₹5,000"),
        course("Agile Software Development", "LinkedIn Learning", "3 weeks", Beginner, SoftSkills, Medium,
            "Understand Agile methodologies and Scrum practices", "₹2,500"),
    ],
    &[
        course("System Design Interview Prep", "Educative", "10 weeks", Intermediate, Technical, High,
            "Master system design concepts for senior engineering roles", "₹8,000"),
        course("AWS Cloud Practitioner", "AWS Training", "6 weeks", Intermediate, Certification, High,
            "Get certified in AWS cloud services and architecture", "₹12,000"),
        course("Code Review Best Practices", "Pluralsight", "2 weeks", Intermediate, Technical, Medium,
            "Learn effective code review techniques and mentoring skills", "₹3,500"),
    ],
    &[
        course("Microservices Architecture", "Coursera", "8 weeks", Advanced, Technical, High,
            "Design and implement scalable microservices architectures", "₹6,000"),
        course("Technical Leadership", "LinkedIn Learning", "4 weeks", Intermediate, Leadership, High,
            "Develop technical leadership and team management skills", "₹2,500"),
        course("Docker & Kubernetes", "Udemy", "6 weeks", Advanced, Technical, Medium,
            "Master containerization and orchestration technologies", "₹4,000"),
    ],
    &[
        course("Software Architecture Patterns", "O'Reilly Learning", "10 weeks", Advanced, Technical, High,
            "Master enterprise software architecture patterns and design", "₹15,000"),
        course("Engineering Management", "IIM Bangalore", "12 weeks", Advanced, Leadership, High,
            "Transition from technical contributor to engineering manager", "₹45,000"),
    ],
    &[
        course("DevOps Engineering", "AWS Training", "8 weeks", Advanced, Technical, High,
            "Master CI/CD, infrastructure as code, and DevOps practices", "₹20,000"),
        course("Strategic Technology Planning", "MIT xPRO", "6 weeks", Advanced, Leadership, Medium,
            "Learn to align technology strategy with business objectives", "₹75,000"),
    ],
    &[
        course("Machine Learning for Engineers", "Stanford Online", "12 weeks", Advanced, Technical, Medium,
            "Integrate ML capabilities into software systems", "₹25,000"),
        course("Executive Leadership", "ISB Hyderabad", "8 weeks", Advanced, Leadership, High,
            "Develop executive presence and strategic leadership skills", "₹85,000"),
    ],
    &[
        course("Digital Transformation Strategy", "Harvard Business School", "6 weeks", Advanced, Leadership, High,
            "Lead digital transformation initiatives in organizations", "₹1,20,000"),
        course("Emerging Technologies Trends", "MIT Sloan", "4 weeks", Advanced, IndustrySpecific, Medium,
            "Stay ahead of technology trends and innovations", "₹60,000"),
    ],
    &[
        course("Board Advisory Skills", "Wharton Executive Education", "3 weeks", Advanced, Leadership, Medium,
            "Prepare for board positions and advisory roles", "₹1,50,000"),
        course("Innovation Management", "Stanford Executive Program", "5 weeks", Advanced, Leadership, High,
            "Drive innovation and R&D in technology organizations", "₹2,00,000"),
    ],
    &[
        course("CEO Leadership Program", "Harvard Business School", "4 weeks", Advanced, Leadership, High,
            "Executive leadership for C-suite positions", "₹3,00,000"),
        course("Global Technology Trends", "World Economic Forum", "2 weeks", Advanced, IndustrySpecific, Medium,
            "Understand global technology landscape and future trends", "₹1,00,000"),
    ],
];

/// Data Scientist courses for years 1..=5; later years reuse year 5.
#[rustfmt::skip]
const DATA_COURSES: [&[CourseSpec]; 5] = [
    &[
        course("Python for Data Science", "Coursera", "8 weeks", Beginner, Technical, High,
            "Master Python programming for data analysis and visualization", "₹3,000"),
        course("Statistics for Data Science", "edX", "10 weeks", Beginner, Technical, High,
            "Build strong statistical foundations for data analysis", "₹4,000"),
        course("SQL for Data Analysis", "Udacity", "6 weeks", Beginner, Technical, High,
            "Learn SQL for data extraction and manipulation", "₹5,000"),
    ],
    &[
        course("Machine Learning Specialization", "Coursera (Stanford)", "12 weeks", Intermediate, Technical, High,
            "Comprehensive machine learning algorithms and applications", "₹8,000"),
        course("Data Visualization with Tableau", "Tableau Learning", "4 weeks", Intermediate, Technical, High,
            "Create compelling data visualizations and dashboards", "₹6,000"),
        course("Business Analytics", "IIM Calcutta", "8 weeks", Intermediate, IndustrySpecific, Medium,
            "Apply analytics to solve business problems", "₹25,000"),
    ],
    &[
        course("Deep Learning Specialization", "Coursera (deeplearning.ai)", "16 weeks", Advanced, Technical, High,
            "Master neural networks and deep learning techniques", "₹12,000"),
        course("Big Data with Spark", "Databricks Academy", "6 weeks", Advanced, Technical, High,
            "Process large-scale data with Apache Spark", "₹15,000"),
        course("Data Science Communication", "LinkedIn Learning", "3 weeks", Intermediate, SoftSkills, Medium,
            "Present data insights effectively to stakeholders", "₹2,500"),
    ],
    &[
        course("MLOps Engineering", "Google Cloud Training", "8 weeks", Advanced, Technical, High,
            "Deploy and manage ML models in production", "₹18,000"),
        course("Advanced Analytics Leadership", "Northwestern Kellogg", "6 weeks", Advanced, Leadership, High,
            "Lead data science teams and analytics initiatives", "₹65,000"),
    ],
    &[
        course("AI Strategy and Governance", "MIT Sloan", "4 weeks", Advanced, Leadership, High,
            "Develop AI strategy and ethical AI practices", "₹80,000"),
        course("Data Science Management", "UC Berkeley", "8 weeks", Advanced, Leadership, High,
            "Manage data science teams and projects effectively", "₹45,000"),
    ],
];

/// Courses for `career` in `year`. Years past a career's table fall back to
/// its year-5 entry; careers without a table use the Software Engineer one.
pub fn recommended_courses(career: &str, year: u32) -> Vec<RecommendedCourse> {
    let table: &[&[CourseSpec]] = match career {
        "Data Scientist" => &DATA_COURSES,
        _ => &SOFTWARE_COURSES,
    };
    let index = (year as usize).saturating_sub(1);
    let specs = table
        .get(index)
        .or_else(|| table.get((year.min(5) as usize).saturating_sub(1)))
        .copied()
        .unwrap_or(&[]);
    specs.iter().map(CourseSpec::to_course).collect()
}
