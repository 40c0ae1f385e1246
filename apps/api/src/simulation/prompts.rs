use crate::llm_client::prompts::{INDIAN_MARKET_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::models::simulation::SimulationRequest;

pub fn simulation_system_prompt() -> String {
    format!(
        "{JSON_ONLY_SYSTEM}\n\nYou are an expert career counselor and learning advisor \
         specializing in the Indian job market."
    )
}

const RESPONSE_SHAPE: &str = r#"{
  "career": "<career name>",
  "description": "Brief career overview (2-3 sentences)",
  "industryOverview": "Industry state and outlook in India",
  "entryRequirements": ["requirement1", "requirement2", "requirement3"],
  "yearlyProjections": [
    {
      "year": 1,
      "title": "Entry level position",
      "salary": 600000,
      "satisfaction": 4.0,
      "workLifeBalance": 3.5,
      "burnoutRisk": 2.0,
      "lifestyle": "Lifestyle description for this year",
      "keyMilestone": "Key achievement or milestone",
      "skillsRequired": ["skill1", "skill2", "skill3"],
      "challenges": ["challenge1", "challenge2"],
      "opportunities": ["opportunity1", "opportunity2"],
      "recommendedCourses": [
        {
          "title": "Course name",
          "provider": "Platform/Institution",
          "duration": "X weeks/months",
          "difficulty": "Beginner | Intermediate | Advanced",
          "type": "Technical | Soft Skills | Certification | Leadership | Industry-Specific",
          "priority": "High | Medium | Low",
          "description": "Brief course description and benefits",
          "estimatedCost": "Free/₹X,XXX"
        }
      ]
    }
  ],
  "summary": {
    "avgSalary": 1200000,
    "peakSalary": 2500000,
    "avgSatisfaction": 4.1,
    "avgWorkLifeBalance": 3.7,
    "avgBurnoutRisk": 2.8,
    "careerProgression": "Senior position title",
    "totalGrowth": "300%"
  },
  "pros": ["advantage1", "advantage2", "advantage3"],
  "cons": ["challenge1", "challenge2", "challenge3"],
  "recommendations": ["advice1", "advice2", "advice3"]
}"#;

const COURSE_GUIDELINES: &str = "\
1. Include 2-4 courses per year based on career stage
2. Mix technical skills, soft skills, and certifications
3. Use real platforms: Coursera, Udemy, edX, LinkedIn Learning, Pluralsight
4. Include Indian institutions: IITs, IIMs, NPTEL, SWAYAM
5. Vary difficulty from Beginner to Advanced as the career progresses
6. Add leadership and management courses in later years
7. Consider cost-effective options including free courses";

pub fn simulation_prompt(request: &SimulationRequest) -> String {
    let seeker = &request.profile;
    let profile = &seeker.profile;
    let preferences =
        serde_json::to_string(&profile.decision_answers).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Generate a comprehensive 10-year career simulation for a {career} role with detailed \
         course recommendations for each year.\n\n\
         {INDIAN_MARKET_INSTRUCTION}\n\n\
         User Profile:\n\
         - Name: {name}\n\
         - Age: {age}\n\
         - Traits: {traits}\n\
         - Skills: {skills}\n\
         - Interests: {interests}\n\
         - Values: Salary importance {salary}%, Work-life balance {work_life}%\n\
         - Preferences: {preferences}\n\n\
         Respond with JSON of exactly this shape, with \"career\" set to \"{career}\" and \
         exactly 10 entries in yearlyProjections:\n\
         {RESPONSE_SHAPE}\n\n\
         Guidelines for course recommendations:\n\
         {COURSE_GUIDELINES}",
        career = request.career,
        name = seeker.name,
        age = seeker.age,
        traits = profile.selected_traits.join(", "),
        skills = profile.skills.join(", "),
        interests = profile.interests.join(", "),
        salary = profile.values.salary_importance(),
        work_life = profile.values.work_life_importance(),
    )
}
