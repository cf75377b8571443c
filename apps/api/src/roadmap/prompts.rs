// Prompt text for career roadmap generation.

/// Placeholders: {education_level}, {career_interests}, {preferred_location},
/// {preferred_country}, {target_career}, {timeline}, {learning_style}, {budget},
/// {availability}, {courses_json}, {schools_json}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"As a career counselor and education expert, create a comprehensive career roadmap for a student with the following profile:

Profile:
- Current Education Level: {education_level}
- Career Interests: {career_interests}
- Preferred Location: {preferred_location}
- Preferred Country: {preferred_country}

Additional Preferences:
- Target Career: {target_career}
- Timeline: {timeline}
- Learning Style: {learning_style}
- Budget: {budget}
- Availability: {availability}

Available Courses: {courses_json}
Available Schools: {schools_json}

Please provide a detailed JSON response with the following structure:
{
  "careerRoadmap": {
    "title": "Career title/path",
    "overview": "Brief overview of the career path",
    "phases": [
      {
        "phase": "Phase name",
        "duration": "Time duration",
        "description": "What to focus on",
        "milestones": ["milestone 1", "milestone 2"],
        "recommendedCourses": ["course names"],
        "skills": ["skill 1", "skill 2"]
      }
    ]
  },
  "courseRecommendations": [
    {
      "courseName": "Course name",
      "reason": "Why this course",
      "priority": "high/medium/low",
      "timing": "When to take it"
    }
  ],
  "schoolRecommendations": [
    {
      "schoolName": "School name",
      "reason": "Why this school",
      "programs": ["relevant programs"]
    }
  ],
  "careerOutlook": {
    "jobMarket": "Job market analysis",
    "salaryRange": "Expected salary range",
    "growth": "Career growth potential"
  },
  "nextSteps": ["immediate action 1", "immediate action 2"]
}

Make the recommendations specific, actionable, and aligned with the student's location preferences and current education level."#;

pub const NOT_SPECIFIED: &str = "Not specified";

/// Prompt-side fallbacks. The timeline fallback deliberately differs from the
/// form default ("2-3 years"); the two have never been reconciled.
pub const DEFAULT_TIMELINE: &str = "5 years";
pub const DEFAULT_LEARNING_STYLE: &str = "Mixed";

/// Substitutes `{name}` placeholders in a single pass, so substituted values
/// that themselves contain `{name}` text are never expanded again.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match substitution {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
