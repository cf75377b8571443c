//! Roadmap Renderer: turns a possibly partial `RoadmapResult` into display sections.
//!
//! Pure and total: absent fields drop their section (or line), never panic.
//! Phases, courses and schools keep the order the model produced.

use std::fmt;

use serde::Serialize;

use crate::roadmap::models::{
    CareerOutlook, CourseRecommendation, RoadmapPhase, RoadmapResult, SchoolRecommendation,
};

pub const DEFAULT_TITLE: &str = "Your Career Roadmap";

/// Visual treatment for a course recommendation's priority.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityBadge {
    High,
    Medium,
    Low,
}

impl PriorityBadge {
    /// Exact match only: anything other than "high" or "medium" (including
    /// nothing, or "High") gets the low treatment.
    pub fn from_priority(priority: Option<&str>) -> Self {
        match priority {
            Some("high") => PriorityBadge::High,
            Some("medium") => PriorityBadge::Medium,
            _ => PriorityBadge::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhaseView {
    pub name: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub milestones: Vec<String>,
    pub skills: Vec<String>,
    pub recommended_courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseCard {
    pub name: Option<String>,
    pub reason: Option<String>,
    pub timing: Option<String>,
    /// The model's priority text, shown as-is next to the badge.
    pub priority_label: Option<String>,
    pub badge: PriorityBadge,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchoolCard {
    pub name: Option<String>,
    pub reason: Option<String>,
    /// Programs joined with ", ".
    pub programs: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutlookView {
    pub job_market: Option<String>,
    pub salary_range: Option<String>,
    pub growth: Option<String>,
}

/// Everything the roadmap page shows. `None` sections are not rendered at all.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoadmapView {
    pub title: String,
    pub overview: Option<String>,
    pub phases: Option<Vec<PhaseView>>,
    pub courses: Option<Vec<CourseCard>>,
    pub schools: Option<Vec<SchoolCard>>,
    pub outlook: Option<OutlookView>,
    pub next_steps: Option<Vec<String>>,
}

pub fn render_roadmap(result: &RoadmapResult) -> RoadmapView {
    let career = result.career_roadmap.as_ref();

    RoadmapView {
        title: career
            .and_then(|c| c.title.clone())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        overview: career.and_then(|c| c.overview.clone()),
        phases: career
            .and_then(|c| c.phases.as_ref())
            .map(|phases| phases.iter().map(render_phase).collect()),
        courses: result
            .course_recommendations
            .as_ref()
            .map(|courses| courses.iter().map(render_course).collect()),
        schools: result
            .school_recommendations
            .as_ref()
            .map(|schools| schools.iter().map(render_school).collect()),
        outlook: result.career_outlook.as_ref().map(render_outlook),
        next_steps: result.next_steps.clone(),
    }
}

fn render_phase(phase: &RoadmapPhase) -> PhaseView {
    PhaseView {
        name: phase.phase.clone(),
        duration: phase.duration.clone(),
        description: phase.description.clone(),
        milestones: phase.milestones.clone().unwrap_or_default(),
        skills: phase.skills.clone().unwrap_or_default(),
        recommended_courses: phase.recommended_courses.clone().unwrap_or_default(),
    }
}

fn render_course(course: &CourseRecommendation) -> CourseCard {
    CourseCard {
        name: course.course_name.clone(),
        reason: course.reason.clone(),
        timing: course.timing.clone(),
        priority_label: course.priority.clone(),
        badge: PriorityBadge::from_priority(course.priority.as_deref()),
    }
}

fn render_school(school: &SchoolRecommendation) -> SchoolCard {
    SchoolCard {
        name: school.school_name.clone(),
        reason: school.reason.clone(),
        programs: school.programs.as_ref().map(|p| p.join(", ")),
    }
}

fn render_outlook(outlook: &CareerOutlook) -> OutlookView {
    OutlookView {
        job_market: outlook.job_market.clone(),
        salary_range: outlook.salary_range.clone(),
        growth: outlook.growth.clone(),
    }
}

impl RoadmapView {
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RoadmapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        if let Some(overview) = &self.overview {
            writeln!(f, "\n{overview}")?;
        }

        if let Some(phases) = &self.phases {
            for phase in phases {
                write!(f, "\n## {}", phase.name.as_deref().unwrap_or("Phase"))?;
                match &phase.duration {
                    Some(duration) => writeln!(f, " ({duration})")?,
                    None => writeln!(f)?,
                }
                if let Some(description) = &phase.description {
                    writeln!(f, "\n{description}")?;
                }
                write_list(f, "Milestones", &phase.milestones)?;
                write_list(f, "Skills to Develop", &phase.skills)?;
                write_list(f, "Recommended Courses", &phase.recommended_courses)?;
            }
        }

        if let Some(courses) = &self.courses {
            writeln!(f, "\n## Course Recommendations\n")?;
            for course in courses {
                write!(f, "- **{}**", course.name.as_deref().unwrap_or("Course"))?;
                if let Some(label) = &course.priority_label {
                    write!(f, " [{label} priority]")?;
                }
                if let Some(reason) = &course.reason {
                    write!(f, ": {reason}")?;
                }
                if let Some(timing) = &course.timing {
                    write!(f, " Best time: {timing}")?;
                }
                writeln!(f)?;
            }
        }

        if let Some(schools) = &self.schools {
            writeln!(f, "\n## School Recommendations\n")?;
            for school in schools {
                write!(f, "- **{}**", school.name.as_deref().unwrap_or("School"))?;
                if let Some(reason) = &school.reason {
                    write!(f, ": {reason}")?;
                }
                if let Some(programs) = &school.programs {
                    write!(f, " Programs: {programs}")?;
                }
                writeln!(f)?;
            }
        }

        if let Some(outlook) = &self.outlook {
            writeln!(f, "\n## Career Outlook\n")?;
            for (label, value) in [
                ("Job Market", &outlook.job_market),
                ("Salary Range", &outlook.salary_range),
                ("Growth Potential", &outlook.growth),
            ] {
                if let Some(value) = value {
                    writeln!(f, "- {label}: {value}")?;
                }
            }
        }

        if let Some(steps) = &self.next_steps {
            writeln!(f, "\n## Next Steps\n")?;
            for (i, step) in steps.iter().enumerate() {
                writeln!(f, "{}. {step}", i + 1)?;
            }
        }

        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n{heading}:")?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    Ok(())
}
