//! Career roadmap generation pipeline.
//!
//! Flow: authenticate, catalog snapshot, build prompt, LLM generate,
//!       extract JSON (or fall back), record in history, return.
//!
//! Terminal failures: unauthorized, catalog read, upstream/empty generation.
//! Non-terminal: malformed model output (degrades to `fallback_roadmap`) and
//! history write failures (logged only).

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::auth::{AuthUser, Authenticator};
use crate::errors::RoadmapError;
use crate::models::catalog::{CourseRow, SchoolRow};
use crate::models::profile::UserProfile;
use crate::roadmap::extract::extract;
use crate::roadmap::models::{GenerateRoadmapRequest, RoadmapPreferences};
use crate::roadmap::prompts::{
    fill_template, DEFAULT_LEARNING_STYLE, DEFAULT_TIMELINE, NOT_SPECIFIED,
    ROADMAP_PROMPT_TEMPLATE,
};
use crate::state::AppState;

/// Courses and schools embedded in each prompt, whatever the catalog size.
pub const CATALOG_SAMPLE_SIZE: usize = 10;

/// Outcome of one generation. Both variants are returned to the caller as a
/// success; the distinction exists for logs.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// The model's JSON, untouched.
    Clean(Value),
    /// The model's text could not be parsed; carries `fallback_roadmap()`.
    Degraded(Value),
}

impl Generation {
    pub fn value(&self) -> &Value {
        match self {
            Generation::Clean(v) | Generation::Degraded(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Generation::Clean(v) | Generation::Degraded(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Generation::Degraded(_))
    }
}

/// The fixed roadmap substituted when model output cannot be parsed.
pub fn fallback_roadmap() -> Value {
    json!({
        "careerRoadmap": {
            "title": "Personalized Career Path",
            "overview": "AI-generated career guidance based on your profile",
            "phases": []
        },
        "courseRecommendations": [],
        "schoolRecommendations": [],
        "careerOutlook": {
            "jobMarket": "Analysis in progress",
            "salaryRange": "Contact counselor for details",
            "growth": "Promising opportunities ahead"
        },
        "nextSteps": ["Complete your profile", "Explore recommended courses"]
    })
}

/// Resolves the bearer token to a user. No token, or a token the auth service
/// rejects, is `Unauthorized`.
pub async fn authenticate(
    auth: &dyn Authenticator,
    token: Option<&str>,
) -> Result<AuthUser, RoadmapError> {
    let token = token.ok_or(RoadmapError::Unauthorized)?;
    auth.resolve(token).await?.ok_or(RoadmapError::Unauthorized)
}

/// Runs the generation pipeline for an authenticated user.
///
/// Steps:
/// 1. read courses and schools (concurrently, fresh each call)
/// 2. build_prompt() with the first CATALOG_SAMPLE_SIZE of each
/// 3. one model call
/// 4. extract() the JSON payload, or substitute fallback_roadmap()
/// 5. record the result in the roadmap history (failure is logged, not returned)
pub async fn generate_roadmap(
    state: &AppState,
    user: &AuthUser,
    request: &GenerateRoadmapRequest,
) -> Result<Generation, RoadmapError> {
    // Step 1: Catalog snapshot
    let (courses, schools) = tokio::try_join!(
        state.catalog.list_courses(),
        state.catalog.list_schools()
    )
    .map_err(RoadmapError::Catalog)?;
    info!(
        "Catalog snapshot for user {}: {} courses, {} schools",
        user.id,
        courses.len(),
        schools.len()
    );

    // Step 2: Prompt
    let prompt = build_prompt(
        &request.profile_data,
        &request.preferences,
        &courses,
        &schools,
    )?;

    // Step 3: Generate
    let text = state.llm.generate(&prompt).await.map_err(|e| {
        error!("Roadmap generation failed for user {}: {e}", user.id);
        RoadmapError::from(e)
    })?;

    // Step 4: Extract
    let generation = match extract(&text) {
        Ok(value) => Generation::Clean(value),
        Err(e) => {
            warn!(
                "Degraded roadmap for user {}: {e}; model output began {:?}",
                user.id,
                text.chars().take(80).collect::<String>()
            );
            Generation::Degraded(fallback_roadmap())
        }
    };

    // Step 5: Record
    match state.archive.record_roadmap(user.id, generation.value()).await {
        Ok(id) => info!(
            "Stored roadmap {id} for user {} (outcome: {})",
            user.id,
            if generation.is_degraded() { "degraded" } else { "clean" }
        ),
        Err(e) => error!("Error storing roadmap for user {}: {e:?}", user.id),
    }

    Ok(generation)
}

/// Builds the generation prompt from the profile, the form preferences and a
/// bounded sample of the catalog.
pub fn build_prompt(
    profile: &UserProfile,
    preferences: &RoadmapPreferences,
    courses: &[CourseRow],
    schools: &[SchoolRow],
) -> Result<String, RoadmapError> {
    let education_level = profile
        .current_education_level
        .map(|level| level.as_str())
        .unwrap_or(NOT_SPECIFIED);

    let interests = profile
        .career_interests
        .as_deref()
        .map(|interests| interests.join(", "))
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let courses_json = sample_json(courses)?;
    let schools_json = sample_json(schools)?;

    Ok(fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("education_level", education_level),
            ("career_interests", interests.as_str()),
            ("preferred_location", or_default(&profile.preferred_location, NOT_SPECIFIED)),
            ("preferred_country", or_default(&profile.preferred_country, NOT_SPECIFIED)),
            ("target_career", or_default(&preferences.target_career, NOT_SPECIFIED)),
            ("timeline", or_default(&preferences.timeline, DEFAULT_TIMELINE)),
            ("learning_style", or_default(&preferences.learning_style, DEFAULT_LEARNING_STYLE)),
            ("budget", or_default(&preferences.budget, NOT_SPECIFIED)),
            ("availability", or_default(&preferences.availability, NOT_SPECIFIED)),
            ("courses_json", courses_json.as_str()),
            ("schools_json", schools_json.as_str()),
        ],
    ))
}

/// Blank strings count as missing, matching what the form sends for untouched fields.
fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

fn sample_json<T: Serialize>(rows: &[T]) -> Result<String, RoadmapError> {
    let sample = &rows[..rows.len().min(CATALOG_SAMPLE_SIZE)];
    serde_json::to_string(sample)
        .map_err(|e| RoadmapError::Internal(format!("Failed to serialize catalog: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
