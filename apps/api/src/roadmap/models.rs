//! Wire types for roadmap generation.
//!
//! `RoadmapResult` mirrors the JSON shape the model is asked to produce. Every
//! field is optional and deserialized leniently: a field of the wrong JSON type
//! is treated as absent instead of failing the whole document, and a list keeps
//! whichever of its elements are well formed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::profile::UserProfile;

/// Free-form preferences from the course match form. Never persisted on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPreferences {
    #[serde(default)]
    pub target_career: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Body of `POST /functions/v1/generate-career-roadmap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapRequest {
    pub profile_data: UserProfile,
    #[serde(default)]
    pub preferences: RoadmapPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResult {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub career_roadmap: Option<CareerRoadmap>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub course_recommendations: Option<Vec<CourseRecommendation>>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub school_recommendations: Option<Vec<SchoolRecommendation>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub career_outlook: Option<CareerOutlook>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerRoadmap {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<RoadmapPhase>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub recommended_courses: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Expected "high" | "medium" | "low"; kept raw because the model may say anything.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecommendation {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Option::is_none")]
    pub programs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareerOutlook {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub job_market: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
}

impl RoadmapResult {
    /// Reads any JSON value as a roadmap. Non-object values yield an empty roadmap.
    pub fn from_value_lossy(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Non-arrays are absent; inside an array, malformed elements are dropped.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}
