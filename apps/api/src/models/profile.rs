use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Education levels shared by profiles, courses and schools.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    Creche,
    Primary,
    Jhs,
    Shs,
    Tertiary,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Creche => "creche",
            EducationLevel::Primary => "primary",
            EducationLevel::Jhs => "jhs",
            EducationLevel::Shs => "shs",
            EducationLevel::Tertiary => "tertiary",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user's profile as maintained by the auth/profile service.
///
/// Read-only here. Clients send the whole profile row, so unknown columns
/// (email, names, role, timestamps) are ignored on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub current_education_level: Option<EducationLevel>,
    #[serde(default)]
    pub career_interests: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_location: Option<String>,
    #[serde(default)]
    pub preferred_country: Option<String>,
    #[serde(default)]
    pub onboarding_completed: bool,
}
