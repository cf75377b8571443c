use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request type tag for AI-generated roadmaps in `mentorship_requests`.
pub const ROADMAP_REQUEST_TYPE: &str = "career_roadmap";
pub const ROADMAP_REQUEST_SUBJECT: &str = "AI Generated Career Roadmap";
pub const ROADMAP_REQUEST_STATUS: &str = "completed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorshipRequestRow {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub request_type: String,
    pub subject: String,
    /// Serialized roadmap JSON for `career_roadmap` rows.
    pub message: String,
    pub status: String,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
