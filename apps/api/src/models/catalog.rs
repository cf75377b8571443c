use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row of the `courses` table. Enum columns are read as text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub education_level: String,
    pub career_prospects: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the `schools` table joined with its region name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SchoolRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub school_type: String,
    pub education_levels: Vec<String>,
    pub curriculum_types: Vec<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub region_id: Option<Uuid>,
    pub region_name: Option<String>,
    pub rating: Option<f64>,
    pub total_reviews: Option<i32>,
    pub student_population: Option<i32>,
    pub teacher_student_ratio: Option<String>,
    pub established_year: Option<i32>,
    pub facilities: Option<Vec<String>>,
    pub extracurricular_activities: Option<Vec<String>>,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub featured: Option<bool>,
    pub verified: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
