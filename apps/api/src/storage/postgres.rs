use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::catalog::{CourseRow, SchoolRow};
use crate::models::mentorship::{
    MentorshipRequestRow, ROADMAP_REQUEST_STATUS, ROADMAP_REQUEST_SUBJECT, ROADMAP_REQUEST_TYPE,
};
use crate::storage::{CatalogSource, RoadmapArchive};

const COURSES_QUERY: &str = r#"
    SELECT id, name, description, duration,
           education_level::text AS education_level,
           career_prospects, requirements, created_at, updated_at
    FROM courses
    ORDER BY name
"#;

const SCHOOLS_QUERY: &str = r#"
    SELECT s.id, s.name, s.slug, s.description,
           s.school_type::text AS school_type,
           s.education_levels::text[] AS education_levels,
           s.curriculum_types::text[] AS curriculum_types,
           s.city, s.address, s.region_id,
           r.name AS region_name,
           s.rating::float8 AS rating,
           s.total_reviews::int4 AS total_reviews,
           s.student_population::int4 AS student_population,
           s.teacher_student_ratio,
           s.established_year::int4 AS established_year,
           s.facilities, s.extracurricular_activities,
           s.website, s.email, s.phone, s.logo_url, s.cover_image_url,
           s.featured, s.verified, s.created_at, s.updated_at
    FROM schools s
    LEFT JOIN regions r ON r.id = s.region_id
    ORDER BY s.rating DESC NULLS LAST
"#;

/// Postgres-backed implementation of every storage trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool against the hosted backend's database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to PostgreSQL")?;

        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl CatalogSource for PgStore {
    async fn list_courses(&self) -> Result<Vec<CourseRow>> {
        sqlx::query_as::<_, CourseRow>(COURSES_QUERY)
            .fetch_all(&self.pool)
            .await
            .context("Failed to read courses")
    }

    async fn list_schools(&self) -> Result<Vec<SchoolRow>> {
        sqlx::query_as::<_, SchoolRow>(SCHOOLS_QUERY)
            .fetch_all(&self.pool)
            .await
            .context("Failed to read schools")
    }
}

#[async_trait]
impl RoadmapArchive for PgStore {
    async fn record_roadmap(&self, user_id: Uuid, roadmap: &Value) -> Result<Uuid> {
        let message = serde_json::to_string(roadmap).context("Failed to serialize roadmap")?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO mentorship_requests (user_id, type, subject, message, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(ROADMAP_REQUEST_TYPE)
        .bind(ROADMAP_REQUEST_SUBJECT)
        .bind(message)
        .bind(ROADMAP_REQUEST_STATUS)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert mentorship request")?;

        Ok(id)
    }

    async fn list_roadmaps(&self, user_id: Uuid) -> Result<Vec<MentorshipRequestRow>> {
        sqlx::query_as::<_, MentorshipRequestRow>(
            r#"
            SELECT * FROM mentorship_requests
            WHERE user_id = $1 AND type = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(ROADMAP_REQUEST_TYPE)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list roadmaps")
    }

    async fn find_roadmap(&self, user_id: Uuid, id: Uuid) -> Result<Option<MentorshipRequestRow>> {
        sqlx::query_as::<_, MentorshipRequestRow>(
            "SELECT * FROM mentorship_requests WHERE id = $1 AND user_id = $2 AND type = $3",
        )
        .bind(id)
        .bind(user_id)
        .bind(ROADMAP_REQUEST_TYPE)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load roadmap")
    }
}
