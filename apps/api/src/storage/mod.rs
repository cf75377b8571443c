//! Storage seam over the hosted backend's tables.
//!
//! `AppState` holds `Arc<dyn CatalogSource>` and `Arc<dyn RoadmapArchive>`;
//! production wires both to `PgStore`, tests wire in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::models::catalog::{CourseRow, SchoolRow};
use crate::models::mentorship::MentorshipRequestRow;

pub mod postgres;

pub use postgres::PgStore;

/// Read access to the course and school reference data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All courses, ordered by name.
    async fn list_courses(&self) -> anyhow::Result<Vec<CourseRow>>;

    /// All schools with their region name, highest rated first.
    async fn list_schools(&self) -> anyhow::Result<Vec<SchoolRow>>;
}

/// Append-only history of generated roadmaps.
#[async_trait]
pub trait RoadmapArchive: Send + Sync {
    /// Inserts one completed `career_roadmap` request holding the serialized roadmap.
    async fn record_roadmap(&self, user_id: Uuid, roadmap: &Value) -> anyhow::Result<Uuid>;

    /// The user's saved roadmaps, newest first.
    async fn list_roadmaps(&self, user_id: Uuid) -> anyhow::Result<Vec<MentorshipRequestRow>>;

    async fn find_roadmap(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> anyhow::Result<Option<MentorshipRequestRow>>;
}
