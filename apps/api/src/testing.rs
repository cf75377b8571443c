//! In-memory fakes for every `AppState` collaborator, with call counters.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::{AuthError, AuthUser, Authenticator};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::catalog::{CourseRow, SchoolRow};
use crate::models::mentorship::{
    MentorshipRequestRow, ROADMAP_REQUEST_STATUS, ROADMAP_REQUEST_SUBJECT, ROADMAP_REQUEST_TYPE,
};
use crate::state::AppState;
use crate::storage::{CatalogSource, RoadmapArchive};

pub const VALID_TOKEN: &str = "valid-access-token";

pub fn course(name: &str) -> CourseRow {
    CourseRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: Some(format!("Study of {name}")),
        duration: Some("4 years".to_string()),
        education_level: "tertiary".to_string(),
        career_prospects: Some(vec!["Industry".to_string()]),
        requirements: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn school(name: &str, rating: f64) -> SchoolRow {
    SchoolRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: None,
        school_type: "public".to_string(),
        education_levels: vec!["shs".to_string()],
        curriculum_types: vec!["ghanaian".to_string()],
        city: Some("Kumasi".to_string()),
        address: None,
        region_id: None,
        region_name: Some("Ashanti".to_string()),
        rating: Some(rating),
        total_reviews: Some(12),
        student_population: None,
        teacher_student_ratio: None,
        established_year: Some(1952),
        facilities: None,
        extracurricular_activities: None,
        website: None,
        email: None,
        phone: None,
        logo_url: None,
        cover_image_url: None,
        featured: Some(false),
        verified: Some(true),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pub courses: Vec<CourseRow>,
    pub schools: Vec<SchoolRow>,
    reads: AtomicUsize,
    fail: AtomicBool,
}

impl FakeCatalog {
    pub fn new(courses: Vec<CourseRow>, schools: Vec<SchoolRow>) -> Self {
        Self {
            courses,
            schools,
            ..Default::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn read<T: Clone>(&self, rows: &[T]) -> anyhow::Result<Vec<T>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("connection refused"));
        }
        Ok(rows.to_vec())
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn list_courses(&self) -> anyhow::Result<Vec<CourseRow>> {
        self.read(&self.courses)
    }

    async fn list_schools(&self) -> anyhow::Result<Vec<SchoolRow>> {
        self.read(&self.schools)
    }
}

#[derive(Default)]
pub struct FakeArchive {
    rows: Mutex<Vec<MentorshipRequestRow>>,
    fail: AtomicBool,
}

impl FakeArchive {
    pub fn fail_writes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// `(user_id, roadmap)` for every stored row, oldest first.
    pub fn recorded(&self) -> Vec<(Uuid, Value)> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| (row.user_id, serde_json::from_str(&row.message).unwrap()))
            .collect()
    }

    /// Inserts a row directly, as if written by an earlier generation.
    pub fn insert_raw(&self, user_id: Uuid, message: &str) -> Uuid {
        let mut rows = self.rows.lock().unwrap();
        let created_at = Utc::now() + Duration::seconds(rows.len() as i64);
        let id = Uuid::new_v4();
        rows.push(MentorshipRequestRow {
            id,
            user_id,
            request_type: ROADMAP_REQUEST_TYPE.to_string(),
            subject: ROADMAP_REQUEST_SUBJECT.to_string(),
            message: message.to_string(),
            status: ROADMAP_REQUEST_STATUS.to_string(),
            assigned_to: None,
            created_at,
            updated_at: created_at,
        });
        id
    }
}

#[async_trait]
impl RoadmapArchive for FakeArchive {
    async fn record_roadmap(&self, user_id: Uuid, roadmap: &Value) -> anyhow::Result<Uuid> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("insert violates row-level security policy"));
        }
        Ok(self.insert_raw(user_id, &serde_json::to_string(roadmap)?))
    }

    async fn list_roadmaps(&self, user_id: Uuid) -> anyhow::Result<Vec<MentorshipRequestRow>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_roadmap(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> anyhow::Result<Option<MentorshipRequestRow>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id && row.user_id == user_id)
            .cloned())
    }
}

pub struct FakeAuth {
    user: AuthUser,
    calls: AtomicUsize,
    fail: AtomicBool,
}

impl FakeAuth {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The auth service answers every lookup with a 503.
    pub fn fail_requests(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Authenticator for FakeAuth {
    async fn resolve(&self, token: &str) -> Result<Option<AuthUser>, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AuthError::Status(503));
        }
        Ok((token == VALID_TOKEN).then(|| self.user.clone()))
    }
}

enum FakeReply {
    Text(String),
    Upstream(String),
    Empty,
}

/// A model that replays canned replies. The last reply repeats once the script runs out.
pub struct FakeModel {
    replies: Mutex<VecDeque<FakeReply>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    fn with(replies: Vec<FakeReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(vec![FakeReply::Text(text.to_string())])
    }

    pub fn scripted(texts: Vec<String>) -> Self {
        Self::with(texts.into_iter().map(FakeReply::Text).collect())
    }

    pub fn failing_upstream(message: &str) -> Self {
        Self::with(vec![FakeReply::Upstream(message.to_string())])
    }

    pub fn empty() -> Self {
        Self::with(vec![FakeReply::Empty])
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for FakeModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            None
        };
        match reply.as_ref().or(replies.front()) {
            Some(FakeReply::Text(text)) => Ok(text.clone()),
            Some(FakeReply::Upstream(message)) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
            Some(FakeReply::Empty) | None => Err(LlmError::EmptyContent),
        }
    }
}

/// An `AppState` wired to fakes, with handles kept for assertions.
pub struct TestHarness {
    pub state: AppState,
    pub user: AuthUser,
    pub catalog: Arc<FakeCatalog>,
    pub archive: Arc<FakeArchive>,
    pub auth: Arc<FakeAuth>,
    pub model: Arc<FakeModel>,
}

impl TestHarness {
    pub fn new(model: FakeModel) -> Self {
        Self::with_catalog(
            model,
            FakeCatalog::new(
                vec![course("Computer Science"), course("Nursing")],
                vec![school("Prempeh College", 4.8), school("Wesley Girls", 4.7)],
            ),
        )
    }

    pub fn with_catalog(model: FakeModel, catalog: FakeCatalog) -> Self {
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some("student@example.com".to_string()),
        };
        let catalog = Arc::new(catalog);
        let archive = Arc::new(FakeArchive::default());
        let auth = Arc::new(FakeAuth {
            user: user.clone(),
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
        });
        let model = Arc::new(model);

        let state = AppState {
            catalog: catalog.clone(),
            archive: archive.clone(),
            auth: auth.clone(),
            llm: model.clone(),
        };

        Self {
            state,
            user,
            catalog,
            archive,
            auth,
            model,
        }
    }
}
