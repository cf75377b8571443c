//! The course match form and the session that submits it.
//!
//! A submit is ignored while another one is in flight. Dispatch failures are
//! logged and otherwise invisible: the previous roadmap (if any) stays on screen.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::client::dispatcher::RoadmapDispatcher;
use crate::models::profile::UserProfile;
use crate::roadmap::models::{RoadmapPreferences, RoadmapResult};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Timeline {
    #[serde(rename = "1 year")]
    OneYear,
    #[default]
    #[serde(rename = "2-3 years")]
    TwoToThreeYears,
    #[serde(rename = "3-5 years")]
    ThreeToFiveYears,
    #[serde(rename = "5+ years")]
    FivePlusYears,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::OneYear => "1 year",
            Timeline::TwoToThreeYears => "2-3 years",
            Timeline::ThreeToFiveYears => "3-5 years",
            Timeline::FivePlusYears => "5+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LearningStyle {
    Online,
    InPerson,
    #[default]
    Mixed,
    SelfPaced,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Online => "online",
            LearningStyle::InPerson => "in-person",
            LearningStyle::Mixed => "mixed",
            LearningStyle::SelfPaced => "self-paced",
        }
    }
}

/// Budget ranges in Ghana cedis: low < 5,000; moderate 5,000 - 20,000; high 20,000+.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Moderate,
    High,
    Flexible,
}

impl Budget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Moderate => "moderate",
            Budget::High => "high",
            Budget::Flexible => "flexible",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapForm {
    pub target_career: String,
    pub timeline: Timeline,
    pub learning_style: LearningStyle,
    pub budget: Budget,
    pub availability: String,
}

impl Default for RoadmapForm {
    fn default() -> Self {
        Self {
            target_career: String::new(),
            timeline: Timeline::default(),
            learning_style: LearningStyle::default(),
            budget: Budget::default(),
            availability: "part-time".to_string(),
        }
    }
}

impl RoadmapForm {
    pub fn to_preferences(&self) -> RoadmapPreferences {
        RoadmapPreferences {
            target_career: Some(self.target_career.clone()),
            timeline: Some(self.timeline.as_str().to_string()),
            learning_style: Some(self.learning_style.as_str().to_string()),
            budget: Some(self.budget.as_str().to_string()),
            availability: Some(self.availability.clone()),
        }
    }
}

/// A signed-in user as seen by the client.
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub access_token: String,
    pub user: AuthUser,
    /// Absent until onboarding has created the profile row.
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectorView {
    SignInRequired,
    Form {
        defaults: RoadmapForm,
        /// Submit control is disabled while true.
        generating: bool,
        roadmap: Option<RoadmapResult>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignInRequired,
    AlreadyGenerating,
    Generated,
    /// Logged only; nothing changes on screen.
    Failed,
}

/// Clears the generating flag on every exit path of a submit.
struct GeneratingGuard<'a>(&'a AtomicBool);

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct CourseMatchSession {
    session: Option<ClientSession>,
    dispatcher: RoadmapDispatcher,
    generating: AtomicBool,
    roadmap: RwLock<Option<RoadmapResult>>,
}

impl CourseMatchSession {
    pub fn new(session: Option<ClientSession>, dispatcher: RoadmapDispatcher) -> Self {
        Self {
            session,
            dispatcher,
            generating: AtomicBool::new(false),
            roadmap: RwLock::new(None),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    pub async fn roadmap(&self) -> Option<RoadmapResult> {
        self.roadmap.read().await.clone()
    }

    pub async fn view(&self) -> CollectorView {
        match self.signed_in() {
            None => CollectorView::SignInRequired,
            Some(_) => CollectorView::Form {
                defaults: RoadmapForm::default(),
                generating: self.is_generating(),
                roadmap: self.roadmap().await,
            },
        }
    }

    pub async fn submit(&self, form: &RoadmapForm) -> SubmitOutcome {
        let Some((session, profile)) = self.signed_in() else {
            return SubmitOutcome::SignInRequired;
        };

        if self.generating.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::AlreadyGenerating;
        }
        let _guard = GeneratingGuard(&self.generating);

        match self
            .dispatcher
            .generate(&session.access_token, profile, &form.to_preferences())
            .await
        {
            Ok(roadmap) => {
                info!("Roadmap generated for user {}", session.user.id);
                *self.roadmap.write().await = Some(roadmap);
                SubmitOutcome::Generated
            }
            Err(e) => {
                error!("Error generating roadmap: {e}");
                SubmitOutcome::Failed
            }
        }
    }

    fn signed_in(&self) -> Option<(&ClientSession, &UserProfile)> {
        let session = self.session.as_ref()?;
        Some((session, session.profile.as_ref()?))
    }
}
