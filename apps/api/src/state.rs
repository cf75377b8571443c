use std::sync::Arc;

use crate::auth::Authenticator;
use crate::llm_client::TextGenerator;
use crate::storage::{CatalogSource, RoadmapArchive};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every external collaborator sits behind a trait object so handlers can be
/// exercised against in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
    pub archive: Arc<dyn RoadmapArchive>,
    pub auth: Arc<dyn Authenticator>,
    pub llm: Arc<dyn TextGenerator>,
}
