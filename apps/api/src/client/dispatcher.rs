use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::profile::UserProfile;
use crate::roadmap::models::{RoadmapPreferences, RoadmapResult};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Roadmap function failed (status {status}): {message}")]
    Function { status: u16, message: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DispatchBody<'a> {
    profile_data: &'a UserProfile,
    preferences: &'a RoadmapPreferences,
}

#[derive(Debug, Deserialize)]
struct FunctionError {
    error: String,
}

/// Sends one roadmap request per call to the generation function.
#[derive(Clone)]
pub struct RoadmapDispatcher {
    client: Client,
    function_url: String,
    anon_key: String,
}

impl RoadmapDispatcher {
    pub fn new(function_url: String, anon_key: String) -> Self {
        Self {
            client: Client::new(),
            function_url,
            anon_key,
        }
    }

    /// POSTs `{ profileData, preferences }` with the caller's access token.
    pub async fn generate(
        &self,
        access_token: &str,
        profile: &UserProfile,
        preferences: &RoadmapPreferences,
    ) -> Result<RoadmapResult, DispatchError> {
        let response = self
            .client
            .post(&self.function_url)
            .bearer_auth(access_token)
            .header("apikey", &self.anon_key)
            .json(&DispatchBody {
                profile_data: profile,
                preferences,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FunctionError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(DispatchError::Function {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value = response.json().await?;
        debug!(
            "Roadmap function returned {} top-level keys",
            value.as_object().map_or(0, |o| o.len())
        );
        Ok(RoadmapResult::from_value_lossy(&value))
    }
}
