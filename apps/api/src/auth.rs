//! Bearer credential resolution against the hosted auth service.

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The identity behind a valid access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Auth service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Auth service returned status {0}")]
    Status(u16),
}

/// Resolves an access token to a user. `Ok(None)` means the token is not valid.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<AuthUser>, AuthError>;
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Supabase GoTrue `/auth/v1/user` lookup.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        }
    }
}

#[async_trait]
impl Authenticator for SupabaseAuth {
    async fn resolve(&self, token: &str) -> Result<Option<AuthUser>, AuthError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<AuthUser>().await?)),
            status => Err(AuthError::Status(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_bearer_token_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes_and_blanks() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_resolve_valid_token() {
        let server = MockServer::start().await;
        let user_id = Uuid::new_v4();
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", "anon"))
            .and(header("authorization", "Bearer good-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": user_id,
                "email": "kofi@example.com",
                "aud": "authenticated"
            })))
            .mount(&server)
            .await;

        let auth = SupabaseAuth::new(&format!("{}/", server.uri()), "anon".to_string());
        let user = auth.resolve("good-token").await.unwrap().unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email.as_deref(), Some("kofi@example.com"));
    }

    #[tokio::test]
    async fn test_resolve_rejected_token_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "invalid JWT"})))
            .mount(&server)
            .await;

        let auth = SupabaseAuth::new(&server.uri(), "anon".to_string());
        assert!(auth.resolve("expired").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_server_error_is_err() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let auth = SupabaseAuth::new(&server.uri(), "anon".to_string());
        assert!(matches!(
            auth.resolve("token").await,
            Err(AuthError::Status(502))
        ));
    }
}
