use anyhow::{Context, Result};

/// Default Gemini endpoint used for roadmap generation.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Not validated: an empty key surfaces as an upstream error from Gemini.
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            supabase_url: require_env("SUPABASE_URL")?,
            supabase_anon_key: require_env("SUPABASE_ANON_KEY")?,
            gemini_api_key: std::env::var("GOOGLE_GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
