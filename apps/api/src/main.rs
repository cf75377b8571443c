use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coursematch_api::auth::SupabaseAuth;
use coursematch_api::config::Config;
use coursematch_api::llm_client::GeminiClient;
use coursematch_api::routes::build_router;
use coursematch_api::state::AppState;
use coursematch_api::storage::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Course Match API v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(PgStore::connect(&config.database_url).await?);

    let auth = SupabaseAuth::new(&config.supabase_url, config.supabase_anon_key.clone());
    info!("Auth client initialized ({})", config.supabase_url);

    let llm = GeminiClient::new(config.gemini_api_url.clone(), config.gemini_api_key.clone());
    info!("LLM client initialized ({})", config.gemini_api_url);

    let state = AppState {
        catalog: store.clone(),
        archive: store,
        auth: Arc::new(auth),
        llm: Arc::new(llm),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
