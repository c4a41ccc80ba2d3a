pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use quiz_core::{Extractor, QuizPrompt};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub prompt: QuizPrompt,
}

impl AppState {
    pub fn from_config(config: &Config) -> quiz_core::Result<Self> {
        Ok(Self {
            extractor: Arc::new(config.extractor()?),
            prompt: config.prompt(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            extractor: Arc::new(Extractor::default()),
            prompt: QuizPrompt::default(),
        }
    }
}

/// Build the API router without transport layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/quiz/parse", post(routes::quiz::parse))
        .route("/api/quiz/tidy", post(routes::quiz::tidy))
        .route("/api/quiz/prompt", post(routes::quiz::prompt))
        .route("/api/quiz/grade", post(routes::quiz::grade))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;

    tracing::info!(
        "Loaded {} noise rules, prompts request {} questions",
        state.extractor.noise_filter().patterns().count(),
        state.prompt.question_count
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
