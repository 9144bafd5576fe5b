use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use configuration::{Config, InvalidInputPolicy};
use database::{DbRepository, PlanetaryRepository};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod dto;
pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn PlanetaryRepository>,
    pub invalid_input: InvalidInputPolicy,
}

impl AppState {
    pub fn new(repo: Arc<dyn PlanetaryRepository>, invalid_input: InvalidInputPolicy) -> Self {
        Self {
            repo,
            invalid_input,
        }
    }
}

/// Builds the router with every endpoint and the shared middleware.
pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/", get(handlers::hello_world))
        .route("/super_simple", get(handlers::super_simple))
        .route("/not_found", get(handlers::not_found))
        .route("/parameters", get(handlers::parameters))
        .route("/url_variables/:name/:age", get(handlers::url_variables))
        .route("/planets", get(handlers::planets))
        .route("/register", post(handlers::register))
        .fallback(handlers::fallback)
        .with_state(Arc::new(state))
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit_bytes))
}

/// Connects to the database, makes sure the schema exists, and serves until
/// the listener fails.
pub async fn run_server(config: &Config, invalid_input: InvalidInputPolicy) -> anyhow::Result<()> {
    let db_pool = database::connect(
        &config.database.url,
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await?;
    let repo = DbRepository::new(db_pool);
    repo.create_schema().await?;

    let state = AppState::new(Arc::new(repo), invalid_input);
    let app = create_router(state, config.server.body_limit_bytes);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(?invalid_input, "Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
