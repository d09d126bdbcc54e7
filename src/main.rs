pub mod api;
mod config;
mod ingest;

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::AppState;
use config::Config;

#[derive(OpenApi)]
#[openapi(
    info(title = "KTMB GTFS Ingestion API", version = "0.2.0"),
    paths(api::ingest::trigger_ingest, api::health::health_check),
    components(schemas(
        api::health::HealthResponse,
        ingest::RunReport,
        ingest::load::LoadSummary,
        ingest::load::TableCount,
    )),
    tags(
        (name = "ingest", description = "Feed ingestion trigger"),
        (name = "health", description = "Service health check")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info,sqlx=warn".into()),
        )
        .init();

    // Load config
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    tracing::info!(feed_url = %config.feed_url, "Loaded configuration");

    // Lazy pool: the database only has to be reachable when a run starts,
    // and the run's connection goes back to the pool when it finishes.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.database.connection_url())
        .expect("Invalid database connection URL");

    let client = reqwest::Client::builder()
        .user_agent("ktmb-gtfs-ingest/0.2")
        .build()
        .expect("Failed to build HTTP client");

    let state = AppState {
        pool,
        client,
        feed_url: config.feed_url.clone(),
        last_run: Arc::new(RwLock::new(None)),
    };

    // Build the app
    let app = Router::new()
        .route("/", get(root))
        .nest("/api", api::router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    tracing::info!(addr = %config.bind_addr, "Server running");
    tracing::info!("Swagger UI: /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

async fn root() -> &'static str {
    "KTMB GTFS Ingestion API"
}
