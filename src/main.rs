//! EnrollHub Server — Course Enrollment Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use enrollhub_cache::EnrollmentCoordinator;
use enrollhub_core::config::AppConfig;
use enrollhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ENROLLHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting EnrollHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = enrollhub_database::connection::create_pool(&config.database).await?;
    enrollhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories and backing store ───────────────────
    let member_repo = Arc::new(
        enrollhub_database::repositories::member::MemberRepository::new(db_pool.clone()),
    );
    let course_repo = Arc::new(
        enrollhub_database::repositories::course::CourseRepository::new(db_pool.clone()),
    );
    let store = Arc::new(enrollhub_database::store::PgEnrollmentStore::new(
        member_repo.as_ref().clone(),
        course_repo.as_ref().clone(),
    ));

    // ── Step 3: Enrollment coordinator ───────────────────────────
    tracing::info!("Initializing enrollment coordinator...");
    let coordinator = Arc::new(EnrollmentCoordinator::new(store));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = enrollhub_api::state::AppState {
        config: Arc::new(config.clone()),
        coordinator,
        member_repo,
        course_repo,
    };

    let app = enrollhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("EnrollHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("EnrollHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
