use axum::{
    routing::{get, post},
    Router,
};
use gazetteer_core::{Embedder, LookupService, MiniLmEmbedder};
use gazetteer_server::config::ServerConfig;
use gazetteer_server::handlers;
use gazetteer_server::state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gazetteer_server=info".parse().unwrap())
                .add_directive("gazetteer_core=info".parse().unwrap()),
        )
        .init();

    info!("Initializing Gazetteer server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    info!(data_path = ?config.data_path, cache_dir = ?config.cache_dir, "Configuration loaded");

    // One-shot initialization: a failure degrades the process instead of
    // killing it, so /health stays reachable and the search routes answer
    // 503 until a restart succeeds.
    let app_state = init_state(&config);

    // Define API routes
    let app = Router::new()
        .route("/", get(handlers::index_page))
        .route("/search", post(handlers::search_city))
        .route("/search_multiple", post(handlers::search_multiple))
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(TraceLayer::new_for_http()) // Log requests/responses
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .with_state(app_state); // Provide shared state to handlers

    let addr = config.addr();
    info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

/// Loads the dataset, the embedding model, and builds the lookup service.
/// Any failure yields the degraded (unready) state.
fn init_state(config: &ServerConfig) -> AppState {
    let records = match gazetteer_core::load_records(&config.data_path) {
        Ok(records) => records,
        Err(e) => {
            error!(path = ?config.data_path, error = %e, "Failed to load city dataset; serving degraded");
            return AppState::unready();
        }
    };

    let embedder: Box<dyn Embedder> = match MiniLmEmbedder::load(&config.cache_dir) {
        Ok(embedder) => Box::new(embedder),
        Err(e) => {
            error!(error = %e, "Failed to load embedding model; serving degraded");
            return AppState::unready();
        }
    };

    match LookupService::build(embedder, records) {
        Ok(service) => {
            info!(total_cities = service.len(), "Lookup service initialized");
            AppState::ready(service)
        }
        Err(e) => {
            error!(error = %e, "Failed to build lookup service; serving degraded");
            AppState::unready()
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>(); // On non-Unix, just wait for Ctrl+C

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down...");
        },
    }
}
