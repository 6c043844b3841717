use crate::config::TournamentConfig;
use crate::handlers;
use crate::services::chain::ChainProvider;
use crate::services::{MockChainProvider, MongoDb, TournamentService};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post, put},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TournamentConfig,
    pub db: MongoDb,
    pub tournaments: TournamentService,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TournamentConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        // No real provider exists; contract addresses and tx hashes are mocked.
        let chain: Arc<dyn ChainProvider> = Arc::new(MockChainProvider::new(config.chain.clone()));
        tracing::info!(
            rpc_url = %config.chain.rpc_url,
            factory = %config.chain.factory_address,
            "Chain provider running in mock mode"
        );

        let tournaments = TournamentService::new(db.clone(), chain);

        let state = AppState {
            config: config.clone(),
            db,
            tournaments,
        };

        let cors_origin = config
            .http
            .frontend_origin
            .parse::<HeaderValue>()
            .unwrap_or_else(|e| {
                tracing::error!(
                    "Invalid CORS origin '{}': {}. Using fallback.",
                    config.http.frontend_origin,
                    e
                );
                HeaderValue::from_static("*")
            });
        let cors = CorsLayer::new()
            .allow_origin(cors_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/api/sports", get(handlers::list_sports))
            .route(
                "/api/tournaments",
                get(handlers::list_tournaments).post(handlers::create_tournament),
            )
            .route("/api/tournaments/:id", get(handlers::get_tournament))
            .route("/api/tournaments/:id/join", post(handlers::join_tournament))
            .route(
                "/api/tournaments/:id/participants",
                get(handlers::list_participants),
            )
            .route(
                "/api/tournaments/:id/status",
                put(handlers::update_tournament_status),
            )
            .layer(from_fn(metrics_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                },
            ))
            .layer(from_fn(request_id_middleware))
            .layer(cors)
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router: app,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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

    tracing::info!("Shutdown signal received");
}
