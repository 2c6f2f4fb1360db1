use crate::config::PlanetConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use axum::{
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: PlanetConfig,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: PlanetConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb).await.map_err(|e| {
            tracing::error!("Failed to configure MongoDB client: {}", e);
            e
        })?;

        // An unreachable store must not hold up startup; the client connects
        // lazily, so connectivity is probed and logged in the background.
        let probe = db.clone();
        tokio::spawn(async move {
            match probe.health_check().await {
                Ok(()) => tracing::info!("MongoDB connected successfully"),
                Err(e) => tracing::error!("MongoDB connection error: {}", e),
            }
        });

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        let app = Router::new()
            .route("/planet", post(handlers::lookup_planet))
            .route("/api-docs", get(handlers::api_docs))
            .route("/os", get(handlers::host_info))
            .route("/live", get(handlers::liveness))
            .route("/ready", get(handlers::readiness))
            .fallback_service(ServeDir::new(&config.content.static_root))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server successfully running on port - {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
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
