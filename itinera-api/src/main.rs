use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use itinera_api::{app, AppState};
use itinera_store::{Config, DbClient, PgCustomerDirectory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itinera_api=debug,itinera_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Itinera API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url(), config.database.max_connections)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let state = AppState {
        directory: Arc::new(PgCustomerDirectory::new(db.pool.clone())),
    };

    let cors_origin = config
        .server
        .cors_origin
        .parse::<HeaderValue>()
        .expect("Invalid CORS origin");
    let app = app(state, cors_origin, &config.server.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
