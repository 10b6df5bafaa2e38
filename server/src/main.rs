//! Todo List API Server Entry Point

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use todolist_server::config::ServerConfig;
use todolist_server::repository::init_db;
use todolist_server::{routes, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todolist_server=debug,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let db = init_db(&config.db_path)?;
    let state = AppState::new(db, &config.jwt_secret);

    let mut app = routes::router(state).layer(TraceLayer::new_for_http());
    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    tracing::info!(addr = %config.addr, db = %config.db_path.display(), "listening");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
