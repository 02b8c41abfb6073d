use std::future::Future;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), apply env overrides and validate.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Router over the given state with the production middleware stack.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    run_with_listener(cfg, listener, shutdown).await
}

/// Open the store, serve on `listener` until `shutdown`, then close the store.
pub async fn run_with_listener<F>(cfg: AppConfig, listener: TcpListener, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    common::env::ensure_data_dir(cfg.database.sqlite_file().as_deref()).await?;
    let db = models::db::open(&cfg.database)
        .await
        .map_err(|e| StartupError::Store(e.to_string()))?;

    let app = build_app(ServerState::from_db(db.clone()));

    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(service = "server", event = "listening", %addr, "bus tracker listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(anyhow::Error::from)?;

    info!(service = "server", event = "store_close", "http server stopped; closing location store");
    db.close().await.map_err(|e| StartupError::Store(e.to_string()))?;
    Ok(())
}
