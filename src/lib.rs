pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::dotfiles::hide_dotfiles;
use crate::state::{AppState, SharedState};
use crate::store::Store;

/// Prepare the storage layout and build the router. Fails if the
/// directories or the log file cannot be created.
pub fn build_app(config: Config) -> std::io::Result<Router> {
    let store = Store::from_config(&config)?;
    tracing::info!(
        images = %store.images_dir().display(),
        log = %store.csv_path().display(),
        "Storage ready"
    );

    let static_files = ServeDir::new(&config.root_dir);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, store });

    let app = Router::new()
        .merge(routes::ingest_routes())
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn(hide_dotfiles))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
