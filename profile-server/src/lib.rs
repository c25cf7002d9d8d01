//! Profile server: REST CRUD over a single SQLite-backed `profiles` table.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub use state::AppState;

/// Configure the five profile routes
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/profiles", get(api::list_profiles))
        .route("/profile", post(api::create_profile))
        .route(
            "/profile/{id}",
            get(api::get_profile)
                .put(api::update_profile)
                .delete(api::delete_profile),
        )
        .with_state(state)
}

/// CORS for the app's origins. An empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{origin}': {e}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600)))
}
