//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::source::ProductSource;

pub mod errors;
pub mod routes;

/// Catalog handle shared by every handler.
pub type SharedSource = Arc<dyn ProductSource>;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(source: SharedSource) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(source)),
        )
}
