use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for the listing page and its page-data API.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(products::listing_page))
        .nest("/api/products", products::api_router())
}
