use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};

use adopta_core::{DomainError, ProductId};
use adopta_products::{NewProduct, PageData, ProductListing};

use crate::app::{errors, SharedSource};
use crate::views;

pub fn api_router() -> Router {
    Router::new()
        .route("/", get(page_data).post(register_product))
        .route("/:id", get(get_product))
}

/// Rendered listing page.
pub async fn listing_page(Extension(source): Extension<SharedSource>) -> Html<String> {
    let data = PageData::new(source.list());
    let listing = ProductListing::build(data.products());

    let dupes = listing.duplicate_keys();
    if !dupes.is_empty() {
        tracing::warn!(?dupes, "duplicate product ids in listing");
    }
    tracing::debug!(products = listing.product_count(), "rendering product listing");

    Html(views::products::listing_page(&listing).into_string())
}

/// Page data consumed by the listing, as JSON.
pub async fn page_data(Extension(source): Extension<SharedSource>) -> Json<PageData> {
    Json(PageData::new(source.list()))
}

pub async fn get_product(
    Extension(source): Extension<SharedSource>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match source.get(id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn register_product(
    Extension(source): Extension<SharedSource>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return errors::domain_error_to_response(DomainError::validation(
                rejection.body_text(),
            ));
        }
    };

    match source.register(body) {
        Ok(product) => {
            tracing::info!(product_id = %product.id, name = %product.name, "product registered");
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "product registration failed");
            errors::source_error_to_response(e)
        }
    }
}
