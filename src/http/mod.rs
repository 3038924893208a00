//! # HTTP Boundary
//!
//! A thin axum layer over [`ProductClient`]. Handlers parse and validate input, call one
//! client method and shape the reply; the store itself never sees invalid input.
//!
//! | Route | Operation | Success |
//! |-------|-----------|---------|
//! | `POST /products` | `create` | 201 + product |
//! | `GET /products` | `find_all` | 200 + products |
//! | `GET /products/:id` | `find_one` | 200 + product |
//! | `PATCH /products/:id` | `update` | 200 + product |
//! | `DELETE /products/:id` | `remove` | 200 + `{message}` |
//! | `GET /health` | | 200 + `{status}` |
//!
//! Failures render as `{"statusCode", "error", "message"}` (see [`errors::ApiError`]).

pub mod dto;
pub mod errors;
pub mod extract;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::clients::ProductClient;

/// Builds the application router around a product client.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route(
            "/products",
            post(handlers::create_product).get(handlers::list_products),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(products)
}
