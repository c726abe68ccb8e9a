//! API routes configuration module

use crate::api::extract::require_numeric_id;
use crate::api::handlers::{
    create_member, create_order, delete_member, list_members, list_orders, update_member,
};
use crate::api::state::AppState;
use axum::{
    middleware,
    routing::{get, put},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

/// Creates and configures the API router with all routes
///
/// Member ids must be numeric: any other id is a 404 whatever the method,
/// see [`crate::api::extract::require_numeric_id`].
/// Orders can only be listed and created.
///
/// # Arguments
/// * `state` - Store handles to be shared across handlers
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/:id",
            put(update_member)
                .delete(delete_member)
                .layer(middleware::from_fn(require_numeric_id)),
        )
        .route("/orders", get(list_orders).post(create_order))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
