//! Route definitions for the `/passenger` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::passenger;
use crate::state::AppState;

/// Routes mounted at `/passenger`.
///
/// ```text
/// POST   /create           -> create_passenger
/// GET    /{id}             -> get_passenger
/// PUT    /{id}/update      -> update_passenger
/// DELETE /{id}/delete      -> delete_passenger
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(passenger::create_passenger))
        .route("/{id}", get(passenger::get_passenger))
        .route("/{id}/update", put(passenger::update_passenger))
        .route("/{id}/delete", delete(passenger::delete_passenger))
}
