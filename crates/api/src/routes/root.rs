//! The root welcome route.

use axum::routing::get;
use axum::{Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- returns a static welcome message.
async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Passenger API!".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
