pub mod health;
pub mod passenger;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET    /                          welcome message
/// GET    /health                    service and store health
///
/// POST   /passenger/create          create a passenger record
/// GET    /passenger/{id}            fetch a passenger record
/// PUT    /passenger/{id}/update     merge fields into a record
/// DELETE /passenger/{id}/delete     delete a record
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .nest("/passenger", passenger::router())
}
