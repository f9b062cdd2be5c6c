//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation payload, used by the
/// welcome route and delete confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
