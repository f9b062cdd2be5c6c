use std::sync::Arc;

use paxport_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The record store is injected behind the [`DocumentStore`] trait, so
/// tests can substitute the in-memory implementation for the real one.
#[derive(Clone)]
pub struct AppState {
    /// The passenger record collection.
    pub store: Arc<dyn DocumentStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
