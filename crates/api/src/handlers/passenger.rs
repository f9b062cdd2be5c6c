//! Handlers for the `/passenger` resource.
//!
//! Each operation is an independent request/response transaction over
//! the injected [`DocumentStore`]: validate, call the store, normalize
//! the stored fields into the response shape. Update is read-merge-write
//! and is not atomic as a whole; concurrent writers are last-write-wins.

use axum::extract::{Path, State};
use axum::Json;
use paxport_core::error::CoreError;
use paxport_core::passenger::{CreatePassenger, Passenger, UpdatePassenger};
use paxport_core::types::DbId;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Parse a path segment into a store identifier.
///
/// The identifier format is store-specific; anything unparsable is a
/// caller error, not an internal one.
fn parse_id(id: &str) -> Result<DbId, AppError> {
    id.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid passenger id '{id}'")))
}

/// POST /passenger/create
///
/// Validate and persist a new passenger record. The record is re-read by
/// the identifier the store assigned, so the response reflects exactly
/// what was stored; an absent re-read means the insert silently failed
/// and is reported as an internal error, not retried.
pub async fn create_passenger(
    State(state): State<AppState>,
    Json(input): Json<CreatePassenger>,
) -> AppResult<Json<Passenger>> {
    tracing::info!("Creating a new passenger");
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let id = state.store.insert(input.into_document()).await?;

    let fields = state.store.find_by_id(id).await?.ok_or_else(|| {
        AppError::InternalError(format!("Passenger {id} missing immediately after insert"))
    })?;

    let passenger = Passenger::from_document(id, &fields);
    tracing::info!(id = %id, "Passenger created");
    Ok(Json(passenger))
}

/// GET /passenger/{id}
///
/// Fetch a passenger record by identity.
pub async fn get_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Passenger>> {
    let id = parse_id(&id)?;
    tracing::info!(id = %id, "Fetching passenger");

    match state.store.find_by_id(id).await? {
        Some(fields) => Ok(Json(Passenger::from_document(id, &fields))),
        None => {
            tracing::warn!(id = %id, "Passenger not found");
            Err(CoreError::NotFound {
                entity: "Passenger",
                id,
            }
            .into())
        }
    }
}

/// PUT /passenger/{id}/update
///
/// Merge the supplied fields into the existing record. Fields omitted
/// from the body keep their current values; the write payload is the
/// full merged mapping, so every update rewrites all fields. Success
/// requires the store to report exactly one record written.
pub async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePassenger>,
) -> AppResult<Json<Passenger>> {
    let id = parse_id(&id)?;
    tracing::info!(id = %id, "Updating passenger");

    input.validate_fields()?;

    let existing = state.store.find_by_id(id).await?.ok_or(CoreError::NotFound {
        entity: "Passenger",
        id,
    })?;

    let merged = input.merge_into(&Passenger::from_document(id, &existing));

    let modified = state.store.merge_by_id(id, merged).await?;
    if modified != 1 {
        tracing::warn!(id = %id, modified, "Passenger not found during merge");
        return Err(CoreError::NotFound {
            entity: "Passenger",
            id,
        }
        .into());
    }

    // Re-read so the response is the record as stored. A record that
    // vanished between merge and re-read reads as not found.
    let fields = state.store.find_by_id(id).await?.ok_or(CoreError::NotFound {
        entity: "Passenger",
        id,
    })?;

    let passenger = Passenger::from_document(id, &fields);
    tracing::info!(id = %id, "Passenger updated");
    Ok(Json(passenger))
}

/// DELETE /passenger/{id}/delete
///
/// Hard delete. Deleting an already-deleted record reports not found
/// rather than failing.
pub async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    tracing::info!(id = %id, "Deleting passenger");

    let deleted = state.store.delete_by_id(id).await?;
    if deleted != 1 {
        tracing::warn!(id = %id, "Passenger not found");
        return Err(CoreError::NotFound {
            entity: "Passenger",
            id,
        }
        .into());
    }

    tracing::info!(id = %id, "Passenger deleted");
    Ok(Json(MessageResponse {
        message: "Passenger deleted successfully".to_string(),
    }))
}
