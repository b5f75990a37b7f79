use crate::error::{ServerError, ServerResult};
use crate::filter::Filters;
use crate::nlq;
use crate::state::ServerState;
use crate::store::StoredString;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// Request to analyze and store a string.
///
/// `value` is kept as raw JSON so the boundary can distinguish a missing
/// field from a present-but-non-string one; the handler validates it
/// before the analyzer ever runs.
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// Query parameters for the natural-language filter endpoint
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Analyze a string and store the result.
///
/// The value is trimmed before analysis. Validation failures map to
/// client errors: a missing `value` is a 400, a non-string or blank
/// `value` a 422. The record ID is the SHA-256 digest of the trimmed
/// value, so re-submitting the same string is a 409 conflict.
///
/// The `Json` rejection is taken as a `Result` so extractor failures
/// (malformed JSON, wrong content type) render through the same error
/// envelope as hand-raised errors.
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<CreateStringRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = body?;
    let raw = request.value.ok_or(ServerError::MissingValue)?;
    let value = raw.as_str().ok_or(ServerError::InvalidInput)?.trim();
    if value.is_empty() {
        return Err(ServerError::EmptyValue);
    }

    let entry = state.store.insert(value)?;
    tracing::debug!(id = %entry.id, length = entry.properties.length, "Stored string");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Fetch a stored record by its exact value (URL-encoded in the path).
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<Json<StoredString>> {
    let entry = state.store.get(&value).ok_or(ServerError::NotFound)?;
    Ok(Json(entry))
}

/// List stored records, optionally filtered by property predicates.
///
/// Query parameters are parsed strictly (see [`Filters::from_params`]);
/// any violation is a 400 rather than a silently unfiltered listing.
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ServerResult<impl IntoResponse> {
    let filters = Filters::from_params(&params)?;

    let data: Vec<StoredString> = state
        .store
        .snapshot()
        .into_iter()
        .filter(|entry| filters.matches(entry))
        .collect();
    let count = data.len();

    Ok(Json(json!({
        "data": data,
        "count": count,
        "filters_applied": filters,
    })))
}

/// Filter stored records with a natural-language query.
///
/// A missing `query` parameter is a 400; an unrecognizable query a 400;
/// a query that parses to contradictory filters a 422. The response
/// echoes the interpretation so callers can see what was applied.
pub async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ServerResult<impl IntoResponse> {
    let query = params.query.ok_or(ServerError::MissingQuery)?;
    let filters = nlq::parse_query(&query)?;

    let data: Vec<StoredString> = state
        .store
        .snapshot()
        .into_iter()
        .filter(|entry| filters.matches(entry))
        .collect();
    let count = data.len();

    Ok(Json(json!({
        "data": data,
        "count": count,
        "interpreted_query": {
            "original": query,
            "parsed_filters": filters,
        },
    })))
}

/// Delete a stored record by its exact value. 204 on success.
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    if !state.store.remove(&value) {
        return Err(ServerError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
