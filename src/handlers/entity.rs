//! Entity CRUD handlers: parse and validate the request, then dispatch exactly
//! one operation inside a session scope.

use crate::error::AppError;
use crate::handlers::{dispatch, ops};
use crate::model::ResolvedEntity;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// Parse the raw body as a JSON object. Done by hand rather than with the Json
/// extractor so rejections carry the `{"error": ...}` body.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("malformed JSON body: {}", e)))?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Reject any field absent from the entity's schema. Applied uniformly to
/// create, update, and patch, before a session is opened.
fn check_known_fields(entity: &ResolvedEntity, fields: &Map<String, Value>) -> Result<(), AppError> {
    for key in fields.keys() {
        if !entity.has_column(key) {
            return Err(AppError::BadRequest(format!("unknown field: {}", key)));
        }
    }
    Ok(())
}

fn entity_for<'a>(state: &'a AppState, table: &str) -> Result<&'a ResolvedEntity, AppError> {
    state.model.entity_by_table(table).ok_or(AppError::NotFound)
}

pub async fn create(
    State(state): State<AppState>,
    Path(table): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let entity = entity_for(&state, &table)?;
    let fields = parse_object(&body)?;
    check_known_fields(entity, &fields)?;
    dispatch(&state.pool, entity, ops::Create { fields }).await
}

pub async fn list(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Response, AppError> {
    let entity = entity_for(&state, &table)?;
    dispatch(&state.pool, entity, ops::ListAll).await
}

pub async fn read(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let entity = entity_for(&state, &table)?;
    let id = parse_id(&id)?;
    dispatch(&state.pool, entity, ops::Read { id }).await
}

pub async fn update(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, AppError> {
    let entity = entity_for(&state, &table)?;
    let id = parse_id(&id)?;
    let fields = parse_object(&body)?;
    check_known_fields(entity, &fields)?;
    dispatch(&state.pool, entity, ops::Update { id, fields }).await
}

/// PATCH shares merge semantics with PUT: any subset of columns is accepted
/// and unsupplied columns keep their values.
pub async fn patch(
    state: State<AppState>,
    path: Path<(String, String)>,
    body: Bytes,
) -> Result<Response, AppError> {
    update(state, path, body).await
}

pub async fn delete(
    State(state): State<AppState>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let entity = entity_for(&state, &table)?;
    let id = parse_id(&id)?;
    dispatch(&state.pool, entity, ops::Delete { id }).await
}

/// Fixed capability descriptor, identical for every model; no model lookup and
/// no session.
pub async fn options_descriptor() -> impl IntoResponse {
    Json(json!({
        "allowed_methods": ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"],
        "allowed_headers": ["Content-Type", "Authorization"],
        "max_age": 3600
    }))
}

/// Empty probe: 200 with the JSON content type and no body; no session.
pub async fn head_probe() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
    )
}
