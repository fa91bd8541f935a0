//! Operations: the single database action each request performs.
//!
//! Every session-bound verb is one [`Operation`] implementation; the dispatch
//! wrapper in [`crate::handlers`] owns the session lifecycle around `perform`.

use crate::error::AppError;
use crate::model::ResolvedEntity;
use crate::serialize::row_to_json;
use crate::session::Session;
use crate::sql;
use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

/// One CRUD action against an open session.
#[async_trait]
pub trait Operation: Send + Sync {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError>;
}

/// INSERT from pre-validated fields; 201 with the refreshed row.
pub struct Create {
    pub fields: Map<String, Value>,
}

#[async_trait]
impl Operation for Create {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError> {
        let q = sql::insert(entity, &self.fields);
        let row = session.fetch_one(&q).await?;
        Ok((StatusCode::CREATED, Json(row_to_json(&row))).into_response())
    }
}

/// SELECT one row by primary key; 200 or 404.
pub struct Read {
    pub id: i64,
}

#[async_trait]
impl Operation for Read {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError> {
        let q = sql::select_by_pk(entity, self.id);
        let row = session.fetch_optional(&q).await?.ok_or(AppError::NotFound)?;
        Ok((StatusCode::OK, Json(row_to_json(&row))).into_response())
    }
}

/// SELECT every row, ordered by primary key; 200 with a JSON array.
pub struct ListAll;

#[async_trait]
impl Operation for ListAll {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError> {
        let q = sql::select_all(entity);
        let rows = session.fetch_all(&q).await?;
        let items: Vec<Value> = rows.iter().map(row_to_json).collect();
        Ok((StatusCode::OK, Json(Value::Array(items))).into_response())
    }
}

/// UPDATE the supplied columns on one row; 200 with the refreshed row, 404 on
/// a missing key. PUT and PATCH both dispatch this operation (merge semantics;
/// unsupplied fields keep their values).
pub struct Update {
    pub id: i64,
    pub fields: Map<String, Value>,
}

#[async_trait]
impl Operation for Update {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError> {
        if self.fields.is_empty() {
            // Nothing to assign; still 404 on a missing row, else echo the row.
            let q = sql::select_by_pk(entity, self.id);
            let row = session.fetch_optional(&q).await?.ok_or(AppError::NotFound)?;
            return Ok((StatusCode::OK, Json(row_to_json(&row))).into_response());
        }
        let q = sql::update_by_pk(entity, self.id, &self.fields);
        let row = session.fetch_optional(&q).await?.ok_or(AppError::NotFound)?;
        Ok((StatusCode::OK, Json(row_to_json(&row))).into_response())
    }
}

/// DELETE one row by primary key; 204 empty, 404 on a missing key.
pub struct Delete {
    pub id: i64,
}

#[async_trait]
impl Operation for Delete {
    async fn perform(
        &self,
        session: &mut Session,
        entity: &ResolvedEntity,
    ) -> Result<Response, AppError> {
        let q = sql::delete_by_pk(entity, self.id);
        session.fetch_optional(&q).await?.ok_or(AppError::NotFound)?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
