//! HTTP handlers for entity CRUD, plus the session-scoped dispatch wrapper.

pub mod entity;
pub mod ops;

use crate::error::AppError;
use crate::model::ResolvedEntity;
use crate::session::Session;
use axum::response::Response;
use ops::Operation;
use sqlx::SqlitePool;

/// Session-scoped execution: open a session, perform exactly one operation,
/// release the session unconditionally. The release is the drop of `session`
/// at the end of this scope and runs on success, error, and unwind alike; the
/// session never escapes this function.
pub async fn dispatch<O: Operation>(
    pool: &SqlitePool,
    entity: &ResolvedEntity,
    op: O,
) -> Result<Response, AppError> {
    let mut session = Session::open(pool).await?;
    op.perform(&mut session, entity).await
}
