//! Request-scoped database session.
//!
//! A [`Session`] wraps exactly one pooled connection for the duration of one
//! operation. It is opened by the dispatch wrapper, handed to the operation by
//! mutable reference, and never escapes that scope. Release is drop-based: the
//! connection returns to the pool on every exit path, including unwind.

use crate::error::AppError;
use crate::sql::{BindValue, QueryBuf};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::SqlitePool;

pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub async fn open(pool: &SqlitePool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        tracing::debug!("session opened");
        Ok(Session { conn })
    }

    pub async fn fetch_optional(&mut self, q: &QueryBuf) -> Result<Option<SqliteRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(BindValue::from_json(p));
        }
        Ok(query.fetch_optional(&mut *self.conn).await?)
    }

    pub async fn fetch_all(&mut self, q: &QueryBuf) -> Result<Vec<SqliteRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(BindValue::from_json(p));
        }
        Ok(query.fetch_all(&mut *self.conn).await?)
    }

    /// Like [`fetch_optional`](Self::fetch_optional) but a missing row is a
    /// database error. For statements that must produce a row (INSERT ... RETURNING).
    pub async fn fetch_one(&mut self, q: &QueryBuf) -> Result<SqliteRow, AppError> {
        self.fetch_optional(q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // The pooled connection is released right after this runs.
        tracing::debug!("session released");
    }
}
