//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a resolved entity.

use crate::model::{ResolvedEntity, PK_COLUMN};
use serde_json::{Map, Value};

/// Quote an identifier for SQLite (safe: identifiers come only from resolved config).
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a bind value and return its `?N` placeholder.
    fn push_param(&mut self, v: Value) -> String {
        self.params.push(v);
        format!("?{}", self.params.len())
    }
}

fn select_column_list(entity: &ResolvedEntity) -> String {
    entity
        .columns
        .iter()
        .map(|c| quoted(&c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT one row by primary key. Binds the id as the sole param.
pub fn select_by_pk(entity: &ResolvedEntity, pk: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(Value::from(pk));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(entity),
        quoted(&entity.table_name),
        quoted(PK_COLUMN),
        ph
    );
    q
}

/// SELECT all rows, ordered by primary key.
pub fn select_all(entity: &ResolvedEntity) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(entity),
        quoted(&entity.table_name),
        quoted(PK_COLUMN)
    );
    q
}

/// INSERT one row from validated fields, RETURNING every column so the caller
/// sees generated values (the assigned `pk`). An empty field set inserts the
/// row entirely from column defaults.
pub fn insert(entity: &ResolvedEntity, fields: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(&entity.table_name);
    let returning = select_column_list(entity);

    let mut names = Vec::new();
    let mut placeholders = Vec::new();
    for col in &entity.columns {
        if let Some(v) = fields.get(&col.name) {
            names.push(quoted(&col.name));
            let ph = q.push_param(v.clone());
            placeholders.push(ph);
        }
    }

    q.sql = if names.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table,
            names.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE the supplied columns on one row by primary key, RETURNING every
/// column. Callers must not pass an empty field set.
pub fn update_by_pk(entity: &ResolvedEntity, pk: i64, fields: &Map<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut assignments = Vec::new();
    for col in &entity.columns {
        if let Some(v) = fields.get(&col.name) {
            let ph = q.push_param(v.clone());
            assignments.push(format!("{} = {}", quoted(&col.name), ph));
        }
    }
    let id_ph = q.push_param(Value::from(pk));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
        quoted(&entity.table_name),
        assignments.join(", "),
        quoted(PK_COLUMN),
        id_ph,
        select_column_list(entity)
    );
    q
}

/// DELETE one row by primary key, RETURNING the key so a miss is observable.
pub fn delete_by_pk(entity: &ResolvedEntity, pk: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(Value::from(pk));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {} RETURNING {}",
        quoted(&entity.table_name),
        quoted(PK_COLUMN),
        ph,
        quoted(PK_COLUMN)
    );
    q
}
