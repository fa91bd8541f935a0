//! One-shot table creation from resolved entities.
//!
//! Not a migration system: existing tables are left untouched. This mirrors the
//! declarative create-all the models were designed around.

use crate::error::AppError;
use crate::model::{ColumnType, ResolvedEntity, ResolvedModel, PK_COLUMN};
use crate::sql::quoted;
use sqlx::SqlitePool;

fn sql_type(t: ColumnType) -> &'static str {
    match t {
        ColumnType::Integer => "INTEGER",
        ColumnType::Real => "REAL",
        ColumnType::Text => "TEXT",
        ColumnType::Boolean => "BOOLEAN",
    }
}

/// `CREATE TABLE IF NOT EXISTS` DDL for one entity, `pk` first as the
/// autoincrement primary key.
pub fn create_table_sql(entity: &ResolvedEntity) -> String {
    let mut defs = vec![format!(
        "{} INTEGER PRIMARY KEY AUTOINCREMENT",
        quoted(PK_COLUMN)
    )];
    for col in entity.columns.iter().skip(1) {
        let mut def = format!("{} {}", quoted(&col.name), sql_type(col.type_));
        if !col.nullable {
            def.push_str(" NOT NULL");
        }
        defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(&entity.table_name),
        defs.join(", ")
    )
}

/// Create every declared table that does not exist yet.
pub async fn create_tables(pool: &SqlitePool, model: &ResolvedModel) -> Result<(), AppError> {
    for entity in &model.entities {
        let ddl = create_table_sql(entity);
        tracing::debug!(sql = %ddl, "ddl");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}
