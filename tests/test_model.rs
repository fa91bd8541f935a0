use crudkit::model::{resolve, ColumnType, ModelConfig, PK_COLUMN};
use crudkit::schema::create_table_sql;
use crudkit::sql;
use crudkit::ConfigError;
use serde_json::json;

fn configs(v: serde_json::Value) -> Vec<ModelConfig> {
    serde_json::from_value(v).expect("descriptors")
}

#[test]
fn test_table_name_is_lowercased_model_name() {
    let model = resolve(&configs(json!([
        {"name": "Thing", "columns": [{"name": "name", "type": "text"}]}
    ])))
    .unwrap();
    let entity = model.entity_by_table("thing").expect("entity");
    assert_eq!(entity.model_name, "Thing");
    assert_eq!(entity.table_name, "thing");
}

#[test]
fn test_pk_column_is_injected_first() {
    let model = resolve(&configs(json!([
        {"name": "Thing", "columns": [{"name": "name", "type": "text"}]}
    ])))
    .unwrap();
    let entity = model.entity_by_table("thing").unwrap();
    assert_eq!(entity.columns[0].name, PK_COLUMN);
    assert_eq!(entity.columns[0].type_, ColumnType::Integer);
    assert!(!entity.columns[0].nullable);
    assert!(entity.has_column("pk"));
    assert!(entity.has_column("name"));
    assert!(!entity.has_column("flavor"));
}

#[test]
fn test_resolve_rejects_duplicate_table_segment() {
    // Distinct model names can still collide after lowercasing.
    let err = resolve(&configs(json!([
        {"name": "Thing", "columns": []},
        {"name": "THING", "columns": []}
    ])))
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateTableSegment(s) if s == "thing"));
}

#[test]
fn test_resolve_rejects_reserved_pk_column() {
    let err = resolve(&configs(json!([
        {"name": "Thing", "columns": [{"name": "pk", "type": "integer"}]}
    ])))
    .unwrap_err();
    assert!(matches!(err, ConfigError::ReservedColumn { .. }));
}

#[test]
fn test_resolve_rejects_duplicate_column() {
    let err = resolve(&configs(json!([
        {"name": "Thing", "columns": [
            {"name": "name", "type": "text"},
            {"name": "name", "type": "text"}
        ]}
    ])))
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateColumn { .. }));
}

#[test]
fn test_resolve_rejects_empty_model_name() {
    let err = resolve(&configs(json!([{"name": "  ", "columns": []}]))).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyModelName));
}

fn thing_entity() -> crudkit::ResolvedEntity {
    let model = resolve(&configs(json!([
        {"name": "Thing", "columns": [
            {"name": "name", "type": "text"},
            {"name": "count", "type": "integer"}
        ]}
    ])))
    .unwrap();
    model.entity_by_table("thing").unwrap().clone()
}

#[test]
fn test_create_table_sql() {
    let entity = thing_entity();
    assert_eq!(
        create_table_sql(&entity),
        "CREATE TABLE IF NOT EXISTS \"thing\" (\"pk\" INTEGER PRIMARY KEY AUTOINCREMENT, \
         \"name\" TEXT, \"count\" INTEGER)"
    );
}

#[test]
fn test_select_by_pk_sql() {
    let entity = thing_entity();
    let q = sql::select_by_pk(&entity, 7);
    assert_eq!(
        q.sql,
        "SELECT \"pk\", \"name\", \"count\" FROM \"thing\" WHERE \"pk\" = ?1"
    );
    assert_eq!(q.params, vec![json!(7)]);
}

#[test]
fn test_select_all_orders_by_pk() {
    let entity = thing_entity();
    let q = sql::select_all(&entity);
    assert_eq!(
        q.sql,
        "SELECT \"pk\", \"name\", \"count\" FROM \"thing\" ORDER BY \"pk\""
    );
    assert!(q.params.is_empty());
}

#[test]
fn test_insert_binds_fields_in_column_order_and_returns_all_columns() {
    let entity = thing_entity();
    let fields = json!({"count": 2, "name": "a"});
    let q = sql::insert(&entity, fields.as_object().unwrap());
    assert_eq!(
        q.sql,
        "INSERT INTO \"thing\" (\"name\", \"count\") VALUES (?1, ?2) \
         RETURNING \"pk\", \"name\", \"count\""
    );
    assert_eq!(q.params, vec![json!("a"), json!(2)]);
}

#[test]
fn test_insert_empty_fields_uses_default_values() {
    let entity = thing_entity();
    let fields = json!({});
    let q = sql::insert(&entity, fields.as_object().unwrap());
    assert_eq!(
        q.sql,
        "INSERT INTO \"thing\" DEFAULT VALUES RETURNING \"pk\", \"name\", \"count\""
    );
    assert!(q.params.is_empty());
}

#[test]
fn test_update_by_pk_sql() {
    let entity = thing_entity();
    let fields = json!({"name": "b"});
    let q = sql::update_by_pk(&entity, 7, fields.as_object().unwrap());
    assert_eq!(
        q.sql,
        "UPDATE \"thing\" SET \"name\" = ?1 WHERE \"pk\" = ?2 \
         RETURNING \"pk\", \"name\", \"count\""
    );
    assert_eq!(q.params, vec![json!("b"), json!(7)]);
}

#[test]
fn test_delete_by_pk_sql() {
    let entity = thing_entity();
    let q = sql::delete_by_pk(&entity, 7);
    assert_eq!(
        q.sql,
        "DELETE FROM \"thing\" WHERE \"pk\" = ?1 RETURNING \"pk\""
    );
    assert_eq!(q.params, vec![json!(7)]);
}
