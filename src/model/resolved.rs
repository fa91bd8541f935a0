//! Resolved model: descriptors validated and flattened for runtime use.

use crate::error::ConfigError;
use crate::model::types::{ColumnType, ModelConfig};
use std::collections::{HashMap, HashSet};

/// Name of the implicit integer primary key column on every entity.
pub const PK_COLUMN: &str = "pk";

#[derive(Clone, Debug)]
pub struct ColumnInfo {
    pub name: String,
    pub type_: ColumnType,
    pub nullable: bool,
}

#[derive(Clone, Debug)]
pub struct ResolvedEntity {
    pub model_name: String,
    /// Lowercased model name; doubles as the path segment for the entity's routes.
    pub table_name: String,
    /// All columns in declaration order, `pk` first.
    pub columns: Vec<ColumnInfo>,
    column_names: HashSet<String>,
}

impl ResolvedEntity {
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.contains(name)
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedModel {
    pub entities: Vec<ResolvedEntity>,
    entity_by_table: HashMap<String, ResolvedEntity>,
}

impl ResolvedModel {
    pub fn entity_by_table(&self, table: &str) -> Option<&ResolvedEntity> {
        self.entity_by_table.get(table)
    }
}

/// Build the runtime model from descriptors: derive table segments, inject the
/// `pk` column, and reject names that would make routing or SQL ambiguous.
pub fn resolve(configs: &[ModelConfig]) -> Result<ResolvedModel, ConfigError> {
    let mut entities = Vec::with_capacity(configs.len());
    let mut entity_by_table = HashMap::new();

    for config in configs {
        if config.name.trim().is_empty() {
            return Err(ConfigError::EmptyModelName);
        }
        let table_name = config.name.to_lowercase();
        if entity_by_table.contains_key(&table_name) {
            return Err(ConfigError::DuplicateTableSegment(table_name));
        }

        let mut columns = vec![ColumnInfo {
            name: PK_COLUMN.to_string(),
            type_: ColumnType::Integer,
            nullable: false,
        }];
        let mut column_names: HashSet<String> = HashSet::new();
        column_names.insert(PK_COLUMN.to_string());

        for col in &config.columns {
            if col.name == PK_COLUMN {
                return Err(ConfigError::ReservedColumn {
                    model: config.name.clone(),
                    column: col.name.clone(),
                });
            }
            if !column_names.insert(col.name.clone()) {
                return Err(ConfigError::DuplicateColumn {
                    model: config.name.clone(),
                    column: col.name.clone(),
                });
            }
            columns.push(ColumnInfo {
                name: col.name.clone(),
                type_: col.type_,
                nullable: col.nullable,
            });
        }

        let entity = ResolvedEntity {
            model_name: config.name.clone(),
            table_name: table_name.clone(),
            columns,
            column_names,
        };
        entity_by_table.insert(table_name, entity.clone());
        entities.push(entity);
    }

    Ok(ResolvedModel {
        entities,
        entity_by_table,
    })
}
