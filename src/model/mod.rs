pub mod loader;
pub mod resolved;
pub mod types;

pub use loader::load_from_path;
pub use resolved::{resolve, ColumnInfo, ResolvedEntity, ResolvedModel, PK_COLUMN};
pub use types::{ColumnConfig, ColumnType, ModelConfig};
