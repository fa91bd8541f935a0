//! Safe SQL construction: parameterized statements from resolved entities.

mod builder;
mod params;

pub(crate) use builder::quoted;
pub use builder::{delete_by_pk, insert, select_all, select_by_pk, update_by_pk, QueryBuf};
pub use params::BindValue;
