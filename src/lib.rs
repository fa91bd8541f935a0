//! crudkit: model-driven generic CRUD REST endpoints over SQLite.
//!
//! Declare data models as (name, columns) descriptors and get eight HTTP
//! bindings per model — POST/GET/OPTIONS/HEAD on the collection,
//! GET/PUT/PATCH/DELETE on the item — each performing exactly one database
//! operation inside a request-scoped session that is released on every exit
//! path.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod schema;
pub mod serialize;
pub mod session;
pub mod sql;
pub mod state;

pub use error::{AppError, ConfigError};
pub use model::{load_from_path, resolve, ModelConfig, ResolvedEntity, ResolvedModel};
pub use routes::{common_routes, entity_routes};
pub use schema::create_tables;
pub use serialize::row_to_json;
pub use session::Session;
pub use state::AppState;
