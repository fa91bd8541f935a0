//! Entity CRUD routes: the eight verb/path bindings per model.
//!
//! Paths are parameterized on the table segment so one router serves every
//! model; handlers resolve the entity by segment (404 for unknown segments).
//! Collection GET is bound with an explicit method filter because axum's
//! `get()` also claims HEAD, which carries its own handler here.

use crate::handlers::entity::{
    create, delete as delete_handler, head_probe, list, options_descriptor, patch, read, update,
};
use crate::state::AppState;
use axum::routing::{on, MethodFilter};
use axum::Router;

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/:table/",
            on(MethodFilter::POST, create)
                .on(MethodFilter::GET, list)
                .on(MethodFilter::OPTIONS, options_descriptor)
                .on(MethodFilter::HEAD, head_probe),
        )
        .route(
            "/:table/:id",
            on(MethodFilter::GET, read)
                .on(MethodFilter::PUT, update)
                .on(MethodFilter::PATCH, patch)
                .on(MethodFilter::DELETE, delete_handler),
        )
        .with_state(state)
}
