//! Server binary: loads model descriptors from a JSON file, ensures tables
//! exist, mounts common and entity routes.

use axum::Router;
use crudkit::{common_routes, create_tables, entity_routes, load_from_path, resolve, AppState};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("crudkit=info".parse()?))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://crudkit.db?mode=rwc".into());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let models_path = std::env::var("MODELS_PATH").unwrap_or_else(|_| "models.json".into());
    let configs = load_from_path(&models_path)?;
    let model = resolve(&configs)?;
    create_tables(&pool, &model).await?;
    tracing::info!(models = model.entities.len(), "model resolved");

    let state = AppState {
        pool,
        model: Arc::new(model),
    };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
