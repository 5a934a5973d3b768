#![allow(unused)]

pub mod catalog;
pub mod db;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use dashmap::DashMap;
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::CorsLayer;

use crate::catalog::CatalogCache;
use crate::state::AppState;

/// Build a fully configured Router + shared state.
pub async fn build_app(
    db_url: &str,
    catalog_url: &str,
    set_code: &str,
) -> (Router, Arc<AppState>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .expect("Failed to connect to SQLite");

    db::init_db(&pool)
        .await
        .expect("Failed to initialize database");

    let state = Arc::new(AppState {
        db: pool,
        catalog: CatalogCache::new(catalog_url, set_code),
        vote_locks: DashMap::new(),
    });

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/pair", get(routes::pair))
        .route("/vote", post(routes::vote))
        .route("/leaderboard", get(routes::leaderboard))
        .route("/catalog/refresh", post(routes::refresh_catalog))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
