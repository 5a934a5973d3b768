use std::sync::Arc;

use dashmap::DashMap;
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::catalog::CatalogCache;

/// Shared application state.
pub struct AppState {
    pub db: SqlitePool,
    pub catalog: CatalogCache,
    /// Per-card vote locks; serialize read-modify-write on a card's rating.
    pub vote_locks: DashMap<String, Arc<Mutex<()>>>,
}

/// Lock handle for one card's rating. Callers voting on a pair must
/// acquire both handles in sorted identifier order.
pub fn vote_lock(state: &AppState, card_id: &str) -> Arc<Mutex<()>> {
    state
        .vote_locks
        .entry(card_id.to_string())
        .or_insert_with(|| Arc::new(Mutex::new(())))
        .clone()
}
