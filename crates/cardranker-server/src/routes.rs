use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::warn;

use cardranker_core::elo::{self, Outcome};
use cardranker_core::pairing::sample_pair;
use cardranker_core::protocol::{
    CardSummary, LeaderboardEntry, PairResponse, RatingUpdate, RefreshResponse, VoteRequest,
    VoteResponse,
};

use crate::db;
use crate::state::{vote_lock, AppState};

// ── Health ──────────────────────────────────────────────────────────────

pub async fn health() -> &'static str {
    "ok"
}

// ── Pair ────────────────────────────────────────────────────────────────

/// Two distinct random cards for the next vote.
pub async fn pair(State(state): State<Arc<AppState>>) -> Result<Json<PairResponse>, StatusCode> {
    let cards = state.catalog.cards().await.map_err(|err| {
        warn!("catalog fetch failed: {err}");
        StatusCode::BAD_GATEWAY
    })?;

    let (a, b) = sample_pair(cards.as_slice()).ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    Ok(Json(PairResponse {
        cards: vec![
            CardSummary {
                id: a.id.clone(),
                name: a.name.clone(),
                image_url: a.image_url.clone(),
            },
            CardSummary {
                id: b.id.clone(),
                name: b.name.clone(),
                image_url: b.image_url.clone(),
            },
        ],
    }))
}

// ── Vote ────────────────────────────────────────────────────────────────

/// Record one vote: read both ratings, apply the Elo update, persist
/// both sides atomically.
pub async fn vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, StatusCode> {
    if req.card1.is_empty() || req.card2.is_empty() || req.card1 == req.card2 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let outcome = if req.winner == req.card1 {
        Outcome::AWins
    } else if req.winner == req.card2 {
        Outcome::BWins
    } else {
        return Err(StatusCode::BAD_REQUEST);
    };

    // Take both cards' locks in sorted order so concurrent votes on the
    // same pair can't interleave their read-modify-write cycles.
    let (first, second) = if req.card1 < req.card2 {
        (&req.card1, &req.card2)
    } else {
        (&req.card2, &req.card1)
    };
    let first_lock = vote_lock(&state, first);
    let second_lock = vote_lock(&state, second);
    let _first_guard = first_lock.lock().await;
    let _second_guard = second_lock.lock().await;

    let rating1 = db::get_rating(&state.db, &req.card1)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let rating2 = db::get_rating(&state.db, &req.card2)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let (new1, new2) = elo::update_pair(rating1, rating2, outcome);

    db::set_rating_pair(&state.db, (&req.card1, new1), (&req.card2, new2))
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(VoteResponse {
        card1: RatingUpdate {
            id: req.card1,
            rating: new1,
            change: elo::round2(new1 - rating1),
        },
        card2: RatingUpdate {
            id: req.card2,
            rating: new2,
            change: elo::round2(new2 - rating2),
        },
    }))
}

// ── Leaderboard ─────────────────────────────────────────────────────────

/// All rated cards, highest rating first, with catalog names.
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaderboardEntry>>, StatusCode> {
    let rows = db::get_all_ratings(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // Names come from the catalog; a card the catalog no longer lists
    // (or an unreachable catalog) falls back to the raw identifier.
    let names: HashMap<String, String> = match state.catalog.cards().await {
        Ok(cards) => cards
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect(),
        Err(err) => {
            warn!("catalog unavailable for leaderboard: {err}");
            HashMap::new()
        }
    };

    let entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .enumerate()
        .map(|(i, r)| LeaderboardEntry {
            rank: (i + 1) as u32,
            name: names
                .get(&r.card_id)
                .cloned()
                .unwrap_or_else(|| r.card_id.clone()),
            rating: r.rating,
        })
        .collect();

    Ok(Json(entries))
}

// ── Catalog refresh ─────────────────────────────────────────────────────

/// Force a refetch of the card catalog.
pub async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let cards = state.catalog.refresh().await.map_err(|err| {
        warn!("catalog refresh failed: {err}");
        StatusCode::BAD_GATEWAY
    })?;

    Ok(Json(RefreshResponse {
        cards: cards.len(),
    }))
}
