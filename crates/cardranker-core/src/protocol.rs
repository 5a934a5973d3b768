use serde::{Deserialize, Serialize};

/// A card as presented to the voting client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Two candidate cards for one vote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairResponse {
    pub cards: Vec<CardSummary>,
}

/// Vote submission: the winner must be one of the two candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    pub winner: String,
    pub card1: String,
    pub card2: String,
}

/// New rating for one card after a vote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub id: String,
    pub rating: f64,
    /// Rating delta from this vote
    pub change: f64,
}

/// Both sides of a recorded vote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    pub card1: RatingUpdate,
    pub card2: RatingUpdate,
}

/// Leaderboard entry returned by REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub rating: f64,
}

/// Catalog refresh result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub cards: usize,
}
