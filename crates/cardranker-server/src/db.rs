use sqlx::{Row, SqlitePool};

use cardranker_core::elo::DEFAULT_RATING;

/// Create all tables if they don't exist.
pub async fn init_db(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS card_ratings (
            card_id TEXT PRIMARY KEY,
            rating REAL NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Stored rating for a card, or the default for cards never voted on.
pub async fn get_rating(pool: &SqlitePool, card_id: &str) -> Result<f64, sqlx::Error> {
    let row = sqlx::query("SELECT rating FROM card_ratings WHERE card_id = ?1")
        .bind(card_id)
        .fetch_optional(pool)
        .await?;

    Ok(row
        .map(|r| r.get::<f64, _>("rating"))
        .unwrap_or(DEFAULT_RATING))
}

/// Insert or overwrite one card's rating.
pub async fn set_rating(pool: &SqlitePool, card_id: &str, rating: f64) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO card_ratings (card_id, rating)
         VALUES (?1, ?2)
         ON CONFLICT(card_id) DO UPDATE SET rating = ?2",
    )
    .bind(card_id)
    .bind(rating)
    .execute(pool)
    .await?;

    Ok(())
}

/// Write both sides of a vote in a single transaction, so a failure
/// can't persist one card's new rating without the other.
pub async fn set_rating_pair(
    pool: &SqlitePool,
    card1: (&str, f64),
    card2: (&str, f64),
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (card_id, rating) in [card1, card2] {
        sqlx::query(
            "INSERT INTO card_ratings (card_id, rating)
             VALUES (?1, ?2)
             ON CONFLICT(card_id) DO UPDATE SET rating = ?2",
        )
        .bind(card_id)
        .bind(rating)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// All recorded ratings, highest first.
pub async fn get_all_ratings(pool: &SqlitePool) -> Result<Vec<RatingRow>, sqlx::Error> {
    let rows =
        sqlx::query("SELECT card_id, rating FROM card_ratings ORDER BY rating DESC, card_id")
            .fetch_all(pool)
            .await?;

    Ok(rows
        .into_iter()
        .map(|r| RatingRow {
            card_id: r.get("card_id"),
            rating: r.get("rating"),
        })
        .collect())
}

#[derive(Debug, Clone)]
pub struct RatingRow {
    pub card_id: String,
    pub rating: f64,
}
