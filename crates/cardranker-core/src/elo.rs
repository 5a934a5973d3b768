/// Starting Elo rating for cards with no recorded votes
pub const DEFAULT_RATING: f64 = 1200.0;

/// K-factor for Elo calculation
const K: f64 = 32.0;

/// Which side of a pairwise vote won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    AWins,
    BWins,
}

/// Probability that `rating` beats `opponent` under the logistic model.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / 400.0))
}

/// Round to two decimal places, the precision ratings are stored at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate new Elo ratings for both cards after a single vote.
/// Returns `(new_rating_a, new_rating_b)`, each rounded to two decimals.
/// Ratings have no floor; a long losing streak can push one negative.
pub fn update_pair(rating_a: f64, rating_b: f64, outcome: Outcome) -> (f64, f64) {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);
    let (score_a, score_b) = match outcome {
        Outcome::AWins => (1.0, 0.0),
        Outcome::BWins => (0.0, 1.0),
    };
    (
        round2(rating_a + K * (score_a - expected_a)),
        round2(rating_b + K * (score_b - expected_b)),
    )
}
