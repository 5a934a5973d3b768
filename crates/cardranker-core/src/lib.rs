pub mod elo;
pub mod pairing;
pub mod protocol;

pub use elo::{DEFAULT_RATING, Outcome, update_pair};
pub use pairing::sample_pair;
