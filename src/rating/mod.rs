pub mod elo;
pub mod leaderboard;
pub mod types;

pub use elo::{compute_ratings, expected_score};
pub use leaderboard::leaderboard;
pub use types::{LeaderboardEntry, ParticipantRating, RatingTable};
