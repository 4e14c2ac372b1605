use serde::Serialize;
use std::collections::HashMap;

pub type ParticipantName = String;
pub type RatingValue = f64;
pub type RatingTable = HashMap<ParticipantName, ParticipantRating>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRating {
    pub rating: RatingValue,
    pub games_played: u32,
}

impl ParticipantRating {
    pub fn starting_at(rating: RatingValue) -> Self {
        Self {
            rating,
            games_played: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: ParticipantName,
    pub rating: RatingValue,
    pub games_played: u32,
}
