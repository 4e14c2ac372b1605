use log::{debug, info};

use super::types::{ParticipantRating, RatingTable, RatingValue};
use crate::config::settings::RatingSettings;
use crate::domain::Battle;

/// Elo ratings over the whole battle history.
///
/// Battles are replayed oldest first. Ratings depend on that order, so battles
/// sharing a start time are replayed in the order they were given.
pub fn compute_ratings(battles: &[Battle], config: &RatingSettings) -> RatingTable {
    info!("Calculating Elo ratings for {} battles", battles.len());

    // 1. Every participant starts from the default before any update
    let mut table = initialize_ratings(battles, config);
    info!("Found {} unique participants", table.len());

    // 2. Replay in chronological order
    for battle in processing_order(battles) {
        apply_battle(&mut table, battle, config);
    }

    table
}

fn initialize_ratings(battles: &[Battle], config: &RatingSettings) -> RatingTable {
    let mut table = RatingTable::new();

    for battle in battles {
        let (a, b) = battle.participants();
        for name in [a, b] {
            table
                .entry(name.to_string())
                .or_insert_with(|| ParticipantRating::starting_at(config.default_rating));
        }
    }

    table
}

/// Stable ascending sort by start time over borrowed records.
pub fn processing_order(battles: &[Battle]) -> Vec<&Battle> {
    let mut ordered: Vec<&Battle> = battles.iter().collect();
    ordered.sort_by_key(|battle| battle.timestamp_start);
    ordered
}

fn apply_battle(table: &mut RatingTable, battle: &Battle, config: &RatingSettings) {
    let (name_a, name_b) = battle.participants();
    let before_a = current_rating(table, name_a, config);
    let before_b = current_rating(table, name_b, config);

    let (score_a, score_b) = battle.outcome().scores();
    let after_a = updated_rating(before_a, before_b, score_a, config.k_factor);
    let after_b = updated_rating(before_b, before_a, score_b, config.k_factor);

    debug!(
        "{}: {} {:.1} -> {:.1}, {} {:.1} -> {:.1}",
        battle.battle_id, name_a, before_a, after_a, name_b, before_b, after_b
    );

    record_result(table, name_a, after_a, config);
    record_result(table, name_b, after_b, config);
}

fn current_rating(table: &mut RatingTable, name: &str, config: &RatingSettings) -> RatingValue {
    entry(table, name, config).rating
}

fn record_result(table: &mut RatingTable, name: &str, rating: RatingValue, config: &RatingSettings) {
    let participant = entry(table, name, config);
    participant.rating = rating;
    participant.games_played += 1;
}

// Everyone is initialized up front; this only guards against a missing entry.
fn entry<'a>(
    table: &'a mut RatingTable,
    name: &str,
    config: &RatingSettings,
) -> &'a mut ParticipantRating {
    table
        .entry(name.to_string())
        .or_insert_with(|| ParticipantRating::starting_at(config.default_rating))
}

/// Probability that a player rated `rating` beats one rated `opponent`
pub fn expected_score(rating: RatingValue, opponent: RatingValue) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

pub fn updated_rating(
    rating: RatingValue,
    opponent: RatingValue,
    actual_score: f64,
    k_factor: f64,
) -> RatingValue {
    rating + k_factor * (actual_score - expected_score(rating, opponent))
}
