use super::types::{LeaderboardEntry, RatingTable};

/// Highest rating first, ranks starting at 1. Exact ties are ordered by name.
pub fn leaderboard(table: &RatingTable) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|(name_a, a), (name_b, b)| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| name_a.cmp(name_b))
    });

    rows.into_iter()
        .enumerate()
        .map(|(idx, (name, participant))| LeaderboardEntry {
            rank: idx + 1,
            name: name.clone(),
            rating: participant.rating,
            games_played: participant.games_played,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::types::ParticipantRating;

    fn entry(rating: f64, games_played: u32) -> ParticipantRating {
        ParticipantRating {
            rating,
            games_played,
        }
    }

    #[test]
    fn test_sorted_descending_with_one_based_rank() {
        let mut table = RatingTable::new();
        table.insert("low".to_string(), entry(1450.0, 3));
        table.insert("high".to_string(), entry(1560.0, 4));
        table.insert("mid".to_string(), entry(1500.0, 1));

        let rows = leaderboard(&table);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[2].rank, 3);
        assert_eq!(rows[0].games_played, 4);
    }

    #[test]
    fn test_equal_ratings_ordered_by_name() {
        let mut table = RatingTable::new();
        table.insert("b".to_string(), entry(1500.0, 1));
        table.insert("a".to_string(), entry(1500.0, 1));

        let rows = leaderboard(&table);

        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[1].name, "b");
    }

    #[test]
    fn test_nan_rating_does_not_break_ordering() {
        let mut table = RatingTable::new();
        table.insert("low".to_string(), entry(1400.0, 1));
        table.insert("broken".to_string(), entry(f64::NAN, 1));
        table.insert("high".to_string(), entry(1600.0, 1));

        let rows = leaderboard(&table);

        assert_eq!(rows.len(), 3);
        let finite: Vec<&str> = rows
            .iter()
            .filter(|r| r.rating.is_finite())
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(finite, vec!["high", "low"]);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_table() {
        assert!(leaderboard(&RatingTable::new()).is_empty());
    }
}
