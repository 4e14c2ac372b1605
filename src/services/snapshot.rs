use log::info;

use crate::config::settings::{AppConfig, RatingSettings};
use crate::domain::{BattleCatalog, BattleSummary, summarize};
use crate::loader::{BattleFile, LoadedBattles};
use crate::rating::{self, LeaderboardEntry, RatingTable};

/// Catalog and ratings from one full recomputation
pub struct ArenaSnapshot {
    pub catalog: BattleCatalog,
    pub ratings: RatingTable,
    pub warning: Option<String>,
}

impl ArenaSnapshot {
    /// Load the battle file named in the config and recompute everything from scratch.
    pub fn load(config: &AppConfig) -> Self {
        let loaded = BattleFile::new(&config.loader.data_path).load();
        Self::build(loaded, &config.rating)
    }

    pub fn build(loaded: LoadedBattles, settings: &RatingSettings) -> Self {
        let ratings = rating::compute_ratings(&loaded.battles, settings);
        let catalog: BattleCatalog = loaded.battles.into_iter().collect();

        info!(
            "Snapshot ready: {} battles, {} rated models",
            catalog.len(),
            ratings.len()
        );

        Self {
            catalog,
            ratings,
            warning: loaded.warning,
        }
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rating::leaderboard(&self.ratings)
    }

    /// Latest first
    pub fn timeline(&self) -> Vec<BattleSummary> {
        self.catalog.timeline().into_iter().map(summarize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::battle;

    #[test]
    fn test_snapshot_views() {
        let loaded = LoadedBattles {
            battles: vec![
                battle("b1", "X", "Y", "X_wins", "2025-01-01T00:00:00Z"),
                battle("b2", "Y", "X", "Y_wins", "2025-01-02T00:00:00Z"),
                battle("b3", "X", "Y", "X_wins", "2025-01-03T00:00:00Z"),
            ],
            warning: None,
        };

        let snapshot = ArenaSnapshot::build(loaded, &RatingSettings::default());

        let board = snapshot.leaderboard();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].name, "X");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].games_played, 3);

        let timeline: Vec<String> = snapshot.timeline().into_iter().map(|s| s.battle_id).collect();
        assert_eq!(timeline, vec!["b3", "b2", "b1"]);

        // The catalog keeps source order for its own listing
        assert_eq!(snapshot.catalog.battles()[0].battle_id, "b1");
    }

    #[test]
    fn test_empty_snapshot_carries_warning() {
        let loaded = LoadedBattles {
            battles: Vec::new(),
            warning: Some("No battle data found at data.json".to_string()),
        };

        let snapshot = ArenaSnapshot::build(loaded, &RatingSettings::default());

        assert!(snapshot.catalog.is_empty());
        assert!(snapshot.leaderboard().is_empty());
        assert!(snapshot.warning.is_some());
    }
}
