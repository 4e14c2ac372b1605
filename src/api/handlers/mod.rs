use axum::http::StatusCode;
use log::error;
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::services::snapshot::ArenaSnapshot;

pub mod battles;
pub mod leaderboard;

/// Shared by every request. Battle data is reloaded per request, so nothing here changes.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct BattleParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Reads the battle file off the async workers.
pub async fn load_snapshot(state: &AppState) -> Result<ArenaSnapshot, StatusCode> {
    let config = state.config.clone();

    tokio::task::spawn_blocking(move || ArenaSnapshot::load(&config))
        .await
        .map_err(|e| {
            error!("Snapshot task failed: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
