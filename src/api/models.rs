use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rating::LeaderboardEntry;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub items: Vec<LeaderboardEntry>,
    pub total_battles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleListItem {
    pub battle_id: String,
    pub model_a: String,
    pub model_b: String,
    pub outcome: String,
    pub started_at: DateTime<Utc>,
    pub detail_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}
