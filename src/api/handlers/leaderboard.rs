use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, load_snapshot};
use crate::api::models::LeaderboardResponse;

pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(status) => return status.into_response(),
    };

    Json(LeaderboardResponse {
        items: snapshot.leaderboard(),
        total_battles: snapshot.catalog.len(),
        warning: snapshot.warning,
    })
    .into_response()
}
