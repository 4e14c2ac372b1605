use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    battles::{get_battle_detail, get_battles},
    leaderboard::get_leaderboard,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/battles", get(get_battles))
        .route("/api/battles/:battle_id", get(get_battle_detail))
        .with_state(state)
}
