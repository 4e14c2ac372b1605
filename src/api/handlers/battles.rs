use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use urlencoding::encode;

use super::{AppState, BattleParams, load_snapshot};
use crate::api::models::{BattleListItem, PaginatedResponse};
use crate::domain::{BattleSummary, project_for_display};

pub async fn get_battles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BattleParams>,
) -> impl IntoResponse {
    let settings = &state.config.server;
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(settings.default_page_size)
        .clamp(1, settings.max_page_size);
    let offset = (page - 1).saturating_mul(page_size);

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(status) => return status.into_response(),
    };
    let timeline = snapshot.timeline();
    let total = timeline.len();

    let items: Vec<BattleListItem> = timeline
        .into_iter()
        .skip(offset)
        .take(page_size)
        .map(to_list_item)
        .collect();

    Json(PaginatedResponse {
        items,
        total,
        page,
        page_size,
    })
    .into_response()
}

pub async fn get_battle_detail(
    State(state): State<Arc<AppState>>,
    Path(battle_id): Path<String>,
) -> impl IntoResponse {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(status) => return status.into_response(),
    };

    match snapshot.catalog.find_battle(&battle_id) {
        Some(battle) => Json(project_for_display(battle)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("Battle {} not found", battle_id),
        )
            .into_response(),
    }
}

fn to_list_item(summary: BattleSummary) -> BattleListItem {
    let detail_url = format!("/api/battles/{}", encode(&summary.battle_id));

    BattleListItem {
        battle_id: summary.battle_id,
        model_a: summary.model_a,
        model_b: summary.model_b,
        outcome: summary.outcome,
        started_at: summary.started_at,
        detail_url,
    }
}
