use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::db;
use crate::errors::AppError;
use crate::models::reports::{
    ClientReqCountRow, ClientRow, RequirementRow, RequirementSummaryRow, RequirementTotalsRow,
    StageStatRow,
};
use crate::reports::queries;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RequirementStatsResponse {
    pub requirement: RequirementRow,
    pub stats: Vec<StageStatRow>,
    pub total_candidates: i64,
}

#[derive(Debug, Serialize)]
pub struct CandidateTotals {
    pub total: i64,
}

/// Selections count, shaped as `{"length": n}` because the dashboard reads
/// `selections.length`.
#[derive(Debug, Serialize)]
pub struct SelectionCount {
    pub length: i64,
}

#[derive(Debug, Serialize)]
pub struct GlobalStatsResponse {
    pub requirements: RequirementTotalsRow,
    pub candidates: CandidateTotals,
    pub selections: SelectionCount,
    pub client_stats: Vec<ClientReqCountRow>,
    /// Always empty: the schema cannot identify individual selections, only
    /// count the COMPLETED approximation above.
    pub selections_list: Vec<Value>,
}

/// GET /api/reports/clients
pub async fn get_clients(State(state): State<AppState>) -> Result<Json<Vec<ClientRow>>, AppError> {
    let mut conn = db::connect(&state.config.db)
        .await
        .map_err(|_| AppError::DbUnavailable)?;
    let clients = queries::active_clients(&mut conn).await?;
    Ok(Json(clients))
}

/// GET /api/reports/client/:client_id/requirements
pub async fn get_client_requirements(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<Json<Vec<RequirementSummaryRow>>, AppError> {
    let mut conn = db::connect(&state.config.db)
        .await
        .map_err(|_| AppError::DbUnavailable)?;
    let requirements = queries::client_requirements(&mut conn, client_id).await?;
    Ok(Json(requirements))
}

/// GET /api/reports/requirement/:req_id/stats
pub async fn get_requirement_stats(
    State(state): State<AppState>,
    Path(req_id): Path<i32>,
) -> Result<Json<RequirementStatsResponse>, AppError> {
    let mut conn = db::connect(&state.config.db)
        .await
        .map_err(|_| AppError::DbUnavailable)?;

    let requirement = queries::requirement_by_id(&mut conn, req_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Requirement not found".to_string()))?;

    let stats = queries::requirement_stage_stats(&mut conn, req_id).await?;
    let total_candidates = queries::requirement_candidate_total(&mut conn, req_id).await?;

    Ok(Json(RequirementStatsResponse {
        requirement,
        stats,
        total_candidates,
    }))
}

/// GET /api/reports/stats
pub async fn get_general_stats(
    State(state): State<AppState>,
) -> Result<Json<GlobalStatsResponse>, AppError> {
    let mut conn = db::connect(&state.config.db)
        .await
        .map_err(|_| AppError::DbUnavailable)?;

    let requirements = queries::requirement_totals(&mut conn).await?;
    let candidates = queries::candidate_total(&mut conn).await?;
    let selections = queries::selections_count(&mut conn).await?;
    let client_stats = queries::client_requirement_counts(&mut conn).await?;

    Ok(Json(GlobalStatsResponse {
        requirements,
        candidates: CandidateTotals { total: candidates },
        selections: SelectionCount { length: selections },
        client_stats,
        selections_list: Vec::new(),
    }))
}
