//! State services - Lettura degli stati e statistiche aggregate

use crate::core::{AppError, AppState, Claims};
use crate::dtos::{StateDTO, StateStatsDTO};
use crate::repositories::{Read, ReadAll};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state, claims), fields(user = %claims.username))]
pub async fn list_states(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<StateDTO>>, AppError> {
    debug!("Listing states");
    let states = state.state.read_all().await?;
    info!("Found {} states", states.len());
    Ok(Json(states.into_iter().map(StateDTO::from).collect()))
}

#[instrument(skip(state, claims), fields(user = %claims.username, state_id = %state_id))]
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Path(state_id): Path<i64>, // parametro dalla URL /states/{state_id}
    Extension(claims): Extension<Claims>,
) -> Result<Json<StateDTO>, AppError> {
    debug!("Fetching state by ID");
    let found = state.state.read(&state_id).await?.ok_or_else(|| {
        warn!("State not found");
        AppError::not_found("State not found")
    })?;
    Ok(Json(StateDTO::from(found)))
}

#[instrument(skip(state, claims), fields(user = %claims.username, state_id = %state_id))]
pub async fn get_state_stats(
    State(state): State<Arc<AppState>>,
    Path(state_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StateStatsDTO>, AppError> {
    debug!("Computing state statistics");
    // 1. Verificare che lo stato esista, altrimenti 404
    // 2. Sommare i contatori dei distretti (0 se lo stato non ha distretti)
    if state.state.read(&state_id).await?.is_none() {
        warn!("Stats requested for unknown state");
        return Err(AppError::not_found("State not found"));
    }

    let totals = state.district.stats_for_state(&state_id).await?;
    info!(total_cases = totals.total_cases, "State statistics computed");
    Ok(Json(StateStatsDTO::from(totals)))
}
