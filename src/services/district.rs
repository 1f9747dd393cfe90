//! District services - CRUD sui distretti e risoluzione dello stato di appartenenza

use crate::core::{AppError, AppState, Claims, ValidatedJson};
use crate::dtos::{CreateDistrictDTO, DistrictDTO, DistrictDetailsDTO, UpdateDistrictDTO};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Il distretto deve riferirsi a uno stato esistente
async fn ensure_state_exists(state: &AppState, state_id: i64) -> Result<(), AppError> {
    if state.state.read(&state_id).await?.is_none() {
        warn!("District references unknown state {}", state_id);
        return Err(AppError::validation(format!("state {} does not exist", state_id)));
    }
    Ok(())
}

#[instrument(skip(state, claims, body), fields(user = %claims.username, state_id = %body.state_id))]
pub async fn create_district(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>, // ottenuto dall'autenticazione tramite token jwt
    ValidatedJson(body): ValidatedJson<CreateDistrictDTO>,
) -> Result<&'static str, AppError> {
    debug!("Creating district");
    ensure_state_exists(&state, body.state_id).await?;

    let district = state.district.create(&body).await?;
    info!("District {} added", district.district_id);
    Ok("District Successfully Added")
}

#[instrument(skip(state, claims), fields(user = %claims.username, district_id = %district_id))]
pub async fn get_district(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DistrictDTO>, AppError> {
    debug!("Fetching district by ID");
    let district = state.district.read(&district_id).await?.ok_or_else(|| {
        warn!("District not found");
        AppError::not_found("District not found")
    })?;
    Ok(Json(DistrictDTO::from(district)))
}

#[instrument(skip(state, claims, body), fields(user = %claims.username, district_id = %district_id))]
pub async fn update_district(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<i64>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(body): ValidatedJson<UpdateDistrictDTO>,
) -> Result<&'static str, AppError> {
    debug!("Updating district");
    ensure_state_exists(&state, body.state_id).await?;

    state
        .district
        .update(&district_id, &body)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("District not found"),
            other => AppError::from(other),
        })?;

    info!("District updated");
    Ok("District Details Updated")
}

#[instrument(skip(state, claims), fields(user = %claims.username, district_id = %district_id))]
pub async fn delete_district(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<&'static str, AppError> {
    debug!("Deleting district");
    state.district.delete(&district_id).await?;
    info!("District removed");
    Ok("District Removed")
}

#[instrument(skip(state, claims), fields(user = %claims.username, district_id = %district_id))]
pub async fn get_district_details(
    State(state): State<Arc<AppState>>,
    Path(district_id): Path<i64>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DistrictDetailsDTO>, AppError> {
    // 1. Leggere il distretto; se manca, 404 senza cercare lo stato
    // 2. Leggere lo stato del distretto; se manca, 404
    // 3. Ritornare il solo nome dello stato
    debug!("Resolving state name for district");
    let district = state.district.read(&district_id).await?.ok_or_else(|| {
        warn!("District not found");
        AppError::not_found("District not found")
    })?;

    let owner = state.state.read(&district.state_id).await?.ok_or_else(|| {
        warn!("State {} of district not found", district.state_id);
        AppError::not_found("State not found")
    })?;

    Ok(Json(DistrictDetailsDTO {
        state_name: owner.state_name,
    }))
}
