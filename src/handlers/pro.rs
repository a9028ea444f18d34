use axum::{extract::State, Extension, Json};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::entities::profile;
use crate::error::{AppError, AppResult};
use crate::handlers::jobs::{match_jobs, open_jobs, JobResponse};
use crate::utils::geo::{Coordinate, ServiceArea};
use crate::utils::jwt::Claims;
use crate::AppState;

/// Bounds offered by the service-area picker
pub const MIN_SERVICE_RADIUS_KM: f64 = 1.0;
pub const MAX_SERVICE_RADIUS_KM: f64 = 100.0;

async fn find_profile(db: &DatabaseConnection, claims: &Claims) -> AppResult<profile::Model> {
    profile::Entity::find_by_id(claims.sub)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

/// Resolve the stored service area, falling back to the default radius when
/// none (or a non-positive one) was saved. `None` when no center is set.
pub fn service_area_of(
    profile: &profile::Model,
    default_radius_km: f64,
) -> AppResult<Option<ServiceArea>> {
    let (Some(lat), Some(lng)) = (profile.service_latitude, profile.service_longitude) else {
        return Ok(None);
    };

    let radius_km = profile
        .service_radius_km
        .filter(|r| *r > 0.0)
        .unwrap_or(default_radius_km);

    Ok(Some(ServiceArea::new(Coordinate::new(lat, lng)?, radius_km)))
}

/// Jobs in the professional's service area, nearest first. Without a saved
/// service location this is the plain browse list.
pub async fn matched_jobs(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let profile = find_profile(state.db.as_ref(), &claims).await?;

    let Some(area) = service_area_of(&profile, state.config.default_service_radius_km)? else {
        tracing::debug!(profile_id = %profile.id, "No service area set, returning browse list");
        let jobs = open_jobs(state.db.as_ref(), state.config.browse_limit).await?;
        return Ok(Json(jobs.iter().map(JobResponse::from).collect()));
    };

    let jobs = open_jobs(state.db.as_ref(), state.config.candidate_limit).await?;
    Ok(Json(match_jobs(&jobs, &area)))
}

#[derive(Debug, Serialize)]
pub struct ServiceAreaResponse {
    pub service_latitude: Option<f64>,
    pub service_longitude: Option<f64>,
    pub service_radius_km: f64,
}

/// Current service area; the radius is reported with the default applied
pub async fn get_service_area(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<ServiceAreaResponse>> {
    let profile = find_profile(state.db.as_ref(), &claims).await?;

    Ok(Json(ServiceAreaResponse {
        service_latitude: profile.service_latitude,
        service_longitude: profile.service_longitude,
        service_radius_km: profile
            .service_radius_km
            .filter(|r| *r > 0.0)
            .unwrap_or(state.config.default_service_radius_km),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceAreaRequest {
    pub service_latitude: f64,
    pub service_longitude: f64,
    pub service_radius_km: f64,
}

/// Set the professional's service center and radius
pub async fn update_service_area(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateServiceAreaRequest>,
) -> AppResult<Json<ServiceAreaResponse>> {
    let center = Coordinate::new(payload.service_latitude, payload.service_longitude)?;

    if !(MIN_SERVICE_RADIUS_KM..=MAX_SERVICE_RADIUS_KM).contains(&payload.service_radius_km) {
        return Err(AppError::BadRequest(format!(
            "Service radius must be between {} and {} km",
            MIN_SERVICE_RADIUS_KM, MAX_SERVICE_RADIUS_KM
        )));
    }

    let profile = find_profile(state.db.as_ref(), &claims).await?;

    let mut active: profile::ActiveModel = profile.into();
    active.service_latitude = Set(Some(center.latitude()));
    active.service_longitude = Set(Some(center.longitude()));
    active.service_radius_km = Set(Some(payload.service_radius_km));
    let updated = active.update(state.db.as_ref()).await?;

    tracing::info!(
        profile_id = %updated.id,
        lat = center.latitude(),
        lng = center.longitude(),
        radius_km = payload.service_radius_km,
        "Service area updated"
    );

    Ok(Json(ServiceAreaResponse {
        service_latitude: updated.service_latitude,
        service_longitude: updated.service_longitude,
        service_radius_km: payload.service_radius_km,
    }))
}
