use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::job::{self, JobStatus};
use crate::error::{AppError, AppResult};
use crate::utils::geo::{format_distance, Coordinate, RankedEntity, ServiceArea};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub location: String,
    pub budget_range: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

impl From<&job::Model> for JobResponse {
    fn from(j: &job::Model) -> Self {
        Self {
            id: j.id,
            client_id: j.client_id,
            title: j.title.clone(),
            category: j.category.clone(),
            description: j.description.clone(),
            location: j.location.clone(),
            budget_range: j.budget_range.clone(),
            latitude: j.latitude,
            longitude: j.longitude,
            created_at: j.created_at.with_timezone(&Utc),
            distance_km: None,
            distance_label: None,
        }
    }
}

impl From<RankedEntity<&job::Model>> for JobResponse {
    fn from(ranked: RankedEntity<&job::Model>) -> Self {
        Self {
            distance_km: Some(ranked.distance_km),
            distance_label: Some(format_distance(ranked.distance_km)),
            ..Self::from(ranked.entity)
        }
    }
}

/// Open jobs, newest first
pub async fn open_jobs(db: &DatabaseConnection, limit: u64) -> AppResult<Vec<job::Model>> {
    let jobs = job::Entity::find()
        .filter(job::Column::Status.eq(JobStatus::Open))
        .order_by_desc(job::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(jobs)
}

/// Narrow candidates to the service area, nearest first, with display labels
pub fn match_jobs(jobs: &[job::Model], area: &ServiceArea) -> Vec<JobResponse> {
    let matched = area.matching(jobs);

    tracing::debug!(
        candidates = jobs.len(),
        matched = matched.len(),
        radius_km = area.radius_km,
        "Matched jobs to service area"
    );

    matched.into_iter().map(JobResponse::from).collect()
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub limit: Option<u64>,
}

/// List open jobs for browsing
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let limit = query
        .limit
        .unwrap_or(state.config.browse_limit)
        .min(state.config.candidate_limit);

    let jobs = open_jobs(state.db.as_ref(), limit).await?;
    Ok(Json(jobs.iter().map(JobResponse::from).collect()))
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: Option<f64>,
}

/// Open jobs around an arbitrary point, nearest first
pub async fn nearby_jobs(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> AppResult<Json<Vec<JobResponse>>> {
    let center = Coordinate::new(query.lat, query.lng)?;
    let radius_km = query
        .radius_km
        .unwrap_or(state.config.default_service_radius_km);

    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(AppError::BadRequest(
            "radius_km must be a positive number".to_string(),
        ));
    }

    let jobs = open_jobs(state.db.as_ref(), state.config.candidate_limit).await?;
    Ok(Json(match_jobs(&jobs, &ServiceArea::new(center, radius_km))))
}
