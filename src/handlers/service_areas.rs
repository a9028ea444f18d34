use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{profile, service_area};
use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListServiceAreasQuery {
    pub fundi_id: Option<Uuid>,
}

/// List the named service areas of a fundi
pub async fn list_service_areas(
    State(state): State<AppState>,
    Query(query): Query<ListServiceAreasQuery>,
) -> AppResult<Json<Vec<service_area::Model>>> {
    let fundi_id = query
        .fundi_id
        .ok_or_else(|| AppError::BadRequest("fundi_id parameter is required".to_string()))?;

    let areas = service_area::Entity::find()
        .filter(service_area::Column::FundiId.eq(fundi_id))
        .order_by_asc(service_area::Column::AreaName)
        .all(state.db.as_ref())
        .await?;

    Ok(Json(areas))
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceAreaRequest {
    pub area_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Add a named service area for the calling fundi
pub async fn create_service_area(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateServiceAreaRequest>,
) -> AppResult<(StatusCode, Json<service_area::Model>)> {
    let area_name = payload.area_name.trim();
    if area_name.is_empty() {
        return Err(AppError::BadRequest("area_name is required".to_string()));
    }
    let point = Coordinate::new(payload.latitude, payload.longitude)?;

    profile::Entity::find_by_id(claims.sub)
        .one(state.db.as_ref())
        .await?
        .ok_or_else(|| AppError::Forbidden("User is not a professional".to_string()))?;

    let existing = service_area::Entity::find()
        .filter(service_area::Column::FundiId.eq(claims.sub))
        .filter(service_area::Column::AreaName.eq(area_name))
        .one(state.db.as_ref())
        .await?;

    if existing.is_some() {
        return Err(duplicate_area());
    }

    let area = service_area::ActiveModel {
        id: Set(Uuid::new_v4()),
        fundi_id: Set(claims.sub),
        area_name: Set(area_name.to_string()),
        latitude: Set(point.latitude()),
        longitude: Set(point.longitude()),
        created_at: Set(Utc::now().into()),
    };

    // A concurrent insert of the same name can slip past the check above;
    // the unique index has the final say.
    let created = service_area::Entity::insert(area)
        .on_conflict(
            OnConflict::columns([
                service_area::Column::FundiId,
                service_area::Column::AreaName,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_with_returning(state.db.as_ref())
        .await
        .map_err(insert_error)?;
    tracing::info!(fundi_id = %claims.sub, area = %created.area_name, "Service area added");

    Ok((StatusCode::CREATED, Json(created)))
}

fn duplicate_area() -> AppError {
    AppError::Conflict("This service area already exists".to_string())
}

/// With DO NOTHING on conflict, an insert that returns no row lost the race
/// for the (fundi_id, area_name) key.
fn insert_error(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotInserted | DbErr::RecordNotFound(_) => duplicate_area(),
        err if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            duplicate_area()
        }
        err => AppError::Database(err),
    }
}

/// Delete one of the caller's named service areas
pub async fn delete_service_area(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let area = service_area::Entity::find_by_id(id)
        .one(state.db.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("Service area not found".to_string()))?;

    if area.fundi_id != claims.sub {
        return Err(AppError::Forbidden(
            "You can only delete your own service areas".to_string(),
        ));
    }

    service_area::Entity::delete_by_id(id)
        .exec(state.db.as_ref())
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
