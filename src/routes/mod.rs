use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{jobs, pro, service_areas};
use crate::middleware::auth::{auth_middleware, require_pro};
use crate::middleware::rate_limit::{create_profile_governor, create_public_governor};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let public_governor = create_public_governor();
    let profile_governor = create_profile_governor();

    // Public browse routes (IP rate limited)
    let public_routes = Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/nearby", get(jobs::nearby_jobs))
        .route("/service-areas", get(service_areas::list_service_areas))
        .layer(public_governor);

    // Professional routes (requires auth + pro role, rate limited per profile)
    let pro_routes = Router::new()
        .route("/pro/jobs", get(pro::matched_jobs))
        .route(
            "/pro/service-area",
            get(pro::get_service_area).put(pro::update_service_area),
        )
        .route("/service-areas", post(service_areas::create_service_area))
        .route("/service-areas/{id}", delete(service_areas::delete_service_area))
        .layer(profile_governor)
        .layer(middleware::from_fn(require_pro))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Both halves register /service-areas; merge combines GET and POST
    Router::new()
        .nest("/api", public_routes.merge(pro_routes))
        .with_state(state)
}
