#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use fundi_backend::entities::job::{self, JobStatus};
use fundi_backend::entities::profile::{self, ProfileRole};
use fundi_backend::{AppState, Config};

pub const SECRET: &str = "test-secret";
pub const NAIROBI: (f64, f64) = (-1.2921, 36.8219);

pub fn state(db: DatabaseConnection) -> AppState {
    AppState {
        db: Arc::new(db),
        config: Config {
            database_url: String::new(),
            jwt_secret: SECRET.to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            default_service_radius_km: 15.0,
            browse_limit: 50,
            candidate_limit: 500,
        },
    }
}

/// Latitude `km` kilometers due north of Nairobi.
pub fn lat_north(km: f64) -> f64 {
    NAIROBI.0 + (km / 6371.0_f64).to_degrees()
}

pub fn job_at(title: &str, latitude: f64, longitude: f64, age_minutes: i64) -> job::Model {
    let created = Utc::now() - Duration::minutes(age_minutes);
    job::Model {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        title: title.to_string(),
        category: "plumbing".to_string(),
        description: None,
        location: "Nairobi".to_string(),
        budget_range: Some("1000-5000".to_string()),
        status: JobStatus::Open,
        latitude,
        longitude,
        created_at: created.with_timezone(&FixedOffset::east_opt(3 * 3600).unwrap()),
    }
}

pub fn pro_profile(
    id: Uuid,
    center: Option<(f64, f64)>,
    radius_km: Option<f64>,
) -> profile::Model {
    profile::Model {
        id,
        full_name: "Wanjiru Fundi".to_string(),
        role: ProfileRole::Pro,
        service_latitude: center.map(|c| c.0),
        service_longitude: center.map(|c| c.1),
        service_radius_km: radius_km,
        created_at: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap(),
    }
}
