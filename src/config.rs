use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    /// Radius used for professionals who never set one.
    pub default_service_radius_km: f64,
    /// Page size for the plain job browse list.
    pub browse_limit: u64,
    /// How many open jobs are pulled before service-area filtering.
    pub candidate_limit: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            default_service_radius_km: positive_km(
                &env::var("DEFAULT_SERVICE_RADIUS_KM").unwrap_or_else(|_| "15".to_string()),
            )
            .expect("DEFAULT_SERVICE_RADIUS_KM must be a positive number"),
            browse_limit: env::var("BROWSE_LIMIT")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .expect("BROWSE_LIMIT must be a number"),
            candidate_limit: env::var("CANDIDATE_LIMIT")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("CANDIDATE_LIMIT must be a number"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse a distance that must be a finite, strictly positive number of km
fn positive_km(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite() && *km > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_radius_must_be_positive() {
        assert_eq!(positive_km("15"), Some(15.0));
        assert_eq!(positive_km(" 7.5 "), Some(7.5));
        assert_eq!(positive_km("0"), None);
        assert_eq!(positive_km("-3"), None);
        assert_eq!(positive_km("inf"), None);
        assert_eq!(positive_km("NaN"), None);
        assert_eq!(positive_km("fifteen"), None);
    }
}
