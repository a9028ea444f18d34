use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor},
    GovernorError, GovernorLayer,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::utils::jwt::Claims;

type Middleware = governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>;

/// IP-keyed limiter for unauthenticated routes
pub type PublicGovernorLayer = GovernorLayer<PeerIpKeyExtractor, Middleware, Body>;

/// Profile-keyed limiter for authenticated routes
pub type ProfileGovernorLayer = GovernorLayer<ProfileIdExtractor, Middleware, Body>;

/// Keys requests by the profile id that auth_middleware put in the extensions
#[derive(Debug, Clone, Copy)]
pub struct ProfileIdExtractor;

impl KeyExtractor for ProfileIdExtractor {
    type Key = Uuid;

    fn extract<T>(&self, req: &axum::http::Request<T>) -> Result<Self::Key, GovernorError> {
        req.extensions()
            .get::<Claims>()
            .map(|claims| claims.sub)
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

/// Public browse routes: 100 per minute per IP, one token every 600ms
pub fn create_public_governor() -> PublicGovernorLayer {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(600)
            .burst_size(100)
            .finish()
            .expect("public governor config is valid"),
    );

    GovernorLayer::new(config).error_handler(rate_limit_error_handler)
}

/// Professional routes: 300 per minute per profile, one token every 200ms
pub fn create_profile_governor() -> ProfileGovernorLayer {
    let config = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(200)
            .burst_size(300)
            .key_extractor(ProfileIdExtractor)
            .finish()
            .expect("profile governor config is valid"),
    );

    GovernorLayer::new(config).error_handler(rate_limit_error_handler)
}

pub fn rate_limit_error_handler(err: GovernorError) -> Response<Body> {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => AppError::RateLimitExceeded(format!(
            "Too many requests, retry in {} seconds",
            wait_time
        ))
        .into_response(),
        GovernorError::UnableToExtractKey => {
            AppError::Internal("Rate limiter could not identify the caller".to_string())
                .into_response()
        }
        GovernorError::Other { msg, .. } => AppError::Internal(format!(
            "Rate limiter failure: {}",
            msg.unwrap_or_default()
        ))
        .into_response(),
    }
}

/// Middleware to log request outcomes, rate-limit rejections in particular
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            "Rate limited"
        );
    } else if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request failed"
        );
    } else {
        tracing::debug!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request completed"
        );
    }

    response
}
