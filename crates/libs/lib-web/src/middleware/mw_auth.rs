//! # Authentication Middleware
//!
//! Guards every non-GET request whose path contains `companies`. Such a
//! request must carry `Authorization: Bearer <token>` with a valid, unexpired
//! token naming a user; anything else is answered with a plain-text 401.
//! Other requests pass through untouched.
//!
//! On success the token's [`Claims`] are inserted into the request
//! extensions:
//!
//! ```rust,ignore
//! async fn handler(Extension(claims): Extension<Claims>) -> String {
//!     format!("Hello, user {}!", claims.user_id)
//! }
//! ```
//!
//! [`Claims`]: lib_auth::Claims

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::services::CompanyService;

const GUARDED_PATH_FRAGMENT: &str = "companies";

/// Whether `method` on `path` needs a bearer token.
pub fn requires_token(method: &Method, path: &str) -> bool {
    *method != Method::GET && path.contains(GUARDED_PATH_FRAGMENT)
}

pub async fn require_auth(
    State(service): State<Arc<CompanyService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    if !requires_token(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.is_empty())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            (
                StatusCode::UNAUTHORIZED,
                "Missing Authorization Header".to_string(),
            )
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Authorization header is not a bearer token");
        (
            StatusCode::UNAUTHORIZED,
            "Error verifying JWT token: expected a Bearer token".to_string(),
        )
    })?;

    let claims = service.verify_token(token).map_err(|e| {
        warn!("[AUTH] JWT validation failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            format!("Error verifying JWT token: {e}"),
        )
    })?;

    debug!("[AUTH] Authenticated user {}", claims.user_id);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
