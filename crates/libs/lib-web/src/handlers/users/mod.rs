//! # User Handlers
//!
//! Registration and login. Login answers with the signed token in `hash` and
//! the token's expiry instant (RFC 3339) in the `X-Expires-After` header.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue},
    Json,
};
use lib_core::dto::{UserCreateResponse, UserLoginResponse, UserRequest};
use lib_core::{AppError, Result};
use lib_utils::expires_after;
use tracing::instrument;

use crate::extract::ValidatedJson;
use crate::services::CompanyService;

pub const EXPIRES_AFTER_HEADER: &str = "x-expires-after";

#[instrument(skip(service, req), fields(name = %req.name))]
pub async fn create_user(
    State(service): State<Arc<CompanyService>>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> Result<Json<UserCreateResponse>> {
    let user = service.create_user(&req.name, &req.password).await?;
    Ok(Json(UserCreateResponse {
        id: user.id,
        name: user.name,
    }))
}

#[instrument(skip(service, req), fields(name = %req.name))]
pub async fn login(
    State(service): State<Arc<CompanyService>>,
    ValidatedJson(req): ValidatedJson<UserRequest>,
) -> Result<(HeaderMap, Json<UserLoginResponse>)> {
    let user = service.login(&req.name, &req.password).await?;
    let hash = service.create_token(&user.id.to_string())?;

    let mut headers = HeaderMap::new();
    let expires = HeaderValue::from_str(&expires_after(service.token_ttl_secs()))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    headers.insert(EXPIRES_AFTER_HEADER, expires);

    Ok((headers, Json(UserLoginResponse { hash })))
}

#[cfg(test)]
mod tests;
