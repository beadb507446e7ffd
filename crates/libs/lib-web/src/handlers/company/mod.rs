//! # Company Handlers
//!
//! CRUD endpoints for companies. Mutations sit behind
//! [`require_auth`](crate::middleware::require_auth).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lib_core::dto::{CompanyCreateRequest, CompanyUpdateRequest};
use lib_core::model::Company;
use lib_core::{AppError, Result};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::extract::ValidatedJson;
use crate::services::CompanyService;

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| {
        debug!("[COMPANY] Bad id {:?}: {}", raw, e);
        AppError::InvalidInput(format!("invalid company id: {e}"))
    })
}

#[instrument(skip(service))]
pub async fn get_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<String>,
) -> Result<Json<Company>> {
    let id = parse_id(&id)?;
    let company = service.get_company(id).await?;
    Ok(Json(company))
}

#[instrument(skip(service, req), fields(name = %req.name))]
pub async fn create_company(
    State(service): State<Arc<CompanyService>>,
    ValidatedJson(req): ValidatedJson<CompanyCreateRequest>,
) -> Result<Json<Company>> {
    let company = service.create_company(req.into()).await?;
    Ok(Json(company))
}

/// `PUT /v1/companies`. The id travels in the body.
#[instrument(skip(service, req), fields(id = ?req.id))]
pub async fn update_company(
    State(service): State<Arc<CompanyService>>,
    ValidatedJson(req): ValidatedJson<CompanyUpdateRequest>,
) -> Result<Json<Company>> {
    let company = req
        .into_company()
        .ok_or_else(|| AppError::InvalidInput("id is required".to_string()))?;
    let updated = service.update_company(&company).await?;
    Ok(Json(updated))
}

/// Responds 200 with an empty body.
#[instrument(skip(service))]
pub async fn delete_company(
    State(service): State<Arc<CompanyService>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    service.delete_company(id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests;
