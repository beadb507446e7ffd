//! # Validated JSON Extractor
//!
//! Decodes the body as JSON, whatever its `Content-Type`, and runs its
//! [`Validate`] rules. Unreadable bodies, malformed JSON and rule violations
//! are all rejected as [`AppError::InvalidInput`], so clients always get the
//! `{code, message}` error shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use lib_core::dto::Validate;
use lib_core::AppError;
use serde::de::DeserializeOwned;
use tracing::debug;

/// `Json<T>` that has passed `T::validate`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!("[EXTRACT] Unreadable body: {}", rejection.body_text());
            AppError::InvalidInput(rejection.body_text())
        })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            debug!("[EXTRACT] Rejected body: {}", rejection.body_text());
            AppError::InvalidInput(rejection.body_text())
        })?;

        value.validate().map_err(|msg| {
            debug!("[EXTRACT] Validation failed: {}", msg);
            AppError::InvalidInput(msg)
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse, routing::post, Router};
    use lib_core::dto::UserRequest;
    use tower::ServiceExt;

    async fn echo(ValidatedJson(req): ValidatedJson<UserRequest>) -> String {
        req.name
    }

    async fn post_with(content_type: Option<&str>, body: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(echo));
        let mut req = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            req = req.header("content-type", content_type);
        }
        let response = app
            .oneshot(req.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        response.into_response().status()
    }

    async fn post_json(body: &'static str) -> StatusCode {
        post_with(Some("application/json"), body).await
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        assert_eq!(
            post_json(r#"{"name":"bill","password":"pw"}"#).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(post_json(r#"{"name":"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_failed_validation_is_bad_request() {
        assert_eq!(
            post_json(r#"{"name":"b1ll","password":"pw"}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_body_decoded_without_content_type() {
        let body = r#"{"name":"bill","password":"pw"}"#;

        assert_eq!(post_with(None, body).await, StatusCode::OK);
        assert_eq!(
            post_with(Some("application/x-www-form-urlencoded"), body).await,
            StatusCode::OK
        );
    }
}
