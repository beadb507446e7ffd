//! # Request Logging Middleware
//!
//! Logs method, URI, status and latency of every request, tagged with the
//! request id from [`RequestStamp`] when one is present. 5xx responses log at
//! `error`, 4xx at `warn`, the rest at `info`.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use super::RequestStamp;

macro_rules! log_response {
    ($level:ident, $request_id:expr, $method:expr, $uri:expr, $status:expr, $latency:expr) => {
        tracing::$level!(
            request_id = %$request_id,
            method = %$method,
            uri = %$uri,
            status = $status,
            latency_ms = $latency.as_millis(),
            "Method: {} | Request: {} | Status: {} | Latency: {:?}",
            $method,
            $uri,
            $status,
            $latency
        )
    };
}

pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();
    let code = status.as_u16();

    if status.is_server_error() {
        log_response!(error, request_id, method, uri, code, latency);
    } else if status.is_client_error() {
        log_response!(warn, request_id, method, uri, code, latency);
    } else {
        log_response!(info, request_id, method, uri, code, latency);
    }

    response
}
