use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::warn;

use super::domain::{PointsResponse, ProcessResponse, Receipt, ReceiptId};
use super::service::ReceiptService;
use super::store::ReceiptStore;

const RECEIPTS_PREFIX: &str = "/receipts/";

/// Request-level failures, rendered as a status code and a plain-text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReceiptApiError {
    #[error("Invalid method")]
    MethodNotAllowed,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Invalid endpoint")]
    InvalidEndpoint,
    #[error("Receipt not found")]
    ReceiptNotFound,
    #[error("Not found")]
    UnknownRoute,
}

impl ReceiptApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ReceiptApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ReceiptApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ReceiptApiError::InvalidEndpoint
            | ReceiptApiError::ReceiptNotFound
            | ReceiptApiError::UnknownRoute => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ReceiptApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Router builder exposing receipt submission and points lookup.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route(
            "/receipts/process",
            post(process_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/receipts/:receipt_id/points",
            get(points_handler::<S>).fallback(method_not_allowed),
        )
        .fallback(unmatched_handler::<S>)
        .with_state(service)
}

/// Decodes the body regardless of Content-Type so every decode failure is a 400.
pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ReceiptApiError>
where
    S: ReceiptStore + 'static,
{
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "rejecting receipt payload");
        ReceiptApiError::InvalidInput
    })?;

    let id = service.process(&receipt);
    Ok(Json(ProcessResponse { id }))
}

/// `get` also routes HEAD here, so the method is checked explicitly. A decoded
/// id containing `/` spans more than one path segment and is not a valid shape.
pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    method: Method,
    Path(receipt_id): Path<String>,
) -> Result<Json<PointsResponse>, ReceiptApiError>
where
    S: ReceiptStore + 'static,
{
    if method != Method::GET {
        return Err(ReceiptApiError::MethodNotAllowed);
    }
    if receipt_id.contains('/') {
        return Err(ReceiptApiError::InvalidEndpoint);
    }

    lookup_points(&service, &ReceiptId(receipt_id))
}

/// Catches `/receipts/...` shapes the typed routes do not match. The method is
/// checked before the path shape.
pub(crate) async fn unmatched_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    method: Method,
    uri: Uri,
) -> Result<Json<PointsResponse>, ReceiptApiError>
where
    S: ReceiptStore + 'static,
{
    let Some(rest) = uri.path().strip_prefix(RECEIPTS_PREFIX) else {
        return Err(ReceiptApiError::UnknownRoute);
    };

    if method != Method::GET {
        return Err(ReceiptApiError::MethodNotAllowed);
    }

    let receipt_id = points_path_id(rest).ok_or(ReceiptApiError::InvalidEndpoint)?;
    lookup_points(&service, &ReceiptId::from(receipt_id))
}

async fn method_not_allowed() -> ReceiptApiError {
    ReceiptApiError::MethodNotAllowed
}

fn lookup_points<S>(
    service: &ReceiptService<S>,
    receipt_id: &ReceiptId,
) -> Result<Json<PointsResponse>, ReceiptApiError>
where
    S: ReceiptStore + 'static,
{
    service
        .points(receipt_id)
        .map(|points| Json(PointsResponse { points }))
        .ok_or(ReceiptApiError::ReceiptNotFound)
}

/// `{id}/points` yields `id` (possibly empty); any other shape yields `None`.
pub(crate) fn points_path_id(rest: &str) -> Option<&str> {
    let mut segments = rest.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(receipt_id), Some("points"), None) => Some(receipt_id),
        _ => None,
    }
}
