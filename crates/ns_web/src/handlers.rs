use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use ns_core::{ProcessingError, SummaryRequest, SummaryResponse};
use crate::AppState;

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: &'static str,
}

/// Every failure leaves the service as the same 500.
#[derive(Debug)]
pub struct ApiError(pub ProcessingError);

impl From<ProcessingError> for ApiError {
    fn from(err: ProcessingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { detail: self.0.detail() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!("Error processing article: invalid request body: {}", rejection.body_text());
        ApiError(ProcessingError)
    })?;

    let response = state
        .pipeline
        .handle_summarize_request(&request.url, &request.target_language)
        .await?;
    Ok(Json(response))
}
