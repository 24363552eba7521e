// API error type mapped onto HTTP responses
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("records lookup failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => {
                tracing::error!("records API failure: {:#}", e);
                (StatusCode::BAD_GATEWAY, "records API unavailable").into_response()
            }
        }
    }
}
