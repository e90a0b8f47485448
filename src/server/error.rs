//! `BeerError` 轉換為 HTTP 回應。

use crate::utils::error::BeerError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 錯誤回應的 JSON body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for BeerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = %status, code = self.code(), error = %self, "❌ Request failed");
        } else if status == StatusCode::NOT_ACCEPTABLE {
            tracing::warn!(status = %status, code = self.code(), error = %self, "⚠️ Upstream data rejected");
        } else {
            tracing::debug!(status = %status, error = %self, "Request returned no data");
        }

        let body = ErrorResponse {
            code: self.code(),
            message: self.user_friendly_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_response() {
        let response = BeerError::not_found("Beer not found: nope").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_shape_error_is_not_acceptable() {
        let response = BeerError::InvalidUpstreamShape {
            projection: "full",
            field: "ingredients".to_string(),
            reason: "is missing".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[test]
    fn test_upstream_outage_is_internal_error() {
        let response = BeerError::UpstreamUnavailable {
            message: "connection refused".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
