//! API 에러 응답.
//!
//! 공통 에러 분류(`CoreError`)를 HTTP 상태 코드와 `{error, status?}`
//! JSON envelope으로 변환합니다. 분류마다 구분되는 메시지를 그대로
//! 노출하며, 더 구체적인 원인을 아는 경우 포괄적인 메시지로 뭉개지
//! 않습니다.

use axum::{http::StatusCode, Json};
use dartlens_core::CoreError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API 오류 envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// 사용자 표시용 오류 메시지
    pub error: String,
    /// 업스트림 DART 상태 코드 (업스트림 거절 시에만)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiError {
    /// 메시지만 있는 오류 생성.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: None,
        }
    }

    /// 업스트림 상태 코드를 동반한 오류 생성.
    pub fn with_status(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: Some(status.into()),
        }
    }
}

/// 핸들러 실패 반환 타입.
pub type ApiFailure = (StatusCode, Json<ApiError>);

/// 에러 분류별 HTTP 매핑.
///
/// - `InvalidArgument` → 400, `NotFound` → 404, `Unavailable` → 503
/// - `Timeout` → 408, `UpstreamRejected` → 400 (+ 업스트림 status)
/// - `UpstreamError` → 업스트림 상태 코드 미러링, `Internal` → 500
pub fn map_core_error(e: CoreError) -> ApiFailure {
    match e {
        CoreError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, Json(ApiError::new(msg))),
        CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ApiError::new(msg))),
        CoreError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, Json(ApiError::new(msg))),
        CoreError::Timeout => (
            StatusCode::REQUEST_TIMEOUT,
            Json(ApiError::new("요청 시간이 초과되었습니다.")),
        ),
        CoreError::UpstreamRejected { status, message } => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_status(
                format!("DART API 오류: {}", message),
                status,
            )),
        ),
        CoreError::UpstreamError { http_status } => (
            StatusCode::from_u16(http_status).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(ApiError::new(format!("API 요청 실패: {}", http_status))),
        ),
        CoreError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::new(msg))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_rejection_keeps_status_and_message() {
        let (code, Json(body)) = map_core_error(CoreError::UpstreamRejected {
            status: "020".to_string(),
            message: "사용한도를 초과하였습니다.".to_string(),
        });
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert_eq!(body.status.as_deref(), Some("020"));
        assert!(body.error.contains("사용한도"));
    }

    #[test]
    fn upstream_http_status_is_mirrored() {
        let (code, _) = map_core_error(CoreError::UpstreamError { http_status: 502 });
        assert_eq!(code, StatusCode::BAD_GATEWAY);
        let (code, _) = map_core_error(CoreError::UpstreamError { http_status: 404 });
        assert_eq!(code, StatusCode::NOT_FOUND);
    }

    #[test]
    fn taxonomy_maps_to_distinct_statuses() {
        let cases = [
            (CoreError::invalid_argument("x"), StatusCode::BAD_REQUEST),
            (CoreError::not_found("x"), StatusCode::NOT_FOUND),
            (CoreError::unavailable("x"), StatusCode::SERVICE_UNAVAILABLE),
            (CoreError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (CoreError::Internal("x".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(map_core_error(err).0, expected);
        }
    }
}
