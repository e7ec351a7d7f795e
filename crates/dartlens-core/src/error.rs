//! 에러 타입 정의.
//!
//! 서비스 전체가 공유하는 에러 분류입니다. 모든 실패는 이 중 하나로
//! 분류되어 호출자까지 전달되며, HTTP 레이어는 분류별로 서로 다른
//! 상태 코드와 메시지를 렌더링합니다. 내부 재시도는 없습니다.

use thiserror::Error;

/// dartlens 공통 에러 타입.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 호출자 입력 오류 (400)
    #[error("{0}")]
    InvalidArgument(String),

    /// 대상 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 로컬 의존성(저장소, 설정) 사용 불가 (503)
    #[error("{0}")]
    Unavailable(String),

    /// 외부 API 응답 시간 초과 (408)
    #[error("요청 시간이 초과되었습니다.")]
    Timeout,

    /// 외부 API가 구조화된 오류 페이로드를 반환 (400, status/message 전달)
    #[error("DART API 오류: {message}")]
    UpstreamRejected { status: String, message: String },

    /// 외부 API가 비정상 HTTP 상태를 반환 (상태 코드 미러링)
    #[error("API 요청 실패: {http_status}")]
    UpstreamError { http_status: u16 },

    /// 그 외 내부 오류 (500)
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// 호출자 입력 오류 생성 헬퍼.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// 대상 없음 에러 생성 헬퍼.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 의존성 사용 불가 에러 생성 헬퍼.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CoreError>;
