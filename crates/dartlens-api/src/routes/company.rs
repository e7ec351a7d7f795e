//! 회사 조회 endpoint.
//!
//! 회사 디렉터리에 대한 읽기 전용 조회입니다. 검색은 회사명
//! 부분 일치(접두사 우선), 단건 조회는 종목코드 완전 일치입니다.
//! 입력 검증이 의존성 확인보다 먼저입니다 — 검색어가 없으면 저장소
//! 설정 여부와 무관하게 400을 반환합니다.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use dartlens_core::{Company, CoreError};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{map_core_error, ApiFailure},
    state::AppState,
};
use dartlens_data::repository::company::DEFAULT_SEARCH_LIMIT;

/// 회사 검색 요청.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchCompanyQuery {
    /// 검색어 (회사명 부분 일치)
    pub query: Option<String>,
}

/// 회사 검색 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchCompanyResponse {
    pub success: bool,
    /// 일치한 회사 목록 (최대 10건, 없으면 빈 목록)
    pub results: Vec<Company>,
}

/// 회사명 검색.
///
/// GET /api/search-company?query=삼성
#[utoipa::path(
    get,
    path = "/api/search-company",
    tag = "company",
    params(SearchCompanyQuery),
    responses(
        (status = 200, description = "검색 성공", body = SearchCompanyResponse),
        (status = 400, description = "검색어 누락", body = crate::error::ApiError),
        (status = 503, description = "저장소 사용 불가", body = crate::error::ApiError)
    )
)]
pub async fn search_company(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchCompanyQuery>,
) -> Result<Json<SearchCompanyResponse>, ApiFailure> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(map_core_error(CoreError::invalid_argument(
            "검색어를 입력해주세요.",
        )));
    }

    let repo = state.company_repo().map_err(map_core_error)?;
    let results = repo
        .search_by_name(&query, DEFAULT_SEARCH_LIMIT)
        .await
        .map_err(map_core_error)?;

    debug!(query, count = results.len(), "회사 검색");
    Ok(Json(SearchCompanyResponse {
        success: true,
        results,
    }))
}

/// 종목코드 조회 요청.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CompanyByCodeQuery {
    /// 종목코드 (6자리)
    pub stock_code: Option<String>,
}

/// 회사 단건 조회 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub success: bool,
    pub company: Company,
}

/// 종목코드로 회사 조회.
///
/// GET /api/company-by-code?stock_code=005930
#[utoipa::path(
    get,
    path = "/api/company-by-code",
    tag = "company",
    params(CompanyByCodeQuery),
    responses(
        (status = 200, description = "조회 성공", body = CompanyResponse),
        (status = 400, description = "종목코드 누락", body = crate::error::ApiError),
        (status = 404, description = "해당 회사 없음", body = crate::error::ApiError),
        (status = 503, description = "저장소 사용 불가", body = crate::error::ApiError)
    )
)]
pub async fn company_by_code(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompanyByCodeQuery>,
) -> Result<Json<CompanyResponse>, ApiFailure> {
    let stock_code = params.stock_code.unwrap_or_default();
    if stock_code.trim().is_empty() {
        return Err(map_core_error(CoreError::invalid_argument(
            "종목코드를 입력해주세요.",
        )));
    }

    let repo = state.company_repo().map_err(map_core_error)?;
    let company = repo
        .get_by_stock_code(&stock_code)
        .await
        .map_err(map_core_error)?;

    Ok(Json(CompanyResponse {
        success: true,
        company,
    }))
}

/// 고유번호로 회사 조회.
///
/// GET /api/company/00126380
#[utoipa::path(
    get,
    path = "/api/company/{corp_code}",
    tag = "company",
    params(
        ("corp_code" = String, Path, description = "고유번호 (8자리)")
    ),
    responses(
        (status = 200, description = "조회 성공", body = CompanyResponse),
        (status = 404, description = "해당 회사 없음", body = crate::error::ApiError),
        (status = 503, description = "저장소 사용 불가", body = crate::error::ApiError)
    )
)]
pub async fn company_by_corp_code(
    State(state): State<Arc<AppState>>,
    Path(corp_code): Path<String>,
) -> Result<Json<CompanyResponse>, ApiFailure> {
    let repo = state.company_repo().map_err(map_core_error)?;
    let company = repo
        .get_by_corp_code(&corp_code)
        .await
        .map_err(map_core_error)?;

    Ok(Json(CompanyResponse {
        success: true,
        company,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{error::ApiError, routes::create_api_router, state::empty_test_state};

    async fn error_body(response: axum::response::Response) -> ApiError {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_query_is_bad_request() {
        for uri in ["/search-company", "/search-company?query=%20%20"] {
            let app = create_api_router(Arc::new(empty_test_state()));
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = error_body(response).await;
            assert_eq!(body.error, "검색어를 입력해주세요.");
        }
    }

    #[tokio::test]
    async fn missing_stock_code_is_bad_request() {
        let app = create_api_router(Arc::new(empty_test_state()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/company-by-code")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert_eq!(body.error, "종목코드를 입력해주세요.");
    }

    #[tokio::test]
    async fn corp_code_lookup_needs_store() {
        let app = create_api_router(Arc::new(empty_test_state()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/company/00126380")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn store_unavailable_is_distinct_from_not_found() {
        let app = create_api_router(Arc::new(empty_test_state()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/company-by-code?stock_code=005930")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = error_body(response).await;
        assert!(body.error.contains("데이터베이스"));
    }
}
