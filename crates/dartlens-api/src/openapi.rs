//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dartlens_core::{Company, FilingLineItem, FilingResponse, FinancialRatios, ReportOption};

use crate::error::ApiError;
use crate::routes::{
    company::{CompanyResponse, SearchCompanyResponse},
    financial::{FinancialDataResponse, LatestFilingResponse, RatiosResponse, ReportOptionsResponse},
};

/// DartLens API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DartLens API",
        version = "0.3.0",
        description = r#"
# DartLens 재무제표 조회 API

DART(전자공시시스템) 공시 기반 기업 재무제표 조회 백엔드입니다.

## 주요 기능

- **회사 검색**: 회사명 부분 일치 검색 (접두사 우선 정렬)
- **재무제표 조회**: DART 단일회사 주요계정 공시 통과 조회
- **재무비율**: 수익성/안정성/활동성 비율 서버 계산
- **보고서 옵션**: 공시 일정 기반 선택 가능 보고서 산출

## 환경변수

- `DART_API_KEY`: DART 오픈API 인증키 (재무제표 엔드포인트 필수)
- `DATABASE_URL`: 회사 디렉터리 PostgreSQL (회사 검색 엔드포인트 필수)
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "company", description = "회사 디렉터리 - 검색 및 단건 조회"),
        (name = "financial", description = "재무제표 - 공시 조회, 재무비율, 보고서 옵션")
    ),
    components(
        schemas(
            ApiError,
            Company,
            SearchCompanyResponse,
            CompanyResponse,
            FilingLineItem,
            FilingResponse,
            FinancialDataResponse,
            LatestFilingResponse,
            FinancialRatios,
            RatiosResponse,
            ReportOption,
            ReportOptionsResponse,
        )
    ),
    paths(
        crate::routes::company::search_company,
        crate::routes::company::company_by_code,
        crate::routes::company::company_by_corp_code,
        crate::routes::financial::financial_data,
        crate::routes::financial::latest_financial_data,
        crate::routes::financial::financial_ratios,
        crate::routes::financial::report_options,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// `/swagger-ui`에서 UI를, `/api-docs/openapi.json`에서 스펙을 제공합니다.
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_spec_is_valid_json() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec).unwrap();

        assert!(json.contains("DartLens API"));
        assert!(json.contains("/api/search-company"));
        assert!(json.contains("/api/financial-data"));
        assert!(json.contains("/api/financial-ratios"));
        assert!(json.contains("/api/report-options"));
    }

    #[test]
    fn openapi_contains_schemas() {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string(&spec).unwrap();

        assert!(json.contains("Company"));
        assert!(json.contains("FilingResponse"));
        assert!(json.contains("FinancialRatios"));
        assert!(json.contains("ApiError"));
    }

    #[test]
    fn swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
