//! API 라우트.
//!
//! # 엔드포인트
//!
//! - `GET /health` - 헬스 체크
//! - `GET /api/search-company` - 회사명 부분 일치 검색
//! - `GET /api/company-by-code` - 종목코드로 회사 조회
//! - `GET /api/company/{corp_code}` - 고유번호로 회사 조회
//! - `GET /api/financial-data` - 재무제표 공시 조회
//! - `GET /api/financial-data/latest` - 가장 최근 보고서 자동 조회
//! - `GET /api/financial-ratios` - 파생 재무비율 조회
//! - `GET /api/report-options` - 선택 가능한 보고서 옵션

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::state::AppState;

pub mod company;
pub mod financial;

/// API 라우터 생성.
pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search-company", get(company::search_company))
        .route("/company-by-code", get(company::company_by_code))
        .route("/company/{corp_code}", get(company::company_by_corp_code))
        .route("/financial-data", get(financial::financial_data))
        .route(
            "/financial-data/latest",
            get(financial::latest_financial_data),
        )
        .route("/financial-ratios", get(financial::financial_ratios))
        .route("/report-options", get(financial::report_options))
        .with_state(state)
}

/// 헬스 체크.
pub async fn health_check() -> &'static str {
    "OK"
}
