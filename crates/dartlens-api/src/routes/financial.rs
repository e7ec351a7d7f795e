//! 재무제표 공시 endpoint.
//!
//! DART 공시 API의 통과 조회, 파생 재무비율, 보고서 옵션을
//! 제공합니다. 업스트림 호출은 요청당 한 번이며 재시도하지 않습니다.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Local};
use dartlens_core::{
    available_reports, compute_ratios, CoreError, FilingResponse, FinancialRatios, ReportOption,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{map_core_error, ApiFailure},
    state::AppState,
};

/// 재무제표 조회 요청.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FinancialDataQuery {
    /// 고유번호 (8자리)
    pub corp_code: Option<String>,
    /// 사업연도 (예: "2024")
    pub bsns_year: Option<String>,
    /// 보고서 코드 (11011/11012/11013/11014)
    pub reprt_code: Option<String>,
}

impl FinancialDataQuery {
    /// 세 매개변수 모두 필수. 하나라도 없으면 `InvalidArgument`.
    fn require_all(self) -> Result<(String, String, String), CoreError> {
        let corp_code = self.corp_code.unwrap_or_default();
        let bsns_year = self.bsns_year.unwrap_or_default();
        let reprt_code = self.reprt_code.unwrap_or_default();
        if corp_code.trim().is_empty()
            || bsns_year.trim().is_empty()
            || reprt_code.trim().is_empty()
        {
            return Err(CoreError::invalid_argument(
                "필수 매개변수가 누락되었습니다. (corp_code, bsns_year, reprt_code)",
            ));
        }
        Ok((corp_code, bsns_year, reprt_code))
    }
}

/// 재무제표 조회 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinancialDataResponse {
    pub success: bool,
    /// 정규화된 DART 응답 (list는 변형 없이 통과)
    pub data: FilingResponse,
}

/// 재무제표 공시 조회.
///
/// GET /api/financial-data?corp_code=00126380&bsns_year=2024&reprt_code=11011
#[utoipa::path(
    get,
    path = "/api/financial-data",
    tag = "financial",
    params(FinancialDataQuery),
    responses(
        (status = 200, description = "조회 성공", body = FinancialDataResponse),
        (status = 400, description = "매개변수 누락 또는 DART 오류", body = crate::error::ApiError),
        (status = 408, description = "업스트림 시간 초과", body = crate::error::ApiError),
        (status = 503, description = "API 키 미설정 또는 업스트림 연결 불가", body = crate::error::ApiError)
    )
)]
pub async fn financial_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FinancialDataQuery>,
) -> Result<Json<FinancialDataResponse>, ApiFailure> {
    let (corp_code, bsns_year, reprt_code) = params.require_all().map_err(map_core_error)?;
    let client = state.dart_client().map_err(map_core_error)?;

    let data = client
        .fetch_filing(&corp_code, &bsns_year, &reprt_code)
        .await
        .map_err(map_core_error)?;

    Ok(Json(FinancialDataResponse {
        success: true,
        data,
    }))
}

/// 재무비율 조회 응답.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatiosResponse {
    pub success: bool,
    /// 파생 재무비율 (`null` = 산출 불가)
    pub ratios: FinancialRatios,
}

/// 파생 재무비율 조회.
///
/// 공시를 조회한 뒤 서버에서 비율을 계산합니다.
///
/// GET /api/financial-ratios?corp_code=00126380&bsns_year=2024&reprt_code=11011
#[utoipa::path(
    get,
    path = "/api/financial-ratios",
    tag = "financial",
    params(FinancialDataQuery),
    responses(
        (status = 200, description = "계산 성공", body = RatiosResponse),
        (status = 400, description = "매개변수 누락 또는 DART 오류", body = crate::error::ApiError),
        (status = 408, description = "업스트림 시간 초과", body = crate::error::ApiError)
    )
)]
pub async fn financial_ratios(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FinancialDataQuery>,
) -> Result<Json<RatiosResponse>, ApiFailure> {
    let (corp_code, bsns_year, reprt_code) = params.require_all().map_err(map_core_error)?;
    let client = state.dart_client().map_err(map_core_error)?;

    let filing = client
        .fetch_filing(&corp_code, &bsns_year, &reprt_code)
        .await
        .map_err(map_core_error)?;
    let ratios = compute_ratios(&filing);

    Ok(Json(RatiosResponse {
        success: true,
        ratios,
    }))
}

/// 자동 조회 요청.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LatestFilingQuery {
    /// 고유번호 (8자리)
    pub corp_code: Option<String>,
    /// 사업연도 (기본: 올해)
    pub bsns_year: Option<String>,
}

/// 자동 조회 응답.
///
/// 조회할 보고서가 없거나 단 한 번의 시도가 실패하면
/// `success: false` + `reason`으로 사용자 선택 폴백을 알립니다
/// (오류 아님).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LatestFilingResponse {
    pub success: bool,
    /// 실제 조회된 보고서 코드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprt_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FilingResponse>,
    /// 폴백 사유 (success=false일 때)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// 가장 최근 보고서 자동 조회 (페이지 진입 편의 기능).
///
/// GET /api/financial-data/latest?corp_code=00126380&bsns_year=2024
#[utoipa::path(
    get,
    path = "/api/financial-data/latest",
    tag = "financial",
    params(LatestFilingQuery),
    responses(
        (status = 200, description = "조회 성공 또는 사용자 선택 폴백", body = LatestFilingResponse),
        (status = 400, description = "매개변수 누락", body = crate::error::ApiError)
    )
)]
pub async fn latest_financial_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LatestFilingQuery>,
) -> Result<Json<LatestFilingResponse>, ApiFailure> {
    let corp_code = params.corp_code.unwrap_or_default();
    if corp_code.trim().is_empty() {
        return Err(map_core_error(CoreError::invalid_argument(
            "필수 매개변수가 누락되었습니다. (corp_code)",
        )));
    }

    let today = Local::now().date_naive();
    let fiscal_year = parse_year(params.bsns_year, today.year()).map_err(map_core_error)?;
    let client = state.dart_client().map_err(map_core_error)?;

    match client
        .fetch_latest_filing(&corp_code, fiscal_year, today)
        .await
        .map_err(map_core_error)?
    {
        Some((report, data)) => Ok(Json(LatestFilingResponse {
            success: true,
            reprt_code: Some(report.code().to_string()),
            data: Some(data),
            reason: None,
        })),
        None => Ok(Json(LatestFilingResponse {
            success: false,
            reprt_code: None,
            data: None,
            reason: Some("자동으로 조회할 보고서가 없습니다. 보고서를 직접 선택해주세요.".to_string()),
        })),
    }
}

/// 보고서 옵션 요청.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportOptionsQuery {
    /// 사업연도 (기본: 올해)
    pub bsns_year: Option<String>,
}

/// 보고서 옵션 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportOptionsResponse {
    pub success: bool,
    /// 선택 가능한 보고서 (없으면 센티넬 "none" 하나)
    pub options: Vec<ReportOption>,
}

/// 선택 가능한 보고서 옵션 조회.
///
/// GET /api/report-options?bsns_year=2024
#[utoipa::path(
    get,
    path = "/api/report-options",
    tag = "financial",
    params(ReportOptionsQuery),
    responses(
        (status = 200, description = "조회 성공", body = ReportOptionsResponse),
        (status = 400, description = "사업연도 형식 오류", body = crate::error::ApiError)
    )
)]
pub async fn report_options(
    Query(params): Query<ReportOptionsQuery>,
) -> Result<Json<ReportOptionsResponse>, ApiFailure> {
    let today = Local::now().date_naive();
    let fiscal_year = parse_year(params.bsns_year, today.year()).map_err(map_core_error)?;

    let options = available_reports(fiscal_year, today);
    debug!(fiscal_year, count = options.len(), "보고서 옵션 조회");

    Ok(Json(ReportOptionsResponse {
        success: true,
        options,
    }))
}

/// 사업연도 문자열 파싱. 미지정 시 기본값.
fn parse_year(raw: Option<String>, default: i32) -> Result<i32, CoreError> {
    match raw {
        None => Ok(default),
        Some(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(default);
            }
            s.parse::<i32>()
                .map_err(|_| CoreError::invalid_argument("사업연도가 올바르지 않습니다."))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        error::ApiError,
        routes::create_api_router,
        state::{dart_test_state, empty_test_state},
    };

    const SUCCESS_BODY: &str = r#"{
        "status": "000",
        "message": "정상",
        "list": [
            {"account_nm": "매출액", "fs_div": "OFS", "sj_div": "IS",
             "thstrm_amount": "100,000,000"},
            {"account_nm": "영업이익", "fs_div": "OFS", "sj_div": "IS",
             "thstrm_amount": "10,000,000"}
        ]
    }"#;

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_parameters_are_bad_request() {
        for uri in [
            "/financial-data",
            "/financial-data?corp_code=00126380",
            "/financial-data?corp_code=00126380&bsns_year=2024",
            "/financial-ratios?bsns_year=2024",
        ] {
            let app = create_api_router(Arc::new(empty_test_state()));
            let response = app
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[tokio::test]
    async fn financial_data_passes_envelope_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/fnlttSinglAcnt.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .create_async()
            .await;

        let app = create_api_router(Arc::new(dart_test_state(&server.url())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/financial-data?corp_code=00126380&bsns_year=2024&reprt_code=11011")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "000");
        assert_eq!(body["data"]["list"][0]["thstrm_amount"], "100,000,000");
    }

    #[tokio::test]
    async fn upstream_rejection_returns_400_with_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/fnlttSinglAcnt.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"013","message":"조회된 데이타가 없습니다."}"#)
            .create_async()
            .await;

        let app = create_api_router(Arc::new(dart_test_state(&server.url())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/financial-data?corp_code=00126380&bsns_year=2024&reprt_code=11011")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status.as_deref(), Some("013"));
        assert!(body.error.contains("조회된 데이타가 없습니다"));
    }

    #[tokio::test]
    async fn ratios_are_computed_from_fetched_filing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/fnlttSinglAcnt.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .create_async()
            .await;

        let app = create_api_router(Arc::new(dart_test_state(&server.url())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/financial-ratios?corp_code=00126380&bsns_year=2024&reprt_code=11011")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["ratios"]["operatingMargin"], 10.0);
        // 산출 불가 비율은 0이 아니라 null
        assert_eq!(body["ratios"]["roe"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn report_options_for_old_year_lists_all_reports() {
        let app = create_api_router(Arc::new(empty_test_state()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/report-options?bsns_year=2020")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let values: Vec<&str> = body["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, ["11013", "11012", "11014", "11011"]);
    }

    #[tokio::test]
    async fn invalid_year_is_bad_request() {
        let app = create_api_router(Arc::new(empty_test_state()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/report-options?bsns_year=abcd")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn latest_fetches_annual_report_for_old_year() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/fnlttSinglAcnt.json")
            .match_query(mockito::Matcher::UrlEncoded(
                "reprt_code".into(),
                "11011".into(),
            ))
            .with_status(200)
            .with_body(SUCCESS_BODY)
            .create_async()
            .await;

        let app = create_api_router(Arc::new(dart_test_state(&server.url())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/financial-data/latest?corp_code=00126380&bsns_year=2020")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["reprt_code"], "11011");
    }

    #[tokio::test]
    async fn latest_falls_back_when_upstream_rejects() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/fnlttSinglAcnt.json")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"013","message":"조회된 데이타가 없습니다."}"#)
            .create_async()
            .await;

        let app = create_api_router(Arc::new(dart_test_state(&server.url())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/financial-data/latest?corp_code=00126380&bsns_year=2020")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert!(body["reason"].as_str().unwrap().contains("직접 선택"));
    }

    #[test]
    fn parse_year_defaults_and_validates() {
        assert_eq!(parse_year(None, 2025).unwrap(), 2025);
        assert_eq!(parse_year(Some("".to_string()), 2025).unwrap(), 2025);
        assert_eq!(parse_year(Some("2023".to_string()), 2025).unwrap(), 2023);
        assert!(parse_year(Some("20x3".to_string()), 2025).is_err());
    }
}
