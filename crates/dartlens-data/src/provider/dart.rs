//! DART 공시 API 클라이언트.
//!
//! 단일회사 주요계정(`fnlttSinglAcnt`) API를 호출해 응답 envelope을
//! 정규화합니다. 사용자 대화형 요청에 쓰이는 경로이므로 재시도나
//! 서킷 브레이커 없이 10초 타임아웃 한 번의 시도로 즉시 결과를
//! 돌려줍니다. 실패는 전부 공통 분류로 변환되어 호출자에 전달됩니다.
//!
//! 인증키(`crtfc_key`)는 쿼리 파라미터로만 전달되며 로그와 에러
//! 메시지에 절대 남기지 않습니다.

use chrono::NaiveDate;
use dartlens_core::{
    reports::default_report, CoreError, FilingResponse, ReportCode, Result,
};
use tracing::{debug, warn};

use crate::config::DartConfig;

/// 단일회사 주요계정 API 경로.
const FNLTT_PATH: &str = "/api/fnlttSinglAcnt.json";

/// DART 공시 API 클라이언트.
#[derive(Debug, Clone)]
pub struct DartClient {
    http: reqwest::Client,
    config: DartConfig,
}

impl DartClient {
    /// 설정으로 클라이언트 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 초기화 실패 시 `Internal`을 반환합니다.
    pub fn new(config: DartConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CoreError::Internal(format!("HTTP 클라이언트 초기화 실패: {}", e.without_url()))
            })?;
        Ok(Self { http, config })
    }

    /// 재무제표 공시 조회.
    ///
    /// 회사/연도/보고서 유형 조합 하나에 대해 아웃바운드 호출을 한 번
    /// 수행합니다. 성공(`status == "000"`) 시 `list`를 변형 없이
    /// 그대로 반환합니다.
    ///
    /// # Errors
    /// - 매개변수 누락: `InvalidArgument` (네트워크 호출 전에 반환)
    /// - 타임아웃: `Timeout`
    /// - 연결/DNS 실패: `Unavailable`
    /// - 비정상 HTTP 상태: `UpstreamError`
    /// - 업스트림 오류 페이로드: `UpstreamRejected`
    pub async fn fetch_filing(
        &self,
        corp_code: &str,
        bsns_year: &str,
        reprt_code: &str,
    ) -> Result<FilingResponse> {
        let corp_code = corp_code.trim();
        let bsns_year = bsns_year.trim();
        let reprt_code = reprt_code.trim();
        if corp_code.is_empty() || bsns_year.is_empty() || reprt_code.is_empty() {
            return Err(CoreError::invalid_argument(
                "필수 매개변수가 누락되었습니다. (corp_code, bsns_year, reprt_code)",
            ));
        }

        let url = format!("{}{}", self.config.base_url, FNLTT_PATH);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("crtfc_key", self.config.api_key.as_str()),
                ("corp_code", corp_code),
                ("bsns_year", bsns_year),
                ("reprt_code", reprt_code),
            ])
            .send()
            .await
            .map_err(map_transport_err)?;

        let http_status = response.status();
        if !http_status.is_success() {
            return Err(CoreError::UpstreamError {
                http_status: http_status.as_u16(),
            });
        }

        let envelope: FilingResponse = response.json().await.map_err(|e| {
            CoreError::Internal(format!("DART 응답 파싱 실패: {}", e.without_url()))
        })?;

        if envelope.status != "000" {
            return Err(CoreError::UpstreamRejected {
                status: envelope.status,
                message: envelope
                    .message
                    .unwrap_or_else(|| "알 수 없는 DART 오류".to_string()),
            });
        }

        debug!(corp_code, bsns_year, reprt_code, count = envelope.list.len(), "재무제표 조회 완료");
        Ok(envelope)
    }

    /// 가장 최근 보고서 자동 조회 (페이지 진입 시 편의 기능).
    ///
    /// 가용성 판정기로 기본 보고서를 고른 뒤 한 번만 조회를 시도하고,
    /// 실패하면 사용자 선택으로 폴백하도록 `None`을 반환합니다
    /// (재시도 루프 없음). 호출자 입력 오류만 그대로 전파됩니다.
    pub async fn fetch_latest_filing(
        &self,
        corp_code: &str,
        fiscal_year: i32,
        today: NaiveDate,
    ) -> Result<Option<(ReportCode, FilingResponse)>> {
        let Some(report) = default_report(fiscal_year, today) else {
            debug!(fiscal_year, "선택 가능한 보고서 없음");
            return Ok(None);
        };

        match self
            .fetch_filing(corp_code, &fiscal_year.to_string(), report.code())
            .await
        {
            Ok(filing) => Ok(Some((report, filing))),
            Err(e @ CoreError::InvalidArgument(_)) => Err(e),
            Err(e) => {
                warn!(
                    error = %e,
                    reprt_code = report.code(),
                    "자동 조회 실패, 사용자 선택으로 폴백"
                );
                Ok(None)
            }
        }
    }
}

/// reqwest 전송 에러를 공통 분류로 변환.
///
/// 에러 표시 문자열에 인증키가 포함된 URL이 남지 않도록
/// `without_url`로 정리합니다.
fn map_transport_err(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        return CoreError::Timeout;
    }
    let e = e.without_url();
    if e.is_connect() {
        CoreError::unavailable(format!("DART API에 연결할 수 없습니다: {}", e))
    } else {
        CoreError::Internal(format!("DART 요청 실패: {}", e))
    }
}
