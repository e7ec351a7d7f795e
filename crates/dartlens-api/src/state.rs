//! 애플리케이션 상태.
//!
//! 커넥션 풀과 DART 클라이언트를 프로세스 진입점에서 한 번 생성해
//! 모든 핸들러에 주입합니다. 둘 다 불변 공유 객체이므로 별도의
//! 잠금이 필요 없습니다. 설정이 빠진 의존성은 `None`으로 남고, 해당
//! 엔드포인트는 503과 구분되는 메시지를 반환합니다 (크래시 없음).

use dartlens_core::{CoreError, Result};
use dartlens_data::{
    config::DartConfig, database_url_from_env, mask_database_url, CompanyRepository, DartClient,
};
use tracing::{info, warn};

/// 애플리케이션 상태.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 회사 디렉터리 저장소 (DATABASE_URL 미설정 시 None)
    pub companies: Option<CompanyRepository>,
    /// DART 공시 API 클라이언트 (DART_API_KEY 미설정 시 None)
    pub dart: Option<DartClient>,
}

impl AppState {
    /// 환경변수에서 상태 구성.
    ///
    /// 서버는 지연 연결을 사용하므로 DB가 내려가 있어도 기동합니다.
    /// 빠진 설정은 경고 로그를 남기고 해당 기능만 비활성화됩니다.
    pub fn from_env() -> Self {
        let companies = match database_url_from_env() {
            Ok(url) => match CompanyRepository::connect_lazy(&url) {
                Ok(repo) => {
                    info!(url = %mask_database_url(&url), "회사 디렉터리 저장소 준비 완료");
                    Some(repo)
                }
                Err(e) => {
                    warn!(error = %e, "회사 디렉터리 저장소 초기화 실패, 회사 조회 비활성화");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "회사 조회 엔드포인트 비활성화");
                None
            }
        };

        let dart = match DartConfig::from_env() {
            Ok(config) => match DartClient::new(config) {
                Ok(client) => {
                    info!("DART API 클라이언트 준비 완료");
                    Some(client)
                }
                Err(e) => {
                    warn!(error = %e, "DART 클라이언트 초기화 실패, 재무제표 조회 비활성화");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "재무제표 엔드포인트 비활성화");
                None
            }
        };

        Self { companies, dart }
    }

    /// 회사 디렉터리 저장소.
    ///
    /// # Errors
    /// 저장소가 구성되지 않았으면 `Unavailable` ("저장소 미설정"은
    /// "회사 없음"과 구분되는 메시지여야 합니다).
    pub fn company_repo(&self) -> Result<&CompanyRepository> {
        self.companies
            .as_ref()
            .ok_or_else(|| CoreError::unavailable("데이터베이스 연결 설정이 필요합니다."))
    }

    /// DART API 클라이언트.
    ///
    /// # Errors
    /// API 키가 구성되지 않았으면 `Unavailable`.
    pub fn dart_client(&self) -> Result<&DartClient> {
        self.dart
            .as_ref()
            .ok_or_else(|| CoreError::unavailable("DART API 키가 설정되지 않았습니다."))
    }
}

#[cfg(test)]
pub(crate) fn empty_test_state() -> AppState {
    AppState {
        companies: None,
        dart: None,
    }
}

#[cfg(test)]
pub(crate) fn dart_test_state(base_url: &str) -> AppState {
    AppState {
        companies: None,
        dart: Some(DartClient::new(DartConfig::new("test-key", base_url)).unwrap()),
    }
}
