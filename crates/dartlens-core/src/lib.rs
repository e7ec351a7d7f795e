//! dartlens 핵심 도메인.
//!
//! 회사 디렉터리, DART 재무제표 공시 데이터, 파생 재무비율의
//! 도메인 타입과 순수 계산 로직을 담습니다. I/O 의존성이 없으며
//! `dartlens-data`(저장소/외부 API)와 `dartlens-api`(HTTP 서버)가
//! 이 크레이트 위에 올라갑니다.

pub mod domain;
pub mod error;
pub mod ratios;
pub mod reports;

pub use domain::{
    Company, FilingLineItem, FilingResponse, FinancialRatios, FsDiv, ReportCode, ReportOption,
    SjDiv,
};
pub use error::{CoreError, Result};
pub use ratios::compute_ratios;
pub use reports::{available_reports, default_report};
