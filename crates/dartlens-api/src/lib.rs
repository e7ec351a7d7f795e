//! dartlens REST API 서버 라이브러리.
//!
//! 회사 검색, 재무제표 공시 조회, 재무비율, 보고서 옵션 엔드포인트를
//! 제공합니다. 요청 단위의 독립적인 처리 모델이며 요청 간 공유되는
//! 가변 상태가 없습니다.

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use state::AppState;
