//! dartlens 데이터 레이어.
//!
//! 회사 디렉터리 저장소(PostgreSQL)와 DART 공시 API 클라이언트를
//! 제공합니다. 서빙 경로는 디렉터리를 읽기만 하며, 일괄 교체는
//! 관리용 CLI에서만 수행됩니다.

pub mod config;
pub mod provider;
pub mod repository;

pub use config::{database_url_from_env, mask_database_url, DartConfig};
pub use provider::DartClient;
pub use repository::{CompanyRepository, DirectoryStats};
