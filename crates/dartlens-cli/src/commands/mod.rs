//! CLI 서브커맨드 구현.

pub mod seed;
pub mod setup;
pub mod stats;

use dartlens_data::{database_url_from_env, CompanyRepository};

/// 저장소 연결. `--db-url` 플래그가 없으면 DATABASE_URL 환경변수를 사용합니다.
pub async fn connect_repository(db_url: Option<String>) -> anyhow::Result<CompanyRepository> {
    let url = match db_url {
        Some(url) => url,
        None => database_url_from_env()?,
    };
    Ok(CompanyRepository::connect(&url).await?)
}
