//! 디렉터리 통계 조회.

use dartlens_data::DirectoryStats;

use super::connect_repository;

/// 디렉터리 통계를 조회합니다.
pub async fn run(db_url: Option<String>) -> anyhow::Result<DirectoryStats> {
    let repo = connect_repository(db_url).await?;
    Ok(repo.stats().await?)
}
