//! 스키마 초기화.

use tracing::info;

use super::connect_repository;

/// `companies` 테이블과 인덱스를 생성합니다 (멱등).
pub async fn run(db_url: Option<String>) -> anyhow::Result<()> {
    let repo = connect_repository(db_url).await?;
    repo.ensure_schema().await?;
    info!("스키마 초기화 완료");
    Ok(())
}
