//! 회사 디렉터리 스냅샷 적재.
//!
//! DART 고유번호 스냅샷(JSON 배열)을 읽어 디렉터리 전체를 일괄
//! 교체합니다. 부분 갱신은 지원하지 않습니다.

use anyhow::Context;
use dartlens_core::Company;
use serde::Deserialize;
use tracing::{info, warn};

use super::connect_repository;

/// 스냅샷 적재 설정.
pub struct SeedConfig {
    /// 스냅샷 JSON 파일 경로
    pub file: String,
    /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
    pub db_url: Option<String>,
}

/// 스냅샷 원본 레코드.
///
/// 업스트림 스냅샷의 필드를 그대로 받습니다. 비상장사의 `stock_code`는
/// 빈 문자열 또는 공백으로 내려옵니다.
#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    corp_code: String,
    corp_name: String,
    #[serde(default)]
    corp_eng_name: Option<String>,
    #[serde(default)]
    stock_code: Option<String>,
}

/// 스냅샷 JSON 파싱 및 정규화.
///
/// 고유번호나 회사명이 비어 있는 레코드는 건너뛰고 개수를 로그로
/// 남깁니다.
fn parse_snapshot(raw: &str) -> anyhow::Result<Vec<Company>> {
    let records: Vec<SnapshotRecord> =
        serde_json::from_str(raw).context("스냅샷 JSON 파싱 실패")?;

    let mut companies = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for record in records {
        if record.corp_code.trim().is_empty() || record.corp_name.trim().is_empty() {
            skipped += 1;
            continue;
        }
        companies.push(Company::from_snapshot(
            record.corp_code,
            record.corp_name,
            record.corp_eng_name,
            record.stock_code,
        ));
    }

    if skipped > 0 {
        warn!(skipped, "필수 필드가 비어 있는 레코드 제외");
    }

    Ok(companies)
}

/// 스냅샷 적재 실행. 적재된 회사 수를 반환합니다.
pub async fn run(config: SeedConfig) -> anyhow::Result<u64> {
    let raw = tokio::fs::read_to_string(&config.file)
        .await
        .with_context(|| format!("스냅샷 파일을 읽을 수 없습니다: {}", config.file))?;

    let companies = parse_snapshot(&raw)?;
    if companies.is_empty() {
        anyhow::bail!("스냅샷에 유효한 회사가 없습니다: {}", config.file);
    }
    info!(count = companies.len(), file = %config.file, "스냅샷 파싱 완료");

    let repo = connect_repository(config.db_url).await?;
    repo.ensure_schema().await?;
    let inserted = repo.replace_all(&companies).await?;

    info!(inserted, "회사 디렉터리 교체 완료");
    Ok(inserted)
}
