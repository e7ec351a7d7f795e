//! 회사 디렉터리 Repository.
//!
//! `companies` 테이블에 대한 조회와 관리용 일괄 교체를 제공합니다.
//! 서빙 경로(`search_by_name`, `get_by_*`)는 읽기 전용이며, 일괄
//! 교체(`replace_all`)는 서빙 트래픽이 없는 상태에서 CLI로만 실행하는
//! 것을 전제로 합니다.

use dartlens_core::{domain::company::none_if_blank, Company, CoreError, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool, QueryBuilder, Row};
use std::time::Duration;
use tracing::{debug, info};

/// 검색 기본 최대 결과 수.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// 일괄 삽입 배치 크기.
const BATCH_SIZE: usize = 500;

/// 회사 디렉터리 데이터베이스 레코드.
#[derive(Debug, Clone, FromRow)]
struct CompanyRow {
    corp_code: String,
    corp_name: String,
    corp_eng_name: Option<String>,
    stock_code: Option<String>,
}

impl CompanyRow {
    /// 도메인 객체로 변환. 빈 문자열 선택 필드는 `None`으로 정규화.
    fn into_company(self) -> Company {
        Company {
            corp_code: self.corp_code,
            corp_name: self.corp_name,
            corp_eng_name: none_if_blank(self.corp_eng_name),
            stock_code: none_if_blank(self.stock_code),
        }
    }
}

/// 디렉터리 통계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    /// 전체 회사 수
    pub total: i64,
    /// 상장회사 수 (종목코드 보유)
    pub listed: i64,
}

/// 회사 디렉터리 Repository.
///
/// 모듈 전역 싱글턴 대신 명시적으로 생성해 주입하며, 커넥션 풀의
/// 수명은 프로세스 진입점이 소유합니다.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// 기존 풀로 생성.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 즉시 연결 (CLI용, 연결 실패를 바로 드러냄).
    ///
    /// # Errors
    /// 연결 실패 시 `Unavailable`을 반환합니다.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(|e| {
                CoreError::unavailable(format!("데이터베이스 연결에 실패했습니다: {}", e))
            })?;
        Ok(Self::new(pool))
    }

    /// 지연 연결 (서버용, 첫 쿼리 시점에 실제 연결).
    ///
    /// # Errors
    /// URL 형식이 잘못된 경우 `Unavailable`을 반환합니다.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy(database_url)
            .map_err(|e| {
                CoreError::unavailable(format!("데이터베이스 URL이 올바르지 않습니다: {}", e))
            })?;
        Ok(Self::new(pool))
    }

    /// 회사명 부분 일치 검색.
    ///
    /// 대소문자 무시 부분 일치이며, 접두사 일치가 먼저, 동순위는
    /// 회사명 사전순입니다. 결과 없음은 빈 목록(오류 아님)입니다.
    ///
    /// # Errors
    /// 공백뿐인 검색어는 `InvalidArgument`, 저장소 장애는 `Unavailable`.
    pub async fn search_by_name(&self, query: &str, limit: i64) -> Result<Vec<Company>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::invalid_argument("검색어를 입력해주세요."));
        }

        let contains = format!("%{}%", query);
        let prefix = format!("{}%", query);

        let rows: Vec<CompanyRow> = sqlx::query_as(
            "SELECT corp_code, corp_name, corp_eng_name, stock_code \
             FROM companies \
             WHERE corp_name ILIKE $1 \
             ORDER BY CASE WHEN corp_name ILIKE $2 THEN 1 ELSE 2 END, corp_name \
             LIMIT $3",
        )
        .bind(&contains)
        .bind(&prefix)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        debug!(query, count = rows.len(), "회사 검색 완료");
        Ok(rows.into_iter().map(CompanyRow::into_company).collect())
    }

    /// 고유번호(8자리)로 조회.
    ///
    /// # Errors
    /// 없으면 `NotFound`, 저장소 장애는 `Unavailable`.
    pub async fn get_by_corp_code(&self, corp_code: &str) -> Result<Company> {
        let row: Option<CompanyRow> = sqlx::query_as(
            "SELECT corp_code, corp_name, corp_eng_name, stock_code \
             FROM companies WHERE corp_code = $1",
        )
        .bind(corp_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(CompanyRow::into_company)
            .ok_or_else(|| CoreError::not_found("해당 고유번호의 회사를 찾을 수 없습니다."))
    }

    /// 종목코드(6자리)로 조회.
    ///
    /// # Errors
    /// 공백뿐인 입력은 `InvalidArgument`, 없으면 `NotFound`.
    pub async fn get_by_stock_code(&self, stock_code: &str) -> Result<Company> {
        let stock_code = stock_code.trim();
        if stock_code.is_empty() {
            return Err(CoreError::invalid_argument("종목코드를 입력해주세요."));
        }

        let row: Option<CompanyRow> = sqlx::query_as(
            "SELECT corp_code, corp_name, corp_eng_name, stock_code \
             FROM companies WHERE stock_code = $1",
        )
        .bind(stock_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        row.map(CompanyRow::into_company)
            .ok_or_else(|| CoreError::not_found("해당 종목코드의 회사를 찾을 수 없습니다."))
    }

    /// 테이블과 인덱스 생성 (관리용).
    ///
    /// # Errors
    /// DDL 실행 실패 시 저장소 에러를 반환합니다.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS companies ( \
                corp_code VARCHAR(8) PRIMARY KEY, \
                corp_name VARCHAR(255) NOT NULL, \
                corp_eng_name VARCHAR(255), \
                stock_code VARCHAR(6), \
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW() \
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_companies_corp_name ON companies (corp_name)")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_companies_stock_code ON companies (stock_code)",
        )
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        info!("companies 테이블 및 인덱스 준비 완료");
        Ok(())
    }

    /// 디렉터리 일괄 교체 (관리용, 서빙 트래픽 없는 상태 전제).
    ///
    /// 하나의 트랜잭션에서 전체 삭제 후 배치 삽입합니다. 스냅샷 내
    /// 중복 고유번호는 `ON CONFLICT` 갱신으로 마지막 항목이 남습니다.
    ///
    /// # Errors
    /// 트랜잭션 실패 시 저장소 에러를 반환하며 기존 데이터가 유지됩니다.
    pub async fn replace_all(&self, companies: &[Company]) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        sqlx::query("DELETE FROM companies")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_err)?;

        let mut inserted = 0u64;
        for chunk in companies.chunks(BATCH_SIZE) {
            let mut builder = QueryBuilder::new(
                "INSERT INTO companies (corp_code, corp_name, corp_eng_name, stock_code) ",
            );
            builder.push_values(chunk, |mut b, company| {
                b.push_bind(&company.corp_code)
                    .push_bind(&company.corp_name)
                    .push_bind(company.corp_eng_name.as_deref())
                    .push_bind(company.stock_code.as_deref());
            });
            builder.push(
                " ON CONFLICT (corp_code) DO UPDATE SET \
                 corp_name = EXCLUDED.corp_name, \
                 corp_eng_name = EXCLUDED.corp_eng_name, \
                 stock_code = EXCLUDED.stock_code",
            );

            let result = builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;
            inserted += result.rows_affected();

            info!(
                inserted,
                total = companies.len(),
                "회사 디렉터리 적재 진행"
            );
        }

        tx.commit().await.map_err(map_sqlx_err)?;
        info!(inserted, "회사 디렉터리 일괄 교체 완료");
        Ok(inserted)
    }

    /// 디렉터리 통계 조회.
    ///
    /// # Errors
    /// 저장소 장애 시 `Unavailable`을 반환합니다.
    pub async fn stats(&self) -> Result<DirectoryStats> {
        let total: i64 = sqlx::query("SELECT COUNT(*) AS count FROM companies")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)?
            .get("count");

        let listed: i64 = sqlx::query(
            "SELECT COUNT(*) AS count FROM companies \
             WHERE stock_code IS NOT NULL AND stock_code <> ''",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?
        .get("count");

        Ok(DirectoryStats { total, listed })
    }
}

/// sqlx 에러를 공통 분류로 변환.
///
/// 연결 계열 실패는 `Unavailable`(503), 그 외는 `Internal`(500).
/// 조회 결과 없음은 `fetch_optional`로 처리하므로 `RowNotFound`가
/// 그대로 새어 나가지 않습니다.
fn map_sqlx_err(e: sqlx::Error) -> CoreError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Configuration(_) => {
            CoreError::unavailable(format!("데이터베이스 연결에 실패했습니다: {}", e))
        }
        other => CoreError::Internal(format!("데이터베이스 오류가 발생했습니다: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 실제 DB 없이 검증 가능한 경로만 다룹니다. 풀은 지연 연결이므로
    // 인자 검증은 쿼리 실행 전에 끝납니다.
    fn lazy_repo() -> CompanyRepository {
        CompanyRepository::connect_lazy("postgres://localhost:1/never").unwrap()
    }

    #[tokio::test]
    async fn empty_search_query_is_invalid_argument() {
        let repo = lazy_repo();
        for query in ["", "   "] {
            let err = repo.search_by_name(query, DEFAULT_SEARCH_LIMIT).await.unwrap_err();
            assert!(matches!(err, CoreError::InvalidArgument(_)), "{:?}", err);
        }
    }

    #[tokio::test]
    async fn empty_stock_code_is_invalid_argument() {
        let repo = lazy_repo();
        let err = repo.get_by_stock_code(" ").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn row_normalizes_blank_optionals() {
        let row = CompanyRow {
            corp_code: "00126380".to_string(),
            corp_name: "삼성전자".to_string(),
            corp_eng_name: Some("".to_string()),
            stock_code: Some("005930".to_string()),
        };
        let company = row.into_company();
        assert_eq!(company.corp_eng_name, None);
        assert_eq!(company.stock_code.as_deref(), Some("005930"));
    }
}
