//! DartLens 관리용 CLI.
//!
//! 회사 디렉터리의 스키마 초기화, 스냅샷 적재, 통계 조회를 수행합니다.
//! 서빙 경로(API 서버)는 디렉터리를 읽기만 하므로, 쓰기는 전부 이
//! 도구를 통해 이루어집니다.
//!
//! # 사용 예시
//!
//! ```bash
//! # 테이블/인덱스 생성
//! dartlens setup
//!
//! # DART 고유번호 스냅샷으로 디렉터리 일괄 교체
//! dartlens seed -f data/corp_codes.json
//!
//! # 적재 현황 확인
//! dartlens stats
//! ```

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;

use commands::seed::SeedConfig;

#[derive(Parser)]
#[command(name = "dartlens")]
#[command(about = "DartLens 관리 도구 - 회사 디렉터리 적재 및 점검", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// companies 테이블과 인덱스 생성 (멱등)
    Setup {
        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },

    /// 스냅샷 JSON으로 회사 디렉터리 일괄 교체
    Seed {
        /// 스냅샷 JSON 파일 경로
        #[arg(short, long)]
        file: String,

        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },

    /// 디렉터리 통계 조회 (전체/상장사 수)
    Stats {
        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (없어도 에러 안남)
    dotenvy::dotenv().ok();

    // 트레이싱 초기화
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Setup { db_url } => {
            commands::setup::run(db_url).await.inspect_err(|e| {
                error!("Setup failed: {}", e);
            })?;
            println!("✅ 스키마 초기화 완료");
        }

        Commands::Seed { file, db_url } => {
            let config = SeedConfig {
                file: file.clone(),
                db_url,
            };
            let inserted = commands::seed::run(config).await.inspect_err(|e| {
                error!("Seed failed: {}", e);
            })?;
            println!("\n✅ 회사 디렉터리 교체 완료: {} 건", inserted);
            println!("스냅샷: {}", file);
        }

        Commands::Stats { db_url } => {
            let stats = commands::stats::run(db_url).await.inspect_err(|e| {
                error!("Stats failed: {}", e);
            })?;
            println!("\n회사 디렉터리 현황");
            println!("  전체: {} 건", stats.total);
            println!("  상장사: {} 건", stats.listed);
            println!("  비상장사: {} 건", stats.total - stats.listed);
        }
    }

    Ok(())
}
