//! 도메인 타입 정의.

pub mod company;
pub mod filing;
pub mod report;

pub use company::Company;
pub use filing::{FilingLineItem, FilingResponse, FsDiv, SjDiv};
pub use report::{ReportCode, ReportOption};

use serde::Serialize;
use utoipa::ToSchema;

/// 파생 재무비율.
///
/// 하나의 공시 응답에서 재계산되는 휘발성 값으로, 저장되지 않습니다.
/// `None`은 "산출 불가"를 뜻하며 JSON에서는 `null`로 직렬화됩니다.
/// 분모가 없거나 0인 경우 절대 `0`이나 `NaN`으로 위장하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// ROE: 당기순이익 / 자본총계 × 100 (%)
    pub roe: Option<f64>,
    /// ROA: 당기순이익 / 자산총계 × 100 (%)
    pub roa: Option<f64>,
    /// 영업이익률: 영업이익 / 매출액 × 100 (%)
    pub operating_margin: Option<f64>,
    /// 순이익률: 당기순이익 / 매출액 × 100 (%)
    pub net_profit_margin: Option<f64>,
    /// 부채비율: 부채총계 / 자본총계 × 100 (%)
    pub debt_ratio: Option<f64>,
    /// 자기자본비율: 자본총계 / 자산총계 × 100 (%)
    pub equity_ratio: Option<f64>,
    /// 자본/부채 비율: 자본총계 / 부채총계 × 100 (%)
    pub equity_debt_ratio: Option<f64>,
    /// 유동비율: 유동자산 / 유동부채 × 100 (%)
    pub current_ratio: Option<f64>,
    /// 총자산회전율: 매출액 / 자산총계 (회)
    pub asset_turnover: Option<f64>,
    /// 자기자본회전율: 매출액 / 자본총계 (회)
    pub equity_turnover: Option<f64>,
    /// 매출채권회전율: 매출액 / 매출채권 (회)
    pub receivables_turnover: Option<f64>,
    /// 유동자산 원시 금액 (유동성 차트용, 0 = 계정 부재 또는 실제 0)
    pub current_assets: i64,
    /// 유동부채 원시 금액 (유동성 차트용, 0 = 계정 부재 또는 실제 0)
    pub current_liabilities: i64,
}
