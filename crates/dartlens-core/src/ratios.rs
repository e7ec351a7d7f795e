//! 재무비율 엔진.
//!
//! 하나의 공시 응답(`FilingResponse`)에서 수익성/안정성/유동성/활동성
//! 비율을 계산하는 순수 함수입니다.
//!
//! # 동작 방식
//!
//! 1. 연결(CFS) 행이 하나라도 있으면 연결만, 없으면 개별(OFS)만 사용
//!    (두 변형을 섞지 않음)
//! 2. 작업 집합을 재무상태표(BS)/손익계산서(IS)로 분할
//! 3. 계정은 별칭 목록으로 해석: 별칭 우선순위 > 행 순서, 첫 매칭 승리
//! 4. 금액은 천 단위 구분자를 제거하고 정수로 파싱, 실패/부재는 0
//! 5. 모든 공식은 분모를 가드 — 분모가 0 이하이면 해당 비율은 `None`
//!
//! 계정명이 자유 텍스트라 "계정 부재"와 "금액이 실제로 0"은 구분할 수
//! 없습니다. 이는 업스트림 데이터의 한계로 그대로 수용합니다.

use crate::domain::{FilingLineItem, FilingResponse, FinancialRatios, FsDiv, SjDiv};

// 재무상태표 계정 별칭 (우선순위 순)
const TOTAL_ASSETS: &[&str] = &["자산총계", "총자산"];
const TOTAL_LIABILITIES: &[&str] = &["부채총계", "총부채"];
const TOTAL_EQUITY: &[&str] = &["자본총계", "총자본", "자기자본"];
const CURRENT_ASSETS: &[&str] = &["유동자산"];
const CURRENT_LIABILITIES: &[&str] = &["유동부채"];
const RECEIVABLES: &[&str] = &["매출채권", "매출채권및기타채권"];

// 손익계산서 계정 별칭 (우선순위 순)
const REVENUE: &[&str] = &["매출액", "수익(매출액)", "영업수익"];
const NET_INCOME: &[&str] = &["당기순이익", "순이익"];
const OPERATING_INCOME: &[&str] = &["영업이익"];

/// 금액 문자열 파싱.
///
/// 천 단위 구분자(`,`)를 제거하고 부호 있는 정수로 파싱합니다.
/// 부재하거나 숫자가 아니면 0 (= "계정 부재" 관례).
pub fn parse_amount(raw: Option<&str>) -> i64 {
    raw.map(|s| s.replace(',', ""))
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// 작업 집합 선택: 연결(CFS) 우선, 없으면 개별(OFS).
///
/// CFS 행이 하나라도 존재하면 OFS 행 수와 무관하게 CFS만 사용합니다.
fn working_set(list: &[FilingLineItem]) -> Vec<&FilingLineItem> {
    let consolidated: Vec<&FilingLineItem> = list
        .iter()
        .filter(|item| item.fs_div() == Some(FsDiv::Cfs))
        .collect();
    if !consolidated.is_empty() {
        return consolidated;
    }
    list.iter()
        .filter(|item| item.fs_div() == Some(FsDiv::Ofs))
        .collect()
}

/// 별칭 목록으로 계정 금액 해석.
///
/// 별칭을 순서대로 시도하며, 각 별칭에 대해 행을 입력 순서로 훑어
/// `account_nm`이 별칭을 포함하는 첫 행의 당기 금액을 반환합니다.
/// 어느 별칭도 매칭되지 않으면 0.
fn account_amount(rows: &[&FilingLineItem], aliases: &[&str]) -> i64 {
    for alias in aliases {
        let hit = rows.iter().find(|item| {
            item.account_nm
                .as_deref()
                .is_some_and(|name| name.contains(alias))
        });
        if let Some(item) = hit {
            return parse_amount(item.thstrm_amount.as_deref());
        }
    }
    0
}

/// 백분율 비율. 분모가 0 이하이면 `None`.
fn pct(numerator: i64, denominator: i64) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64 * 100.0)
}

/// 회전율 (배수). 분모가 0 이하이면 `None`.
fn turns(numerator: i64, denominator: i64) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// 공시 응답에서 재무비율 계산.
///
/// I/O와 상태가 없는 순수 함수입니다. `list`가 비어 있거나 CFS/OFS
/// 어느 쪽도 없으면 모든 비율이 `None`으로 반환됩니다.
pub fn compute_ratios(filing: &FilingResponse) -> FinancialRatios {
    let rows = working_set(&filing.list);

    let bs: Vec<&FilingLineItem> = rows
        .iter()
        .copied()
        .filter(|item| item.sj_div() == Some(SjDiv::Bs))
        .collect();
    let is: Vec<&FilingLineItem> = rows
        .iter()
        .copied()
        .filter(|item| item.sj_div() == Some(SjDiv::Is))
        .collect();

    let total_assets = account_amount(&bs, TOTAL_ASSETS);
    let total_liabilities = account_amount(&bs, TOTAL_LIABILITIES);
    let total_equity = account_amount(&bs, TOTAL_EQUITY);
    let current_assets = account_amount(&bs, CURRENT_ASSETS);
    let current_liabilities = account_amount(&bs, CURRENT_LIABILITIES);
    let receivables = account_amount(&bs, RECEIVABLES);

    let revenue = account_amount(&is, REVENUE);
    let net_income = account_amount(&is, NET_INCOME);
    let operating_income = account_amount(&is, OPERATING_INCOME);

    FinancialRatios {
        roe: pct(net_income, total_equity),
        roa: pct(net_income, total_assets),
        operating_margin: pct(operating_income, revenue),
        net_profit_margin: pct(net_income, revenue),
        // 부채비율은 자본 기준 관례 (부채총계/자본총계)
        debt_ratio: pct(total_liabilities, total_equity),
        equity_ratio: pct(total_equity, total_assets),
        equity_debt_ratio: pct(total_equity, total_liabilities),
        current_ratio: pct(current_assets, current_liabilities),
        asset_turnover: turns(revenue, total_assets),
        equity_turnover: turns(revenue, total_equity),
        receivables_turnover: turns(revenue, receivables),
        current_assets,
        current_liabilities,
    }
}
