//! 보고서 가용성 판정기.
//!
//! 대상 사업연도와 오늘 날짜만으로 어떤 정기보고서가 이미 공시되었을
//! 법한지 판정하는 순수 함수입니다. 한국 정기공시 제출 기한을 따라가는
//! 달력 기반 휴리스틱이며 보장이 아닙니다 — 호출자는 센티넬을 오류가
//! 아니라 "제출 비활성화"로 처리해야 합니다.
//!
//! # 정책
//!
//! - 사업연도 < 올해-1: 네 가지 보고서 모두 선택 가능
//! - 사업연도 == 올해-1: 분기/반기는 항상, 사업보고서는 4월부터
//! - 사업연도 == 올해: 1분기는 5월, 반기는 8월, 3분기는 11월부터,
//!   사업보고서는 불가. 아무것도 없으면 센티넬 하나만 반환
//! - 사업연도 > 올해: 센티넬만 반환

use chrono::{Datelike, NaiveDate};

use crate::domain::{ReportCode, ReportOption};

/// 선택 가능한 보고서 옵션 목록.
///
/// 옵션은 항상 1분기 → 반기 → 3분기 → 사업보고서 순서입니다.
/// 선택 가능한 보고서가 없으면 센티넬 옵션 하나만 반환합니다.
pub fn available_reports(fiscal_year: i32, today: NaiveDate) -> Vec<ReportOption> {
    let codes = available_codes(fiscal_year, today);
    if codes.is_empty() {
        return vec![ReportOption::none()];
    }
    codes.into_iter().map(ReportOption::from_code).collect()
}

/// 자동 조회용 기본 보고서: 가장 최근 주기의 선택 가능한 보고서.
///
/// 선택 가능한 보고서가 없으면 `None` — 호출자는 사용자 선택으로
/// 폴백합니다.
pub fn default_report(fiscal_year: i32, today: NaiveDate) -> Option<ReportCode> {
    available_codes(fiscal_year, today).pop()
}

fn available_codes(fiscal_year: i32, today: NaiveDate) -> Vec<ReportCode> {
    let this_year = today.year();
    let month = today.month();

    if fiscal_year > this_year {
        return Vec::new();
    }

    if fiscal_year < this_year - 1 {
        return vec![
            ReportCode::Q1,
            ReportCode::Half,
            ReportCode::Q3,
            ReportCode::Annual,
        ];
    }

    if fiscal_year == this_year - 1 {
        let mut codes = vec![ReportCode::Q1, ReportCode::Half, ReportCode::Q3];
        // 직전 연도 사업보고서는 3월 말 제출 기한이 지난 4월부터
        if month >= 4 {
            codes.push(ReportCode::Annual);
        }
        return codes;
    }

    // fiscal_year == this_year: 분기보고서 제출 기한(분기 말 + 45일) 경과 기준
    let mut codes = Vec::new();
    if month >= 5 {
        codes.push(ReportCode::Q1);
    }
    if month >= 8 {
        codes.push(ReportCode::Half);
    }
    if month >= 11 {
        codes.push(ReportCode::Q3);
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn values(options: &[ReportOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn old_years_offer_all_four_reports() {
        for today in [day(2025, 1, 2), day(2025, 12, 31)] {
            let options = available_reports(2023, today);
            assert_eq!(values(&options), ["11013", "11012", "11014", "11011"]);
        }
    }

    #[test]
    fn previous_year_annual_opens_in_april() {
        let before = available_reports(2024, day(2025, 3, 15));
        assert_eq!(values(&before), ["11013", "11012", "11014"]);

        let after = available_reports(2024, day(2025, 4, 1));
        assert_eq!(values(&after), ["11013", "11012", "11014", "11011"]);
    }

    #[test]
    fn current_year_march_is_sentinel_only() {
        let options = available_reports(2025, day(2025, 3, 10));
        assert_eq!(options.len(), 1);
        assert!(options[0].is_none_option());
    }

    #[test]
    fn current_year_quarterlies_unlock_by_month() {
        assert_eq!(values(&available_reports(2025, day(2025, 5, 1))), ["11013"]);
        assert_eq!(
            values(&available_reports(2025, day(2025, 8, 20))),
            ["11013", "11012"]
        );
        // 12월에도 당해 연도 사업보고서는 절대 선택 불가
        assert_eq!(
            values(&available_reports(2025, day(2025, 12, 5))),
            ["11013", "11012", "11014"]
        );
    }

    #[test]
    fn future_year_is_sentinel_only() {
        let options = available_reports(2026, day(2025, 12, 31));
        assert_eq!(options.len(), 1);
        assert!(options[0].is_none_option());
    }

    #[test]
    fn default_report_picks_most_recent_cadence() {
        assert_eq!(default_report(2023, day(2025, 6, 1)), Some(ReportCode::Annual));
        assert_eq!(default_report(2024, day(2025, 3, 1)), Some(ReportCode::Q3));
        assert_eq!(default_report(2025, day(2025, 12, 1)), Some(ReportCode::Q3));
        assert_eq!(default_report(2025, day(2025, 6, 1)), Some(ReportCode::Q1));
        assert_eq!(default_report(2025, day(2025, 2, 1)), None);
        assert_eq!(default_report(2026, day(2025, 2, 1)), None);
    }
}
