//! 회사 디렉터리 엔트리.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 공시대상회사 디렉터리 엔트리.
///
/// 금융감독원이 부여하는 고유번호(`corp_code`, 8자리)가 기본 키이며,
/// 상장회사는 종목코드(`stock_code`, 6자리)를 함께 가집니다.
/// 디렉터리는 외부 스냅샷에서 일괄 교체로만 갱신되고(관리용 CLI),
/// 서빙 경로는 읽기 전용입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    /// 고유번호 (8자리, 금감원 부여)
    pub corp_code: String,
    /// 정식 회사명 (한글)
    pub corp_name: String,
    /// 영문 회사명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corp_eng_name: Option<String>,
    /// 종목코드 (6자리, 비상장사는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
}

impl Company {
    /// 스냅샷 원본 필드로부터 생성.
    ///
    /// 업스트림 스냅샷은 비상장사의 `stock_code`를 빈 문자열이나
    /// 공백으로 내려주므로, 공백뿐인 선택 필드는 `None`으로 정규화합니다.
    pub fn from_snapshot(
        corp_code: String,
        corp_name: String,
        corp_eng_name: Option<String>,
        stock_code: Option<String>,
    ) -> Self {
        Self {
            corp_code,
            corp_name,
            corp_eng_name: none_if_blank(corp_eng_name),
            stock_code: none_if_blank(stock_code),
        }
    }

    /// 상장회사 여부.
    pub fn is_listed(&self) -> bool {
        self.stock_code.is_some()
    }
}

/// 공백뿐인 문자열을 `None`으로 정규화.
pub fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
