//! DART 재무제표 공시 응답 타입.
//!
//! DART `fnlttSinglAcnt` API의 serde 타입입니다. 와이어 필드는
//! 업스트림 JSON을 그대로 통과시키기 위해 `Option<String>`으로 유지하고,
//! 타입이 필요한 소비자(비율 엔진)는 접근자 메서드로 파싱된 값을 얻습니다.
//! 알 수 없는 구분 코드가 와도 역직렬화는 실패하지 않습니다.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 재무제표 구분 (연결/개별).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsDiv {
    /// CFS: 연결재무제표
    Cfs,
    /// OFS: 개별(별도)재무제표
    Ofs,
}

impl FsDiv {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cfs => "CFS",
            Self::Ofs => "OFS",
        }
    }
}

impl FromStr for FsDiv {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CFS" => Ok(Self::Cfs),
            "OFS" => Ok(Self::Ofs),
            _ => Err(()),
        }
    }
}

/// 재무제표 종류 (재무상태표/손익계산서).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SjDiv {
    /// BS: 재무상태표
    Bs,
    /// IS: 손익계산서
    Is,
}

impl SjDiv {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bs => "BS",
            Self::Is => "IS",
        }
    }
}

impl FromStr for SjDiv {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BS" => Ok(Self::Bs),
            "IS" => Ok(Self::Is),
            _ => Err(()),
        }
    }
}

/// 재무제표 공시의 한 행 (계정 과목).
///
/// 계정은 안정적인 키가 아니라 자유 텍스트 라벨(`account_nm`)로만
/// 식별되며, 금액은 천 단위 구분자가 포함된 문자열입니다.
/// 모든 필드는 업스트림 응답을 그대로 되돌려주기 위한 통과 필드입니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FilingLineItem {
    /// 계정명 (예: "유동자산")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_nm: Option<String>,
    /// 사업연도 (예: "2024")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsns_year: Option<String>,
    /// 고유번호 (8자리)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corp_code: Option<String>,
    /// 종목코드 (6자리)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    /// 보고서 코드 (예: "11011")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprt_code: Option<String>,
    /// 재무제표 구분 코드 ("CFS" | "OFS")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_div: Option<String>,
    /// 재무제표 구분명 (예: "연결재무제표")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_nm: Option<String>,
    /// 재무제표 종류 코드 ("BS" | "IS")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sj_div: Option<String>,
    /// 재무제표 종류명 (예: "재무상태표")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sj_nm: Option<String>,
    /// 당기 금액 (예: "10,639,789,556,979")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thstrm_amount: Option<String>,
    /// 당기 명칭 (예: "제 31 기1분기말")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thstrm_nm: Option<String>,
    /// 당기 기준일 (예: "2025.03.31 현재")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thstrm_dt: Option<String>,
    /// 전기 금액
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frmtrm_amount: Option<String>,
    /// 전기 명칭
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frmtrm_nm: Option<String>,
    /// 전기 기준일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frmtrm_dt: Option<String>,
    /// 전자공시 접수번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcept_no: Option<String>,
    /// 통화 단위 (예: "KRW")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// 출력 순서
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ord: Option<String>,
}

impl FilingLineItem {
    /// 재무제표 구분 코드 파싱. 알 수 없는 코드는 `None`.
    pub fn fs_div(&self) -> Option<FsDiv> {
        self.fs_div.as_deref().and_then(|s| s.parse().ok())
    }

    /// 재무제표 종류 코드 파싱. 알 수 없는 코드는 `None`.
    pub fn sj_div(&self) -> Option<SjDiv> {
        self.sj_div.as_deref().and_then(|s| s.parse().ok())
    }
}

/// 하나의 공시 조회 호출 결과 (정규화된 DART 응답 envelope).
///
/// `status == "000"`이 성공이며, 그 외 값은 업스트림이 보고한 오류입니다.
/// `list`는 필터링/변형 없이 그대로 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilingResponse {
    /// DART API 상태 코드 ("000" = 정상)
    pub status: String,
    /// 상태 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 재무제표 계정 목록 (통과 전달)
    #[serde(default)]
    pub list: Vec<FilingLineItem>,
}
