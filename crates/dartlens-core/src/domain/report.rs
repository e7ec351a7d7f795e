//! 보고서 유형 코드.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 정기공시 보고서 유형 (DART 고정 코드).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportCode {
    /// 11013: 1분기보고서
    Q1,
    /// 11012: 반기보고서
    Half,
    /// 11014: 3분기보고서
    Q3,
    /// 11011: 사업보고서 (연간)
    Annual,
}

impl ReportCode {
    /// DART `reprt_code` 문자열.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Q1 => "11013",
            Self::Half => "11012",
            Self::Q3 => "11014",
            Self::Annual => "11011",
        }
    }

    /// 사용자 표시용 한글 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Q1 => "1분기보고서",
            Self::Half => "반기보고서",
            Self::Q3 => "3분기보고서",
            Self::Annual => "사업보고서 (연간)",
        }
    }
}

impl FromStr for ReportCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "11013" => Ok(Self::Q1),
            "11012" => Ok(Self::Half),
            "11014" => Ok(Self::Q3),
            "11011" => Ok(Self::Annual),
            _ => Err(()),
        }
    }
}

/// 보고서 선택 옵션.
///
/// 가용성 판정기가 생성하는 UI용 값으로, 저장되지 않습니다.
/// 선택 가능한 보고서가 없으면 `value == "none"`인 센티넬 하나만
/// 반환되며, 호출자는 이를 오류가 아니라 "제출 비활성화"로 다룹니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportOption {
    /// `reprt_code` 또는 센티넬 "none"
    pub value: String,
    /// 사용자 표시용 라벨
    pub label: String,
}

impl ReportOption {
    /// 센티넬 value.
    pub const NONE_VALUE: &'static str = "none";

    /// 보고서 코드 옵션 생성.
    pub fn from_code(code: ReportCode) -> Self {
        Self {
            value: code.code().to_string(),
            label: code.label().to_string(),
        }
    }

    /// "선택 가능한 보고서 없음" 센티넬 옵션.
    pub fn none() -> Self {
        Self {
            value: Self::NONE_VALUE.to_string(),
            label: "선택 가능한 보고서 없음".to_string(),
        }
    }

    /// 센티넬 여부.
    pub fn is_none_option(&self) -> bool {
        self.value == Self::NONE_VALUE
    }
}
