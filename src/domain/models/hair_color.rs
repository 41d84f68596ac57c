//! 머리 색상 열거형
//!
//! 사람 정보의 `hair_color` 필드가 가질 수 있는 값의 닫힌 집합입니다.
//! 정확히 소문자 이름만 허용하며, 다른 문자열은 모두 유효하지 않습니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 허용되는 머리 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// 선언 순서대로 나열한 모든 값
    pub const ALL: [HairColor; 5] = [
        HairColor::White,
        HairColor::Brown,
        HairColor::Black,
        HairColor::Blonde,
        HairColor::Red,
    ];

    /// 와이어 포맷 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::White => "white",
            HairColor::Brown => "brown",
            HairColor::Black => "black",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
        }
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 알 수 없는 머리 색상 이름
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHairColor(pub String);

impl fmt::Display for UnknownHairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown hair color: {}", self.0)
    }
}

impl std::error::Error for UnknownHairColor {}

impl FromStr for HairColor {
    type Err = UnknownHairColor;

    /// 대소문자를 구분합니다. `"Brown"`은 허용되지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HairColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownHairColor(s.to_string()))
    }
}
