//! 사람 정보 응답 DTO
//!
//! 입력 DTO에서 민감한 필드(`password`)를 제외한 응답 전용 형태입니다.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dto::person::request::Person;
use crate::domain::models::HairColor;
use crate::errors::{require_validated, AppError};

/// 응답용 사람 정보 (비밀번호 제외)
///
/// 선택 필드가 비어 있으면 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonOut {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub website: Option<String>,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

impl TryFrom<Person> for PersonOut {
    type Error = AppError;

    /// 검증을 통과한 `Person`을 응답 형태로 바꿉니다.
    ///
    /// 필수 필드가 비었거나 머리 색상이 허용 목록 밖이면 내부 에러입니다.
    fn try_from(person: Person) -> Result<Self, Self::Error> {
        let Person {
            first_name,
            last_name,
            age,
            email,
            website,
            hair_color,
            is_married,
            ..
        } = person;

        let hair_color = hair_color
            .map(|color| color.parse::<HairColor>())
            .transpose()
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        Ok(Self {
            first_name: require_validated(first_name, "first_name")?,
            last_name: require_validated(last_name, "last_name")?,
            age: require_validated(age, "age")?,
            email: require_validated(email, "email")?,
            website,
            hair_color,
            is_married,
        })
    }
}
