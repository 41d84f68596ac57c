//! # 사람/위치 요청 DTO
//!
//! 클라이언트 입력 데이터의 선언적 제약을 정의합니다. 모든 제약은
//! 핸들러 본문이 실행되기 전에 `validator`로 검사되며, 위반 사항은
//! 필드별로 모두 수집되어 422 응답으로 반환됩니다.
//!
//! ## 검증 규칙
//!
//! ### 사람 (`Person`)
//! - `first_name`, `last_name`: 1-50자
//! - `age`: 0 초과 115 이하
//! - `email`: 이메일 형식
//! - `password`: 최소 8자 (입력 전용, 응답에 포함되지 않음)
//! - `website`: URL 형식 (선택)
//! - `hair_color`: `white | brown | black | blonde | red` 중 하나 (선택)
//! - `is_married`: 불리언 (선택)
//!
//! ### 위치 (`Location`)
//! - `city`, `state`, `country`: 각각 2-100자
//!
//! 길이는 바이트가 아닌 문자 수 기준입니다.
//!
//! 필수 필드도 `Option`으로 받고 `required`로 검사합니다. 필드가 빠져도
//! 역직렬화가 중단되지 않으므로, 누락과 다른 제약 위반이 한 응답에 함께
//! 보고됩니다. 누락 위반의 코드는 `missing`입니다.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::models::HairColor;

/// 사람 정보 입력 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "first_name": "Mathias",
///   "last_name": "Ortiz",
///   "age": 19,
///   "email": "mathias@example.com",
///   "password": "supersecret",
///   "website": "https://example.com",
///   "hair_color": "brown",
///   "is_married": false
/// }
/// ```
#[derive(Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Person {
    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다")
    )]
    #[schema(required = true, min_length = 1, max_length = 50, example = "Mathias")]
    pub first_name: Option<String>,

    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다")
    )]
    #[schema(required = true, min_length = 1, max_length = 50, example = "Ortiz")]
    pub last_name: Option<String>,

    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        range(exclusive_min = 0, max = 115, message = "나이는 0보다 크고 115 이하여야 합니다")
    )]
    #[schema(required = true, exclusive_minimum = 0, maximum = 115, example = 19)]
    pub age: Option<i64>,

    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        email(message = "유효한 이메일 주소를 입력해주세요")
    )]
    #[schema(required = true, format = "email", example = "mathias@example.com")]
    pub email: Option<String>,

    /// 계정 비밀번호 (응답과 로그에 노출되지 않음)
    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다")
    )]
    #[schema(required = true, min_length = 8, format = Password)]
    pub password: Option<String>,

    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    #[schema(format = "uri")]
    pub website: Option<String>,

    /// 허용 목록은 [`HairColor`] 참고
    #[validate(custom(function = "validate_hair_color"))]
    #[schema(value_type = Option<HairColor>)]
    pub hair_color: Option<String>,

    pub is_married: Option<bool>,
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("password", &"***")
            .field("website", &self.website)
            .field("hair_color", &self.hair_color)
            .field("is_married", &self.is_married)
            .finish()
    }
}

/// 위치 정보 입력 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Location {
    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 2, max = 100, message = "도시는 2-100자 사이여야 합니다")
    )]
    #[schema(required = true, min_length = 2, max_length = 100, example = "Cali")]
    pub city: Option<String>,

    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 2, max = 100, message = "주는 2-100자 사이여야 합니다")
    )]
    #[schema(required = true, min_length = 2, max_length = 100, example = "Valle")]
    pub state: Option<String>,

    #[validate(
        required(code = "missing", message = "필수 필드입니다"),
        length(min = 2, max = 100, message = "국가는 2-100자 사이여야 합니다")
    )]
    #[schema(required = true, min_length = 2, max_length = 100, example = "Colombia")]
    pub country: Option<String>,
}

/// 사람 정보 수정 요청 본문
///
/// 두 객체를 이름으로 감싸서 전달합니다.
///
/// ```json
/// {
///   "person": { "first_name": "A", "...": "..." },
///   "location": { "city": "Cali", "state": "Valle", "country": "Colombia" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonRequest {
    #[validate(required(code = "missing", message = "필수 필드입니다"), nested)]
    #[schema(required = true)]
    pub person: Option<Person>,

    #[validate(required(code = "missing", message = "필수 필드입니다"), nested)]
    #[schema(required = true)]
    pub location: Option<Location>,
}

/// `GET /person/detail` 쿼리 파라미터
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PersonDetailQuery {
    /// 사람 이름
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    #[param(min_length = 1, max_length = 50, example = "Mathias")]
    pub name: Option<String>,

    /// 나이. 숫자 검증 없이 그대로 돌려줍니다.
    #[validate(required(code = "missing", message = "필수 필드입니다"))]
    #[param(required = true, example = "19")]
    pub age: Option<String>,
}

/// `{person_id}` 경로 파라미터
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// 사람 식별자
    #[validate(range(exclusive_min = 0, message = "person_id는 0보다 커야 합니다"))]
    #[param(exclusive_minimum = 0, example = 19)]
    pub person_id: i64,
}

/// 머리 색상이 허용 목록에 있는지 검증
fn validate_hair_color(value: &str) -> Result<(), ValidationError> {
    value.parse::<HairColor>().map(|_| ()).map_err(|_| {
        let allowed: Vec<&str> = HairColor::ALL.iter().map(|c| c.as_str()).collect();
        ValidationError::new("hair_color")
            .with_message(format!("머리 색상은 {} 중 하나여야 합니다", allowed.join(", ")).into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_person() -> Person {
        Person {
            first_name: Some("Mathias".to_string()),
            last_name: Some("Ortiz".to_string()),
            age: Some(19),
            email: Some("mathias@example.com".to_string()),
            password: Some("supersecret".to_string()),
            ..Person::default()
        }
    }

    fn valid_location() -> Location {
        Location {
            city: Some("Cali".to_string()),
            state: Some("Valle".to_string()),
            country: Some("Colombia".to_string()),
        }
    }

    fn invalid_fields(person: &Person) -> Vec<String> {
        let errors = person.validate().unwrap_err();
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_person_passes() {
        assert!(valid_person().validate().is_ok());

        let full = Person {
            website: Some("https://example.com/me".to_string()),
            hair_color: Some("blonde".to_string()),
            is_married: Some(true),
            ..valid_person()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_age_bounds() {
        for age in [1, 50, 115] {
            let person = Person { age: Some(age), ..valid_person() };
            assert!(person.validate().is_ok(), "age {} should be valid", age);
        }
        for age in [0, -3, 116] {
            let person = Person { age: Some(age), ..valid_person() };
            assert_eq!(invalid_fields(&person), vec!["age"]);
        }
    }

    #[test]
    fn test_name_length_bounds() {
        let person = Person {
            first_name: Some(String::new()),
            last_name: Some("x".repeat(51)),
            ..valid_person()
        };
        assert_eq!(invalid_fields(&person), vec!["first_name", "last_name"]);

        // 멀티바이트 문자는 문자 수로 계산
        let person = Person {
            first_name: Some("가".repeat(50)),
            ..valid_person()
        };
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_email_password_and_website_formats() {
        let person = Person {
            email: Some("not-an-email".to_string()),
            password: Some("short".to_string()),
            website: Some("not a url".to_string()),
            ..valid_person()
        };
        assert_eq!(invalid_fields(&person), vec!["email", "password", "website"]);
    }

    #[test]
    fn test_missing_fields_reported_with_other_violations() {
        let person = Person {
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            age: Some(0),
            password: Some("x".to_string()),
            ..Person::default()
        };
        assert_eq!(invalid_fields(&person), vec!["age", "email", "password"]);

        let errors = person.validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["email"][0].code, "missing");
        assert_eq!(field_errors["age"][0].code, "range");
    }

    #[test]
    fn test_hair_color_closed_set() {
        for color in ["white", "brown", "black", "blonde", "red"] {
            let person = Person {
                hair_color: Some(color.to_string()),
                ..valid_person()
            };
            assert!(person.validate().is_ok(), "{} should be accepted", color);
        }

        let person = Person {
            hair_color: Some("purple".to_string()),
            ..valid_person()
        };
        let errors = person.validate().unwrap_err();
        let hair_errors = errors.field_errors();
        let hair = hair_errors.get("hair_color").unwrap();
        assert_eq!(hair[0].code, "hair_color");
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", valid_person());
        assert!(!rendered.contains("supersecret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_location_length_bounds() {
        assert!(valid_location().validate().is_ok());

        let location = Location {
            city: Some("C".to_string()),
            state: Some("x".repeat(101)),
            ..valid_location()
        };
        let errors = location.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_update_request_validates_both_parts() {
        let request = UpdatePersonRequest {
            person: Some(Person { age: Some(0), ..valid_person() }),
            location: Some(Location {
                city: Some("C".to_string()),
                ..valid_location()
            }),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.errors().contains_key("person"));
        assert!(errors.errors().contains_key("location"));
    }

    #[test]
    fn test_update_request_requires_both_parts() {
        let errors = UpdatePersonRequest::default().validate().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors["person"][0].code, "missing");
        assert_eq!(field_errors["location"][0].code, "missing");
    }

    #[test]
    fn test_query_name_optional_but_bounded() {
        let query = PersonDetailQuery {
            name: None,
            age: Some("19".to_string()),
        };
        assert!(query.validate().is_ok());

        let query = PersonDetailQuery {
            name: Some(String::new()),
            age: None,
        };
        let errors = query.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }

    #[test]
    fn test_person_id_must_be_positive() {
        assert!(PersonIdPath { person_id: 19 }.validate().is_ok());
        assert!(PersonIdPath { person_id: 0 }.validate().is_err());
        assert!(PersonIdPath { person_id: -5 }.validate().is_err());
    }
}
