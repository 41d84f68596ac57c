//! # 사람 정보 서비스
//!
//! 핸들러가 돌려줄 응답 매핑을 만드는 로직입니다. 저장소가 없으므로
//! 모든 연산은 검증된 입력만으로 계산되는 순수 함수입니다.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::dto::person::{Location, PersonOut};
use crate::errors::{AppError, AppResult};

/// 이름이 없을 때 사용하는 매핑 키
pub const MISSING_NAME_KEY: &str = "null";

/// 사람 정보 응답 매핑을 생성하는 서비스
pub struct PersonService;

impl PersonService {
    /// 사람 정보 위에 위치 정보를 덮어써서 하나의 매핑으로 합칩니다.
    ///
    /// 키가 겹치면 위치 쪽 값이 남습니다. 비어 있는 선택 필드는 `null`로 포함됩니다.
    pub fn merge_with_location(person: &PersonOut, location: &Location) -> AppResult<Map<String, Value>> {
        let mut merged = Self::to_fields(person)?;
        merged.extend(Self::to_fields(location)?);
        Ok(merged)
    }

    /// `{name: age}` 형태의 단일 항목 매핑
    pub fn detail_mapping(name: Option<&str>, age: &str) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(
            name.unwrap_or(MISSING_NAME_KEY).to_string(),
            Value::String(age.to_string()),
        );
        mapping
    }

    /// `{person_id: "It exists."}` 확인 매핑
    pub fn existence_mapping(person_id: i64) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(person_id.to_string(), Value::String("It exists.".to_string()));
        mapping
    }

    fn to_fields<T: Serialize>(value: &T) -> AppResult<Map<String, Value>> {
        match serde_json::to_value(value) {
            Ok(Value::Object(fields)) => Ok(fields),
            Ok(other) => Err(AppError::InternalError(format!(
                "객체가 아닌 값은 병합할 수 없습니다: {}",
                other
            ))),
            Err(e) => Err(AppError::InternalError(format!("직렬화 실패: {}", e))),
        }
    }
}
