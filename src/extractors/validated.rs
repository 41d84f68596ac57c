//! 검증 추출자
//!
//! actix-web의 `Json`/`Query`/`Path` 추출 결과에 `validator` 검증을
//! 더한 추출자입니다. 역직렬화 실패와 제약 위반 모두 핸들러가 호출되기
//! 전에 [`AppError::ValidationError`]로 변환됩니다.
//!
//! JSON 본문은 먼저 `serde_json::Value`로 읽은 뒤 대상 타입으로 바꿉니다.
//! 타입이 맞지 않는 필드는 `serde_path_to_error`가 찾은 경로에 보고됩니다.
//!
//! ```rust,ignore
//! #[post("/new")]
//! pub async fn create_person(payload: ValidatedJson<Person>) -> AppResult<HttpResponse> {
//!     // 여기 도달했다면 모든 필드 제약을 통과한 상태
//!     Ok(HttpResponse::Ok().json(PersonOut::try_from(payload.into_inner())?))
//! }
//! ```

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value;
use serde_path_to_error::Segment;
use validator::Validate;

use crate::errors::{AppError, AppResult, FieldViolation, Location};

/// 검증된 JSON 본문
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// 검증된 쿼리 파라미터
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// 검증된 경로 파라미터
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

macro_rules! impl_wrapper {
    ($name:ident) => {
        impl<T> $name<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $name<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }
    };
}

impl_wrapper!(ValidatedJson);
impl_wrapper!(ValidatedQuery);
impl_wrapper!(ValidatedPath);

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, AppResult<Self>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let raw = json
                .await
                .map_err(|err| log_rejection(json_error(&err)))?
                .into_inner();
            let value = serde_path_to_error::deserialize::<_, T>(raw)
                .map_err(|err| log_rejection(AppError::ValidationError(vec![typed_violation(&err)])))?;
            validated(Location::Body, value).map(ValidatedJson)
        })
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = AppError;
    type Future = Ready<AppResult<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map_err(|err| log_rejection(query_error(err)))
            .and_then(|query| validated(Location::Query, query.into_inner()))
            .map(ValidatedQuery);

        ready(result)
    }
}

impl<T> FromRequest for ValidatedPath<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = AppError;
    type Future = Ready<AppResult<Self>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .load::<T>()
            .map_err(|err| log_rejection(path_error(req, &err.to_string())))
            .and_then(|value| validated(Location::Path, value))
            .map(ValidatedPath);

        ready(result)
    }
}

fn validated<T: Validate>(location: Location, value: T) -> AppResult<T> {
    match value.validate() {
        Ok(()) => Ok(value),
        Err(errors) => Err(log_rejection(AppError::from_validation(location, &errors))),
    }
}

fn log_rejection(error: AppError) -> AppError {
    match error.violations() {
        Some(violations) => {
            let locs: Vec<String> = violations.iter().map(|v| v.dotted_loc()).collect();
            warn!("요청 검증 실패: [{}]", locs.join(", "));
        }
        None => warn!("요청 추출 실패: {}", error),
    }
    error
}

fn json_error(err: &actix_web::Error) -> AppError {
    match err.as_error::<JsonPayloadError>() {
        Some(JsonPayloadError::Deserialize(e)) => AppError::ValidationError(vec![serde_json_violation(e)]),
        Some(JsonPayloadError::ContentType) => AppError::ValidationError(vec![FieldViolation::new(
            Location::Body,
            &[],
            "Content-Type은 application/json이어야 합니다",
            "content_type",
        )]),
        Some(other) => AppError::BadRequest(other.to_string()),
        None => AppError::BadRequest(err.to_string()),
    }
}

fn serde_json_violation(e: &serde_json::Error) -> FieldViolation {
    match e.classify() {
        Category::Data => deserialize_violation(Location::Body, &[], &e.to_string()),
        _ => FieldViolation::new(
            Location::Body,
            &[],
            format!("JSON 파싱 실패: {}", e),
            "json_invalid",
        ),
    }
}

/// 본문 타입 변환 실패를 실패 지점의 필드 경로와 함께 위반으로 바꿉니다.
fn typed_violation(err: &serde_path_to_error::Error<serde_json::Error>) -> FieldViolation {
    let segments: Vec<String> = err
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Seq { index } => Some(index.to_string()),
            Segment::Map { key } => Some(key.clone()),
            Segment::Enum { variant } => Some(variant.clone()),
            Segment::Unknown => None,
        })
        .collect();
    let fields: Vec<&str> = segments.iter().map(String::as_str).collect();

    deserialize_violation(Location::Body, &fields, &err.inner().to_string())
}

fn query_error(err: QueryPayloadError) -> AppError {
    match err {
        QueryPayloadError::Deserialize(e) => {
            AppError::ValidationError(vec![deserialize_violation(Location::Query, &[], &e.to_string())])
        }
        other => AppError::BadRequest(other.to_string()),
    }
}

fn path_error(req: &HttpRequest, message: &str) -> AppError {
    // 동적 세그먼트가 하나뿐이면 그 이름으로 위치를 특정
    let segments: Vec<&str> = req.match_info().iter().map(|(name, _)| name).collect();
    let fields: &[&str] = if segments.len() == 1 { &segments } else { &[] };

    AppError::ValidationError(vec![deserialize_violation(Location::Path, fields, message)])
}

/// serde 역직렬화 메시지를 필드 위반으로 변환합니다.
///
/// `missing field` 메시지는 `fields` 아래 해당 필드의 `missing` 위반이 되고,
/// 나머지는 `fields` 위치의 `type_error`가 됩니다.
fn deserialize_violation(location: Location, fields: &[&str], message: &str) -> FieldViolation {
    match missing_field(message) {
        Some(field) => {
            let mut loc = fields.to_vec();
            loc.push(field);
            FieldViolation::new(location, &loc, "필수 필드입니다", "missing")
        }
        None => FieldViolation::new(location, fields, message, "type_error"),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_extraction() {
        assert_eq!(missing_field("missing field `email` at line 1 column 20"), Some("email"));
        assert_eq!(missing_field("missing field `age`"), Some("age"));
        assert_eq!(missing_field("invalid type: string \"x\", expected i64"), None);
    }

    #[test]
    fn test_deserialize_violation_kinds() {
        let missing = deserialize_violation(Location::Query, &[], "missing field `age`");
        assert_eq!(missing.loc, vec!["query", "age"]);
        assert_eq!(missing.kind, "missing");

        let typed = deserialize_violation(Location::Path, &["person_id"], "can not parse \"abc\" to a i64");
        assert_eq!(typed.loc, vec!["path", "person_id"]);
        assert_eq!(typed.kind, "type_error");
    }

    #[test]
    fn test_missing_field_keeps_parent_path() {
        let missing = deserialize_violation(Location::Body, &["person"], "missing field `email`");
        assert_eq!(missing.loc, vec!["body", "person", "email"]);
        assert_eq!(missing.kind, "missing");
    }

    #[derive(Debug, serde::Deserialize)]
    struct Wrapper {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        age: Option<i64>,
    }

    #[test]
    fn test_type_error_carries_field_path() {
        let raw = serde_json::json!({"inner": {"age": "abc"}});
        let err = serde_path_to_error::deserialize::<_, Wrapper>(raw).unwrap_err();
        let violation = typed_violation(&err);

        assert_eq!(violation.loc, vec!["body", "inner", "age"]);
        assert_eq!(violation.kind, "type_error");
    }

    #[test]
    fn test_syntax_error_is_json_invalid() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let violation = serde_json_violation(&err);
        assert_eq!(violation.loc, vec!["body"]);
        assert_eq!(violation.kind, "json_invalid");
    }
}
