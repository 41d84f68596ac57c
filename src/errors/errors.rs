//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 응답을 제공합니다. 이 서비스의 유일한 도메인 에러는
//! 입력값 검증 실패이며, 실패한 필드마다 위치(`loc`), 메시지(`msg`),
//! 제약 코드(`type`)를 담은 구조화된 목록으로 응답합니다.
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "error": "Validation error: 1 invalid field(s)",
//!   "detail": [
//!     {"loc": ["body", "age"], "msg": "나이는 0보다 크고 115 이하여야 합니다", "type": "range"}
//!   ]
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 요청 데이터가 추출된 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 검증에 실패한 단일 필드 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// 위치(`path`/`query`/`body`)와 필드 경로
    #[schema(example = json!(["body", "age"]))]
    pub loc: Vec<String>,

    /// 사람이 읽을 수 있는 제약 설명
    pub msg: String,

    /// 위반한 제약 코드 (`length`, `range`, `email`, `missing` 등)
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldViolation {
    /// 위치와 필드 경로로 위반 정보를 생성합니다.
    pub fn new(location: Location, fields: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        let mut loc = Vec::with_capacity(fields.len() + 1);
        loc.push(location.as_str().to_string());
        loc.extend(fields.iter().map(|f| f.to_string()));

        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// 로그용 `body.person.age` 형태의 경로
    pub fn dotted_loc(&self) -> String {
        self.loc.join(".")
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("Validation error: {} invalid field(s)", .0.len())]
    ValidationError(Vec<FieldViolation>),

    /// 잘못된 요청 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `validator`의 검증 결과를 특정 위치의 필드 위반 목록으로 변환합니다.
    ///
    /// 중첩 구조체(`#[validate(nested)]`)와 리스트 에러는 필드 경로를
    /// 이어 붙여 평탄화하며, 결과는 `loc` 기준으로 정렬됩니다.
    pub fn from_validation(location: Location, errors: &ValidationErrors) -> Self {
        let mut violations = Vec::new();
        flatten_errors(&[location.as_str().to_string()], errors, &mut violations);
        violations.sort_by(|a, b| a.loc.cmp(&b.loc));
        AppError::ValidationError(violations)
    }

    /// 검증 에러인 경우 위반 목록을 반환합니다.
    pub fn violations(&self) -> Option<&[FieldViolation]> {
        match self {
            AppError::ValidationError(v) => Some(v),
            _ => None,
        }
    }

    /// 두 에러를 하나로 합칩니다.
    ///
    /// 둘 다 검증 에러면 위반 목록을 합치고, 그렇지 않으면 검증 에러가
    /// 아닌 쪽을 우선합니다.
    pub fn merge(self, other: AppError) -> AppError {
        match (self, other) {
            (AppError::ValidationError(mut a), AppError::ValidationError(b)) => {
                a.extend(b);
                a.sort_by(|x, y| x.loc.cmp(&y.loc));
                AppError::ValidationError(a)
            }
            (AppError::ValidationError(_), other) => other,
            (this, _) => this,
        }
    }
}

/// 검증을 통과한 필수 필드를 꺼냅니다.
///
/// `#[validate(required)]`가 붙은 필드에만 사용합니다. 비어 있다면
/// 검증 없이 만들어진 값이므로 내부 에러로 취급합니다.
pub fn require_validated<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::InternalError(format!("검증되지 않은 필수 필드: {}", field)))
}

/// 두 추출 결과를 함께 검사하여 모든 위반 사항을 한 번에 보고합니다.
pub fn both<A, B>(a: AppResult<A>, b: AppResult<B>) -> AppResult<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(e1), Err(e2)) => Err(e1.merge(e2)),
    }
}

fn flatten_errors(prefix: &[String], errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let mut loc = prefix.to_vec();
        let field = field.to_string();
        // 구조체 수준 검증(`schema`)은 `__all__` 키로 보고됨
        if field != "__all__" {
            loc.push(field);
        }

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} 제약을 만족하지 않습니다", error.code));
                    out.push(FieldViolation {
                        loc: loc.clone(),
                        msg,
                        kind: error.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(&loc, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let mut item_loc = loc.clone();
                    item_loc.push(index.to_string());
                    flatten_errors(&item_loc, nested, out);
                }
            }
        }
    }
}

/// 422 응답 본문
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "Validation error: 1 invalid field(s)")]
    pub error: String,
    pub detail: Vec<FieldViolation>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 `detail` 목록을 포함하고, 나머지는 `{"error": ...}` 형태입니다.
    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::ValidationError(violations) => builder.json(ValidationErrorResponse {
                error: self.to_string(),
                detail: violations.clone(),
            }),
            _ => builder.json(serde_json::json!({
                "error": self.to_string()
            })),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
