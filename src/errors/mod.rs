//! 에러 처리 모듈
//!
//! 요청 검증 실패를 구조화된 HTTP 응답으로 변환하는 [`AppError`]를 제공합니다.

pub mod errors;

pub use errors::{
    both, require_validated, AppError, AppResult, FieldViolation, Location, ValidationErrorResponse,
};
