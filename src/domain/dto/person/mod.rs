//! # 사람/위치 DTO 모듈
//!
//! - `request` - 클라이언트 → 서버 입력 DTO (검증 규칙 포함)
//! - `response` - 서버 → 클라이언트 응답 DTO (민감 정보 제외)

pub mod request;
pub mod response;

pub use request::{Location, Person, PersonDetailQuery, PersonIdPath, UpdatePersonRequest};
pub use response::PersonOut;
