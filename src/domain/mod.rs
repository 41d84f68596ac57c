//! # Domain Layer Module
//!
//! 요청/응답 계약과 값 타입을 담는 도메인 계층입니다.
//!
//! - [`dto`] - 검증 규칙이 선언된 요청 DTO와 응답 DTO
//! - [`models`] - DTO들이 공유하는 값 타입 (`HairColor`)
//!
//! 이 서비스는 아무것도 저장하지 않으므로 엔티티 계층은 없습니다.

pub mod dto;
pub mod models;
