//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Extractors - 역직렬화 + 제약 검증
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 응답 구성
//! ├─────────────────────────────────────────────┤
//!   Services - 응답 매핑 생성
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - **`home`**: `GET /`
//! - **`persons`**: `/person/*` 엔드포인트

pub mod home;
pub mod persons;
