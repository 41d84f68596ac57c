//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러는 검증된 입력을 이 계층에 넘겨 응답 매핑을 얻습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::PersonService;
//!
//! let merged = PersonService::merge_with_location(&person_out, &location)?;
//! ```

pub mod person_service;

pub use person_service::PersonService;
