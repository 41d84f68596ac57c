//! 요청 추출자 모듈
//!
//! 핸들러 인자로 사용되는 검증 추출자를 제공합니다.

pub mod validated;

pub use validated::{ValidatedJson, ValidatedPath, ValidatedQuery};
