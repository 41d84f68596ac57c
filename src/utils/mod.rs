//! 공통 유틸리티 함수 모듈
//!
//! - [`display_terminal`] - 시작 배너와 라우트 목록 출력

pub mod display_terminal;
