//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 실행 환경
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8000"
//! export WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```

pub mod data_config;

pub use data_config::*;
