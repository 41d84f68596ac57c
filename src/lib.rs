//! 사람 정보 API 서비스
//!
//! 선언적 입력 검증 위에 만들어진 작은 REST API입니다. 모든 요청은
//! 경로/쿼리/본문 단위로 역직렬화와 필드 제약 검사를 거친 뒤에만
//! 핸들러에 도달하며, 위반 사항은 필드별 구조화된 422 응답으로 반환됩니다.
//!
//! # Features
//!
//! - **사람 정보 에코**: 비밀번호를 제외한 응답 전용 형태로 반환
//! - **파라미터 검증**: 쿼리/경로 파라미터의 길이, 범위 제약
//! - **병합 엔드포인트**: 사람 + 위치 필드를 하나의 매핑으로
//! - **OpenAPI 문서**: `/openapi.json`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Extractors    │ ← 역직렬화 + 필드 제약 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 응답 매핑 생성
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use person_service::routes::configure_all_routes;
//!
//! HttpServer::new(|| App::new().configure(configure_all_routes))
//!     .bind("127.0.0.1:8000")?
//!     .run()
//!     .await
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
