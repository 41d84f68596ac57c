//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 요청 DTO는 `validator` 규칙을 선언하고, 응답 DTO는 민감한 필드를
//! 제외한 형태만 노출합니다.
//!
//! ```text
//! dto/
//! └── person/
//!     ├── request.rs    # Person, Location, 쿼리/경로 파라미터
//!     └── response.rs   # PersonOut
//! ```

pub mod person;
