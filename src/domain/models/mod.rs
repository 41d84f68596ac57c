//! 도메인 모델
//!
//! DTO 여러 곳에서 공유하는 값 타입을 정의합니다.

pub mod hair_color;

pub use hair_color::{HairColor, UnknownHairColor};
