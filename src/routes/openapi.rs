//! OpenAPI 문서
//!
//! 스키마는 DTO의 `ToSchema`/`IntoParams` derive에서, 경로는 핸들러의
//! `#[utoipa::path]` 선언에서 만들어집니다. 문서는 처음 요청될 때 한 번
//! 생성되고 이후 재사용됩니다.

use actix_web::{get, HttpResponse};
use once_cell::sync::Lazy;
use utoipa::OpenApi;

use crate::domain::dto::person::{Location, Person, PersonOut, UpdatePersonRequest};
use crate::domain::models::HairColor;
use crate::errors::{FieldViolation, ValidationErrorResponse};
use crate::handlers;

/// 서비스 전체 API 문서
#[derive(OpenApi)]
#[openapi(
    info(description = "Person API service with declarative request validation"),
    paths(
        handlers::home::home,
        handlers::persons::create_person,
        handlers::persons::show_person,
        handlers::persons::show_person_by_id,
        handlers::persons::update_person,
        super::health_check,
    ),
    components(schemas(
        Person,
        PersonOut,
        Location,
        UpdatePersonRequest,
        HairColor,
        FieldViolation,
        ValidationErrorResponse,
    )),
    tags(
        (name = "person", description = "사람 정보 검증 엔드포인트"),
        (name = "home", description = "인사말"),
        (name = "health", description = "헬스체크"),
    )
)]
pub struct ApiDoc;

/// 지연 생성되는 OpenAPI 문서
pub static OPENAPI_DOCUMENT: Lazy<utoipa::openapi::OpenApi> = Lazy::new(ApiDoc::openapi);

/// OpenAPI 문서 엔드포인트
///
/// `GET /openapi.json`
#[get("/openapi.json")]
pub async fn openapi_document() -> HttpResponse {
    HttpResponse::Ok().json(&*OPENAPI_DOCUMENT)
}
