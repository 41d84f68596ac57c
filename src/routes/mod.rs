//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use person_service::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

pub mod openapi;

use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 등록된 라우트 목록 (메서드, 경로, 설명)
///
/// 시작 배너와 문서화에 사용됩니다.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "인사말"),
    ("POST", "/person/new", "사람 정보 에코 (비밀번호 제외)"),
    ("GET", "/person/detail", "쿼리 파라미터 검증"),
    ("GET", "/person/detail/{person_id}", "경로 파라미터 검증"),
    ("PUT", "/person/{person_id}", "사람 + 위치 병합"),
    ("GET", "/health", "헬스체크"),
    ("GET", "/openapi.json", "OpenAPI 문서"),
];

/// 모든 라우트를 설정합니다
///
/// 일치하는 라우트가 없으면 JSON 404 응답을 반환합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    cfg.service(openapi::openapi_document);
    cfg.service(handlers::home::home);

    configure_person_routes(cfg);

    cfg.default_service(web::to(not_found));
}

/// 사람 정보 관련 라우트를 설정합니다
///
/// - `POST /person/new`
/// - `GET /person/detail`
/// - `GET /person/detail/{person_id}`
/// - `PUT /person/{person_id}`
fn configure_person_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/person")
            .service(handlers::persons::create_person)
            .service(handlers::persons::show_person)
            .service(handlers::persons::show_person_by_id)
            .service(handlers::persons::update_person),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "person_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "서비스 정상", example = json!({
        "status": "healthy",
        "service": "person_service",
        "version": "0.1.0",
        "timestamp": "2024-01-01T00:00:00+00:00"
    })))
)]
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("{} {}", req.method(), req.path())))
}
