//! 홈 핸들러

use actix_web::{get, HttpResponse};
use serde_json::json;

/// 고정된 인사말을 반환합니다.
///
/// # 엔드포인트
///
/// `GET /`
///
/// # 응답
///
/// ```json
/// {"Hello": "world"}
/// ```
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses((status = 200, description = "인사말", example = json!({"Hello": "world"})))
)]
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({"Hello": "world"}))
}
