//! # Person HTTP Handlers
//!
//! 사람 정보와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 입력은 검증 추출자를 통과한 뒤에만 핸들러에 도달하므로,
//! 핸들러 본문에는 검증 실패 경로가 없습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/person/new` | 사람 정보 에코 (비밀번호 제외) | 200 OK |
//! | `GET` | `/person/detail` | 쿼리 파라미터 에코 | 200 OK |
//! | `GET` | `/person/detail/{person_id}` | 존재 확인 메시지 | 200 OK |
//! | `PUT` | `/person/{person_id}` | 사람 + 위치 병합 | 200 OK |
//!
//! 검증 실패 시 모든 엔드포인트는 422와 `detail` 목록을 반환합니다.

use std::collections::HashMap;

use actix_web::{get, post, put, HttpResponse};
use log::debug;
use serde_json::Value;

use crate::domain::dto::person::{
    Person, PersonDetailQuery, PersonIdPath, PersonOut, UpdatePersonRequest,
};
use crate::errors::{both, require_validated, AppError, ValidationErrorResponse};
use crate::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::services::PersonService;

/// 사람 정보 생성 핸들러
///
/// 아무것도 저장하지 않고, 검증된 입력을 비밀번호를 제외한 형태로 돌려줍니다.
///
/// # 엔드포인트
///
/// `POST /person/new`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8000/person/new \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Mathias","last_name":"Ortiz","age":19,
///        "email":"mathias@example.com","password":"supersecret","hair_color":"brown"}'
/// ```
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "person",
    request_body = Person,
    responses(
        (status = 200, description = "비밀번호를 제외한 사람 정보", body = PersonOut),
        (status = 422, description = "검증 실패", body = ValidationErrorResponse)
    )
)]
#[post("/new")]
pub async fn create_person(payload: ValidatedJson<Person>) -> Result<HttpResponse, AppError> {
    let person = PersonOut::try_from(payload.into_inner())?;
    debug!("사람 정보 에코: {} {}", person.first_name, person.last_name);

    Ok(HttpResponse::Ok().json(person))
}

/// 쿼리 파라미터 검증 핸들러
///
/// `name`(선택, 1-50자)과 `age`(필수 문자열)를 `{name: age}` 형태로 돌려줍니다.
/// `name`이 없으면 키는 `"null"`입니다.
///
/// # 엔드포인트
///
/// `GET /person/detail?name=Mathias&age=19`
///
/// # 응답
///
/// ```json
/// {"Mathias": "19"}
/// ```
#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "person",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "`{name: age}` 매핑", body = HashMap<String, String>,
            example = json!({"Mathias": "19"})),
        (status = 422, description = "검증 실패", body = ValidationErrorResponse)
    )
)]
#[get("/detail")]
pub async fn show_person(query: ValidatedQuery<PersonDetailQuery>) -> Result<HttpResponse, AppError> {
    let PersonDetailQuery { name, age } = query.into_inner();
    let age = require_validated(age, "age")?;
    let mapping = PersonService::detail_mapping(name.as_deref(), &age);

    Ok(HttpResponse::Ok().json(mapping))
}

/// 경로 파라미터 검증 핸들러
///
/// # 엔드포인트
///
/// `GET /person/detail/{person_id}` (`person_id` > 0)
///
/// # 응답
///
/// ```json
/// {"19": "It exists."}
/// ```
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "person",
    params(PersonIdPath),
    responses(
        (status = 200, description = "존재 확인 메시지", body = HashMap<String, String>,
            example = json!({"19": "It exists."})),
        (status = 422, description = "검증 실패", body = ValidationErrorResponse)
    )
)]
#[get("/detail/{person_id}")]
pub async fn show_person_by_id(path: ValidatedPath<PersonIdPath>) -> Result<HttpResponse, AppError> {
    let mapping = PersonService::existence_mapping(path.person_id);

    Ok(HttpResponse::Ok().json(mapping))
}

/// 사람 정보 수정 핸들러
///
/// 경로의 `person_id`와 본문의 `person`, `location`을 모두 검증한 뒤,
/// 두 객체의 필드를 하나의 매핑으로 합쳐 돌려줍니다. `person_id`는
/// 검증에만 쓰이며 아무 레코드도 선택하지 않습니다.
///
/// 경로와 본문의 위반 사항은 함께 보고됩니다.
///
/// # 엔드포인트
///
/// `PUT /person/{person_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "person": {"first_name": "A", "last_name": "B", "age": 30,
///              "email": "a@b.com", "password": "supersecret"},
///   "location": {"city": "Cali", "state": "Valle", "country": "Colombia"}
/// }
/// ```
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "person",
    params(PersonIdPath),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "사람 + 위치 필드 병합 결과", body = HashMap<String, Value>),
        (status = 422, description = "검증 실패", body = ValidationErrorResponse)
    )
)]
#[put("/{person_id}")]
pub async fn update_person(
    path: Result<ValidatedPath<PersonIdPath>, AppError>,
    payload: Result<ValidatedJson<UpdatePersonRequest>, AppError>,
) -> Result<HttpResponse, AppError> {
    let (path, payload) = both(path, payload)?;
    let UpdatePersonRequest { person, location } = payload.into_inner();
    let person = PersonOut::try_from(require_validated(person, "person")?)?;
    let location = require_validated(location, "location")?;

    debug!("사람 정보 병합: person_id={}", path.person_id);
    let merged = PersonService::merge_with_location(&person, &location)?;

    Ok(HttpResponse::Ok().json(merged))
}
