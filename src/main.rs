//! 사람 정보 API 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.

use std::io;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use person_service::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use person_service::routes::{configure_all_routes, ROUTES};
use person_service::utils::display_terminal::{print_boxed_title, print_routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env 로드 후 로깅 초기화 (RUST_LOG가 .env에 있을 수 있음)
    let profile_status = load_env_file();
    init_logging();
    info!("{}", profile_status);

    print_boxed_title(env!("CARGO_PKG_NAME"));
    print_routes(ROUTES);

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let environment = Environment::current();
    let server_config = ServerConfig::load();
    let cors_config = CorsConfig::load();
    let rate_limit_config = RateLimitConfig::load();

    info!("실행 환경: {:?}", environment);
    info!("Rate Limiting 설정 로드됨: {:?}", rate_limit_config);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)",
            )
        })?;

    let bind_address = server_config.bind_address();
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/openapi.json", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&environment, &cors_config);

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(server_config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 호출되므로 결과를 문자열로 돌려줍니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let result = if filename == ".env" {
        dotenv().map(|_| ())
    } else {
        dotenv::from_filename(filename).map(|_| ())
    };

    match result {
        Ok(()) => format!("Current profile: {} ({} 파일 로드 됨)", profile, filename),
        Err(e) => format!("Current profile: {} ({} 파일 로드 실패: {})", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고, 그 외에는 `CORS_ALLOWED_ORIGINS`
/// 목록만 허용합니다.
fn configure_cors(environment: &Environment, config: &CorsConfig) -> Cors {
    if environment.is_development() {
        return Cors::permissive();
    }

    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
