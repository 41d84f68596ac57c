//! 서버 및 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, Rate Limiting, CORS 관련 설정을 환경 변수에서
//! 읽어옵니다. 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 모든 Origin 허용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::from_name(&value))
            .unwrap_or(Environment::Production)
    }

    /// 이름(대소문자 무관)에서 Environment를 생성합니다.
    /// 알 수 없는 값은 `Production`입니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// 환경 변수 값을 파싱하고, 실패하면 에러를 기록한 뒤 기본값을 반환합니다.
///
/// 값이 없으면 조용히 기본값을 사용합니다.
pub fn parse_or_default<T>(name: &str, value: Option<&str>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match value {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}

fn env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or_default(name, env::var(name).ok().as_deref(), default)
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_WORKERS: usize = 4;

    /// 환경 변수에서 서버 설정을 읽어옵니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST` (기본값: `127.0.0.1`)
    /// - `PORT` (기본값: `8000`)
    /// - `WORKERS` (기본값: `4`)
    pub fn load() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string()),
            port: env_or_default("PORT", Self::DEFAULT_PORT),
            workers: env_or_default("WORKERS", Self::DEFAULT_WORKERS).max(1),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load() -> Self {
        Self {
            per_second: env_or_default("RATE_LIMIT_PER_SECOND", Self::DEFAULT_PER_SECOND),
            burst_size: env_or_default("RATE_LIMIT_BURST_SIZE", Self::DEFAULT_BURST_SIZE),
        }
    }
}

/// CORS 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub const DEFAULT_ORIGINS: &'static str = "http://localhost:3000,http://127.0.0.1:3000";

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)에서 허용 Origin 목록을 읽어옵니다.
    pub fn load() -> Self {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| Self::DEFAULT_ORIGINS.to_string());
        Self::from_list(&raw)
    }

    /// 쉼표로 구분된 목록을 파싱합니다. 빈 항목은 무시합니다.
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}
