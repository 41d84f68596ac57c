//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 배너와 라우트 목록을 출력합니다.

/// 박스 내부 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  person_service                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

/// 박스 형태의 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 라우트 한 줄을 만듭니다
///
/// ```text
///    ├─ GET    /person/detail  쿼리 파라미터 검증
/// ```
pub fn route_line(method: &str, path: &str, description: &str) -> String {
    format!("   ├─ {:<6} {:<28} {}", method, path, description)
}

/// 등록된 라우트 목록을 출력합니다
pub fn print_routes(routes: &[(&str, &str, &str)]) {
    for (method, path, description) in routes {
        println!("{}", route_line(method, path, description));
    }
    println!("   └─ {} routes", routes.len());
}
