//! API 라우트 설정 모듈
//!
//! 작성 폼 화면, JSON 제출 API, 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `GET /`, `POST /`, `GET /success` - 작성 폼
//! - `POST /api/v1/letters` - JSON 제출 API
//!
//! 라우트는 `LetterService`가 `web::Data`로 등록되어 있다고 가정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(letter_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest};
use log::warn;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 제출 본문 최대 크기 (긴 서신 본문도 수용)
pub const SUBMISSION_BODY_LIMIT: usize = 256 * 1024;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_form_routes(cfg);
    configure_letter_routes(cfg);
}

/// 브라우저용 작성 폼 라우트를 설정합니다
///
/// 폼 본문을 읽지 못한 경우에도 작성 폼이 `Invalid form data` 알림과 함께 다시 표시됩니다.
fn configure_form_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .limit(SUBMISSION_BODY_LIMIT)
            .error_handler(handlers::form::form_error_handler),
    )
    .service(handlers::form::show_form)
        .service(handlers::form::submit_form)
        .service(handlers::form::show_success);
}

/// JSON 제출 API 라우트를 설정합니다
///
/// 본문 파싱 실패(잘못된 JSON, Content-Type 누락, 문자열이 아닌 값 등)도
/// 스키마 불일치로 보고 `Invalid form data`로 응답합니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/letters \
///   -H "Content-Type: application/json" \
///   -d '{"senderName":"Jane Doe", ...}'
/// ```
fn configure_letter_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/letters")
            .app_data(
                web::JsonConfig::default()
                    .limit(SUBMISSION_BODY_LIMIT)
                    .error_handler(json_error_handler),
            )
            .service(handlers::letters::submit_letter),
    );
}

fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("요청 본문 파싱 실패 - 경로: {}, 에러: {}", req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "cease_desist_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
