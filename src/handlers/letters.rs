//! # Letter Submission HTTP Handlers
//!
//! 내용증명 제출 경계(JSON API)를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/letters` | 내용증명 검증 및 발송 | 200 / 400 / 500 |
//!
//! 응답 본문은 항상 `{ "success": bool, "error"?: string }` 형태입니다.

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::letters::{request::LetterForm, response::SubmissionResult};
use crate::services::letters::LetterService;

/// 내용증명 제출 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/letters`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "success": true }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "success": false, "error": "Invalid form data" }
/// ```
///
/// ## 발송 실패 (500 Internal Server Error)
/// ```json
/// { "success": false, "error": "Failed to send cease and desist letter" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/letters \
///   -H "Content-Type: application/json" \
///   -d '{
///     "senderName": "Jane Doe",
///     "senderEmail": "jane@example.com",
///     "recipientName": "John Smith",
///     "recipientEmail": "john@example.com",
///     "recipientAddress": "1 Main St, Springfield",
///     "date": "2024-05-01",
///     "reason": "Unauthorized use of trademark",
///     "specificActions": "Stop selling goods bearing the mark",
///     "deadline": "2024-05-15",
///     "consequences": "Legal action",
///     "legalRights": "Registered trademark holder",
///     "sendViaMail": "true"
///   }'
/// ```
#[post("")]
pub async fn submit_letter(
    service: web::Data<LetterService>,
    payload: web::Json<LetterForm>,
) -> Result<HttpResponse, AppError> {
    service.send(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SubmissionResult::ok()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use super::*;
    use crate::domain::dto::letters::request::letter_form::sample_form;
    use crate::routes::configure_all_routes;
    use crate::services::delivery::DeliveryError;
    use crate::services::delivery::testing::{
        Delivery, DeliveryLog, RecordingEmailSender, RecordingMailSender,
    };

    fn letter_service(log: &DeliveryLog, email_fails: bool) -> web::Data<LetterService> {
        let email = if email_fails {
            RecordingEmailSender::failing(log, DeliveryError::Unavailable("down".to_string()))
        } else {
            RecordingEmailSender::new(log)
        };
        web::Data::new(LetterService::new(
            Arc::new(email),
            Arc::new(RecordingMailSender::new(log)),
        ))
    }

    #[actix_web::test]
    async fn test_submit_letter_success() {
        let log = DeliveryLog::default();
        let app = test::init_service(
            App::new()
                .app_data(letter_service(&log, false))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/letters")
            .set_json(sample_form("true"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: SubmissionResult = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResult::ok());

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Delivery::Email(_)));
        assert!(matches!(entries[1], Delivery::Mail(_)));
    }

    #[actix_web::test]
    async fn test_submit_letter_validation_failure() {
        let log = DeliveryLog::default();
        let app = test::init_service(
            App::new()
                .app_data(letter_service(&log, false))
                .configure(configure_all_routes),
        )
        .await;

        let mut form = sample_form("false");
        form.recipient_email = Some("nope".to_string());
        let req = test::TestRequest::post()
            .uri("/api/v1/letters")
            .set_json(form)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: SubmissionResult = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResult::failed("Invalid form data"));
        assert!(log.entries().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_invalid_form_data() {
        let log = DeliveryLog::default();
        let app = test::init_service(
            App::new()
                .app_data(letter_service(&log, false))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/letters")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"senderName": 42"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: SubmissionResult = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResult::failed("Invalid form data"));
    }

    #[actix_web::test]
    async fn test_submit_letter_delivery_failure() {
        let log = DeliveryLog::default();
        let app = test::init_service(
            App::new()
                .app_data(letter_service(&log, true))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/letters")
            .set_json(sample_form("true"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: SubmissionResult = test::read_body_json(resp).await;
        assert_eq!(body, SubmissionResult::failed("Failed to send cease and desist letter"));

        // 우편 발송은 시도되지 않음
        assert_eq!(log.entries().len(), 1);
    }
}
