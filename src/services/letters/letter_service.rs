//! # 내용증명 제출 서비스
//!
//! 폼 페이로드를 검증하고, 본문을 생성하고, 발송 채널을 호출하는 핵심 비즈니스 로직입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! LetterForm
//!    │ 1. 검증 (실패 → "Invalid form data", 발송 없음)
//!    ▼
//! LetterRequest
//!    │ 2. 본문 생성 (render_letter)
//!    ▼
//! EmailSender::send_email        ← 3. 항상, 결과를 기다림
//!    │ (실패 → 이후 단계 중단)
//!    ▼
//! MailSender::send_certified_mail ← 4. sendViaMail == true 일 때만
//!    │
//!    ▼
//! 5. 발송 실패는 로그 후 "Failed to send cease and desist letter"
//! 6. 성공 → { success: true }
//! ```
//!
//! 두 발송은 순차 실행되며 재시도나 롤백은 없습니다.
//! 이메일 발송 후 우편 발송이 실패해도 이메일은 이미 나간 상태로 남습니다.

use std::sync::Arc;

use log::{error, info};

use crate::{
    core::errors::AppResult,
    domain::dto::letters::{request::LetterForm, response::SubmissionResult},
    services::delivery::{CertifiedMail, EmailMessage, EmailSender, MailSender},
};
use super::letter_template::{render_letter, LETTER_SUBJECT};

/// 내용증명 제출 처리기
///
/// 상태 없는 발송자에 대한 `Arc`만 보관하므로 요청 간에 공유되는 가변 상태가 없습니다.
/// actix-web에서는 `web::Data<LetterService>`로 등록해 사용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let service = LetterService::new(
///     Arc::new(LoggingEmailSender),
///     Arc::new(LoggingMailSender),
/// );
///
/// let result = service.submit(form).await;
/// if result.success {
///     println!("발송 완료");
/// }
/// ```
#[derive(Clone)]
pub struct LetterService {
    email_sender: Arc<dyn EmailSender>,
    mail_sender: Arc<dyn MailSender>,
}

impl LetterService {
    pub fn new(email_sender: Arc<dyn EmailSender>, mail_sender: Arc<dyn MailSender>) -> Self {
        Self {
            email_sender,
            mail_sender,
        }
    }

    /// 페이로드를 검증하고 발송합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 스키마 불일치. 발송자는 호출되지 않음
    /// * `AppError::DeliveryError` - 이메일 또는 우편 발송 실패
    pub async fn send(&self, form: LetterForm) -> AppResult<()> {
        let request = form.into_letter_request()?;
        let letter = render_letter(&request);

        let delivery = async {
            self.email_sender
                .send_email(EmailMessage {
                    to: request.recipient_email().to_string(),
                    from: request.sender_email().to_string(),
                    subject: LETTER_SUBJECT.to_string(),
                    body: letter.clone(),
                })
                .await?;

            if request.send_via_mail() {
                self.mail_sender
                    .send_certified_mail(CertifiedMail {
                        to: request.recipient_address().to_string(),
                        from: request.sender_name().to_string(),
                        content: letter.clone(),
                    })
                    .await?;
            }

            AppResult::Ok(())
        };

        if let Err(e) = delivery.await {
            error!("내용증명 발송 실패 - 수신자: {}, 에러: {}", request.recipient_email(), e);
            return Err(e);
        }

        info!(
            "✅ 내용증명 발송 완료 - 수신자: {}, 우편 동시 발송: {}",
            request.recipient_email(),
            request.send_via_mail()
        );
        Ok(())
    }

    /// 페이로드를 제출하고 결과 객체를 반환합니다.
    ///
    /// [`LetterService::send`]의 결과를 `{ success, error? }` 형태로 접습니다.
    pub async fn submit(&self, form: LetterForm) -> SubmissionResult {
        match self.send(form).await {
            Ok(()) => SubmissionResult::ok(),
            Err(e) => SubmissionResult::from(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::letters::request::letter_form::sample_form;
    use crate::services::delivery::DeliveryError;
    use crate::services::delivery::testing::{
        Delivery, DeliveryLog, RecordingEmailSender, RecordingMailSender,
    };

    fn service_with(email: RecordingEmailSender, mail: RecordingMailSender) -> LetterService {
        LetterService::new(Arc::new(email), Arc::new(mail))
    }

    fn healthy_service(log: &DeliveryLog) -> LetterService {
        service_with(RecordingEmailSender::new(log), RecordingMailSender::new(log))
    }

    #[actix_web::test]
    async fn test_missing_field_rejected_without_delivery() {
        let log = DeliveryLog::default();
        let service = healthy_service(&log);

        let mut form = sample_form("true");
        form.deadline = None;
        let result = service.submit(form).await;

        assert_eq!(result, SubmissionResult::failed("Invalid form data"));
        assert!(log.entries().is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_email_rejected_without_delivery() {
        let log = DeliveryLog::default();
        let service = healthy_service(&log);

        let mut form = sample_form("true");
        form.sender_email = Some("jane-at-example".to_string());
        assert_eq!(service.submit(form).await, SubmissionResult::failed("Invalid form data"));

        let mut form = sample_form("true");
        form.recipient_email = Some("@example.com".to_string());
        assert_eq!(service.submit(form).await, SubmissionResult::failed("Invalid form data"));

        assert!(log.entries().is_empty());
    }

    #[actix_web::test]
    async fn test_email_only_when_mail_not_requested() {
        let log = DeliveryLog::default();
        let service = healthy_service(&log);

        let result = service.submit(sample_form("false")).await;

        assert_eq!(result, SubmissionResult::ok());
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        match &entries[0] {
            Delivery::Email(message) => {
                assert_eq!(message.to, "john@example.com");
                assert_eq!(message.from, "jane@example.com");
                assert_eq!(message.subject, "Cease and Desist Notice");
                assert!(message.body.contains("Dear John Smith,"));
                assert!(message.body.ends_with("Sincerely,\nJane Doe"));
            }
            other => panic!("Expected email, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_email_then_mail_when_requested() {
        let log = DeliveryLog::default();
        let service = healthy_service(&log);

        let result = service.submit(sample_form("true")).await;

        assert_eq!(result, SubmissionResult::ok());
        let entries = log.entries();
        assert_eq!(entries.len(), 2);

        let body = match &entries[0] {
            Delivery::Email(message) => message.body.clone(),
            other => panic!("Expected email first, got {:?}", other),
        };
        match &entries[1] {
            Delivery::Mail(mail) => {
                assert_eq!(mail.to, "1 Main St\nSpringfield, IL 62701");
                assert_eq!(mail.from, "Jane Doe");
                assert_eq!(mail.content, body);
            }
            other => panic!("Expected mail second, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_email_failure_skips_mail() {
        let log = DeliveryLog::default();
        let service = service_with(
            RecordingEmailSender::failing(&log, DeliveryError::Unavailable("provider down".to_string())),
            RecordingMailSender::new(&log),
        );

        let result = service.submit(sample_form("true")).await;

        assert_eq!(result, SubmissionResult::failed("Failed to send cease and desist letter"));
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], Delivery::Email(_)));
    }

    #[actix_web::test]
    async fn test_mail_failure_after_email_sent() {
        let log = DeliveryLog::default();
        let service = service_with(
            RecordingEmailSender::new(&log),
            RecordingMailSender::failing(&log, DeliveryError::Rejected("address not found".to_string())),
        );

        let result = service.submit(sample_form("true")).await;

        // 이메일은 이미 발송되었고 되돌리지 않음
        assert_eq!(result, SubmissionResult::failed("Failed to send cease and desist letter"));
        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], Delivery::Email(_)));
        assert!(matches!(entries[1], Delivery::Mail(_)));
    }

    #[actix_web::test]
    async fn test_send_returns_typed_errors() {
        let log = DeliveryLog::default();
        let service = service_with(
            RecordingEmailSender::failing(&log, DeliveryError::Rejected("spam".to_string())),
            RecordingMailSender::new(&log),
        );

        let mut invalid = sample_form("false");
        invalid.sender_name = Some(String::new());

        assert!(matches!(
            service.send(invalid).await,
            Err(crate::core::errors::AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.send(sample_form("false")).await,
            Err(crate::core::errors::AppError::DeliveryError(_))
        ));
    }
}
