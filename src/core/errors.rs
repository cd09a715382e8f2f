//! # Application Error Handling System
//!
//! 내용증명 발송 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패를 일관된 `{ "success": false, "error": ... }` 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! 이 서비스에는 두 종류의 에러만 존재합니다.
//!
//! | AppError | HTTP Status | 사용자 메시지 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | `Invalid form data` |
//! | `DeliveryError` | 500 Internal Server Error | `Failed to send cease and desist letter` |
//!
//! 두 에러 모두 요청 단위로 종료되며 재시도하지 않습니다.
//! 에러에 담긴 상세 문자열은 로그 전용이며 클라이언트에게는 고정 메시지만 전달됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn send(&self, form: LetterForm) -> Result<(), AppError> {
//!     let request = form.into_letter_request()?;   // ValidationError
//!     self.email_sender.send_email(message).await?; // DeliveryError (From 변환)
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::services::delivery::DeliveryError;

/// 검증 실패 시 사용자에게 노출되는 메시지
pub const INVALID_FORM_DATA: &str = "Invalid form data";

/// 발송 실패 시 사용자에게 노출되는 메시지
pub const DELIVERY_FAILED: &str = "Failed to send cease and desist letter";

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 운영자용 상세 메시지를 보관합니다. `Display` 출력은 로그에,
/// [`AppError::user_message`]는 클라이언트 응답에 사용됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 이메일 형식 오류, 요청 본문 파싱 실패 등
    /// 스키마와 맞지 않는 모든 입력에서 발생합니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// form.validate()
    ///     .map_err(|e| AppError::ValidationError(e.to_string()))?;
    /// ```
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 발송 채널 에러
    ///
    /// 이메일 또는 내용증명 우편 발송자가 요청을 거부했을 때 발생합니다.
    /// 어느 채널에서 실패했는지는 상세 메시지에만 남고 응답에서는 구분하지 않습니다.
    #[error("Delivery error: {0}")]
    DeliveryError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 고정 메시지를 반환합니다.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => INVALID_FORM_DATA,
            AppError::DeliveryError(_) => DELIVERY_FAILED,
        }
    }
}

impl From<DeliveryError> for AppError {
    fn from(err: DeliveryError) -> Self {
        AppError::DeliveryError(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 상세 메시지 대신 고정된 사용자 메시지만 JSON 본문에 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "success": false,
                "error": self.user_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("senderEmail: email".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(error.user_message(), "Invalid form data");
    }

    #[test]
    fn test_delivery_error_response() {
        let error = AppError::DeliveryError("smtp relay refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.user_message(), "Failed to send cease and desist letter");
    }

    #[test]
    fn test_detail_is_kept_for_logs_only() {
        let error = AppError::ValidationError("recipientName: required".to_string());

        assert!(error.to_string().contains("recipientName"));
        assert!(!error.user_message().contains("recipientName"));
    }

    #[test]
    fn test_delivery_error_conversion() {
        let error: AppError = DeliveryError::Rejected("mailbox full".to_string()).into();

        match error {
            AppError::DeliveryError(msg) => assert!(msg.contains("mailbox full")),
            other => panic!("Expected DeliveryError, got {:?}", other),
        }
    }
}
