//! # 내용증명 폼 요청 DTO
//!
//! 클라이언트가 보내는 원시 키-값 페이로드를 표현합니다.
//! 모든 값은 없을 수 있는 문자열(`Option<String>`)이며, 키는 camelCase입니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `senderName`, `recipientName`, `recipientAddress` | 필수, 1자 이상 |
//! | `senderEmail`, `recipientEmail` | 필수, 이메일 형식 |
//! | `date`, `reason`, `specificActions` | 필수, 1자 이상 |
//! | `deadline`, `consequences`, `legalRights` | 필수, 1자 이상 |
//! | `sendViaMail` | 필수, 값이 정확히 `"true"`일 때만 true |
//!
//! 공백은 제거하지 않습니다. 공백만 있는 값도 1자 이상이면 통과합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "senderName": "Jane Doe",
//!   "senderEmail": "jane@example.com",
//!   "recipientName": "John Smith",
//!   "recipientEmail": "john@example.com",
//!   "recipientAddress": "1 Main St, Springfield",
//!   "date": "2024-05-01",
//!   "reason": "Unauthorized use of trademark",
//!   "specificActions": "Stop selling goods bearing the mark",
//!   "deadline": "2024-05-15",
//!   "consequences": "Legal action will be pursued",
//!   "legalRights": "I hold the registered trademark",
//!   "sendViaMail": "false"
//! }
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::LetterRequest;

/// 내용증명 작성 폼의 원시 페이로드
///
/// 알 수 없는 키는 무시됩니다. 검증은 [`LetterForm::into_letter_request`]에서
/// 한 번에 수행됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LetterForm {
    #[validate(required, length(min = 1))]
    pub sender_name: Option<String>,

    #[validate(required, email)]
    pub sender_email: Option<String>,

    #[validate(required, length(min = 1))]
    pub recipient_name: Option<String>,

    #[validate(required, email)]
    pub recipient_email: Option<String>,

    #[validate(required, length(min = 1))]
    pub recipient_address: Option<String>,

    #[validate(required, length(min = 1))]
    pub date: Option<String>,

    #[validate(required, length(min = 1))]
    pub reason: Option<String>,

    #[validate(required, length(min = 1))]
    pub specific_actions: Option<String>,

    #[validate(required, length(min = 1))]
    pub deadline: Option<String>,

    #[validate(required, length(min = 1))]
    pub consequences: Option<String>,

    #[validate(required, length(min = 1))]
    pub legal_rights: Option<String>,

    /// 체크박스 상태를 옮긴 문자열 플래그 (`"true"` / `"false"`)
    #[validate(required)]
    pub send_via_mail: Option<String>,
}

impl LetterForm {
    /// 페이로드를 검증하고 [`LetterRequest`]로 변환합니다.
    ///
    /// 부분 처리 없이 한 번에 성공하거나 실패합니다.
    /// 실패 시 필드별 상세 내용은 `warn` 로그와 에러 상세 메시지에만 남습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 누락, 빈 값, 이메일 형식 오류
    pub fn into_letter_request(self) -> AppResult<LetterRequest> {
        if let Err(errors) = self.validate() {
            warn!("내용증명 폼 검증 실패: {}", errors);
            return Err(AppError::ValidationError(errors.to_string()));
        }

        let LetterForm {
            sender_name: Some(sender_name),
            sender_email: Some(sender_email),
            recipient_name: Some(recipient_name),
            recipient_email: Some(recipient_email),
            recipient_address: Some(recipient_address),
            date: Some(date),
            reason: Some(reason),
            specific_actions: Some(specific_actions),
            deadline: Some(deadline),
            consequences: Some(consequences),
            legal_rights: Some(legal_rights),
            send_via_mail: Some(send_via_mail),
        } = self
        else {
            return Err(AppError::ValidationError("required field missing".to_string()));
        };

        Ok(LetterRequest {
            sender_name,
            sender_email,
            recipient_name,
            recipient_email,
            recipient_address,
            date,
            reason,
            specific_actions,
            deadline,
            consequences,
            legal_rights,
            send_via_mail: send_via_mail == "true",
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_form(send_via_mail: &str) -> LetterForm {
    LetterForm {
        sender_name: Some("Jane Doe".to_string()),
        sender_email: Some("jane@example.com".to_string()),
        recipient_name: Some("John Smith".to_string()),
        recipient_email: Some("john@example.com".to_string()),
        recipient_address: Some("1 Main St\nSpringfield, IL 62701".to_string()),
        date: Some("May 1, 2024".to_string()),
        reason: Some("Unauthorized use of trademark".to_string()),
        specific_actions: Some("Stop selling goods bearing the ACME mark".to_string()),
        deadline: Some("May 15, 2024".to_string()),
        consequences: Some("We will file suit for infringement".to_string()),
        legal_rights: Some("ACME is a registered trademark owned by Jane Doe".to_string()),
        send_via_mail: Some(send_via_mail.to_string()),
    }
}
