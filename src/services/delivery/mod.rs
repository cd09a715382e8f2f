//! 발송 채널 모듈
//!
//! 완성된 내용증명 본문을 외부로 전달하는 발송자(collaborator) 인터페이스를 정의합니다.
//! 이메일과 내용증명 우편 두 채널이 있으며, 각각 `async_trait` 기반 trait으로
//! 추상화되어 `LetterService`에 `Arc<dyn ...>` 형태로 주입됩니다.
//!
//! # Channels
//!
//! - [`EmailSender`] - 이메일 발송 (항상 호출)
//! - [`MailSender`] - 내용증명 우편 발송 (`sendViaMail`이 true일 때만 호출)
//!
//! 실제 공급자 연동은 범위 밖이며, 기본 구현([`LoggingEmailSender`],
//! [`LoggingMailSender`])은 발송 내용을 로그로만 남깁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::delivery::{LoggingEmailSender, LoggingMailSender};
//! use crate::services::letters::LetterService;
//!
//! let service = LetterService::new(
//!     Arc::new(LoggingEmailSender),
//!     Arc::new(LoggingMailSender),
//! );
//! ```

pub mod email_sender;
pub mod mail_sender;
pub mod logging;

#[cfg(test)]
pub mod testing;

use thiserror::Error;

pub use email_sender::{EmailMessage, EmailSender};
pub use mail_sender::{CertifiedMail, MailSender};
pub use logging::{LoggingEmailSender, LoggingMailSender};

/// 발송자가 반환하는 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    /// 공급자가 메시지를 거부함
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// 공급자에 연결할 수 없음
    #[error("delivery channel unavailable: {0}")]
    Unavailable(String),
}
