//! 로그 기반 발송자
//!
//! 실제 공급자(SendGrid, Lob 등) 대신 발송 요청을 `info` 로그로 남기는 기본 구현입니다.
//! 항상 성공을 반환합니다.

use async_trait::async_trait;
use log::{debug, info};

use super::{CertifiedMail, DeliveryError, EmailMessage, EmailSender, MailSender};

/// 이메일을 로그로만 기록하는 발송자
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEmailSender;

#[async_trait]
impl EmailSender for LoggingEmailSender {
    async fn send_email(&self, message: EmailMessage) -> Result<(), DeliveryError> {
        info!(
            "📧 이메일 발송 - to: {}, from: {}, subject: {}",
            message.to, message.from, message.subject
        );
        debug!("이메일 본문:\n{}", message.body);
        Ok(())
    }
}

/// 내용증명 우편을 로그로만 기록하는 발송자
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailSender;

#[async_trait]
impl MailSender for LoggingMailSender {
    async fn send_certified_mail(&self, mail: CertifiedMail) -> Result<(), DeliveryError> {
        info!(
            "📮 내용증명 우편 발송 - to: {}, from: {}",
            mail.to.replace('\n', ", "),
            mail.from
        );
        debug!("우편 본문:\n{}", mail.content);
        Ok(())
    }
}
