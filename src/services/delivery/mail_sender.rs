//! 내용증명 우편 발송 인터페이스

use async_trait::async_trait;
use serde::Serialize;

use super::DeliveryError;

/// 내용증명 우편 한 건
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertifiedMail {
    /// 수신자 우편 주소 (자유 형식)
    pub to: String,
    /// 발신자 이름
    pub from: String,
    /// 인쇄될 서신 본문
    pub content: String,
}

/// 내용증명 우편 발송자
///
/// 이메일 발송이 끝난 뒤에만 호출되며, 실패해도 이미 보낸 이메일은 되돌리지 않습니다.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send_certified_mail(&self, mail: CertifiedMail) -> Result<(), DeliveryError>;
}
