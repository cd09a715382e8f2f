//! 이메일 발송 인터페이스

use async_trait::async_trait;
use serde::Serialize;

use super::DeliveryError;

/// 이메일 한 통
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailMessage {
    /// 수신자 이메일 주소
    pub to: String,
    /// 발신자 이메일 주소
    pub from: String,
    pub subject: String,
    /// 평문 본문
    pub body: String,
}

/// 이메일 발송자
///
/// 공급자가 메시지를 접수하면 `Ok(())`, 거부하면 `Err`를 반환합니다.
/// 호출자는 결과를 기다린 뒤 다음 단계로 진행합니다.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, message: EmailMessage) -> Result<(), DeliveryError>;
}
