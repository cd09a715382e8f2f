//! 테스트용 기록 발송자
//!
//! 두 발송자가 하나의 호출 로그를 공유하므로 호출 순서와 인자를 함께 검증할 수 있습니다.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CertifiedMail, DeliveryError, EmailMessage, EmailSender, MailSender};

/// 기록된 발송 호출
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Email(EmailMessage),
    Mail(CertifiedMail),
}

#[derive(Debug, Clone, Default)]
pub struct DeliveryLog(Arc<Mutex<Vec<Delivery>>>);

impl DeliveryLog {
    pub fn entries(&self) -> Vec<Delivery> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, delivery: Delivery) {
        self.0.lock().unwrap().push(delivery);
    }
}

pub struct RecordingEmailSender {
    log: DeliveryLog,
    fail_with: Option<DeliveryError>,
}

pub struct RecordingMailSender {
    log: DeliveryLog,
    fail_with: Option<DeliveryError>,
}

impl RecordingEmailSender {
    pub fn new(log: &DeliveryLog) -> Self {
        Self { log: log.clone(), fail_with: None }
    }

    pub fn failing(log: &DeliveryLog, error: DeliveryError) -> Self {
        Self { log: log.clone(), fail_with: Some(error) }
    }
}

impl RecordingMailSender {
    pub fn new(log: &DeliveryLog) -> Self {
        Self { log: log.clone(), fail_with: None }
    }

    pub fn failing(log: &DeliveryLog, error: DeliveryError) -> Self {
        Self { log: log.clone(), fail_with: Some(error) }
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, message: EmailMessage) -> Result<(), DeliveryError> {
        // 실패하는 경우에도 호출 자체는 기록
        self.log.push(Delivery::Email(message));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send_certified_mail(&self, mail: CertifiedMail) -> Result<(), DeliveryError> {
        self.log.push(Delivery::Mail(mail));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
