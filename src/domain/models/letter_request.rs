//! 검증을 통과한 내용증명 요청
//!
//! `LetterForm::into_letter_request`로만 생성되며, 생성 이후에는 읽기 전용입니다.
//! 한 번의 요청 동안만 존재하고 저장되지 않습니다.

/// 검증된 내용증명 요청
///
/// `send_via_mail`을 제외한 모든 필드는 비어 있지 않음이 보장됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRequest {
    pub(crate) sender_name: String,
    pub(crate) sender_email: String,
    pub(crate) recipient_name: String,
    pub(crate) recipient_email: String,
    pub(crate) recipient_address: String,
    pub(crate) date: String,
    pub(crate) reason: String,
    pub(crate) specific_actions: String,
    pub(crate) deadline: String,
    pub(crate) consequences: String,
    pub(crate) legal_rights: String,
    pub(crate) send_via_mail: bool,
}

impl LetterRequest {
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &str {
        &self.sender_email
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn recipient_email(&self) -> &str {
        &self.recipient_email
    }

    /// 자유 형식 우편 주소 (여러 줄일 수 있음)
    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }

    /// 서신 날짜. 달력상 유효성은 검사하지 않습니다.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// 수신자에게 요구하는 중단 행위
    pub fn specific_actions(&self) -> &str {
        &self.specific_actions
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn consequences(&self) -> &str {
        &self.consequences
    }

    pub fn legal_rights(&self) -> &str {
        &self.legal_rights
    }

    /// 내용증명 우편 발송 여부
    pub fn send_via_mail(&self) -> bool {
        self.send_via_mail
    }
}
