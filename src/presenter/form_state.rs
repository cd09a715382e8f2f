//! # 폼 상태 관리
//!
//! 내용증명 작성 폼의 일시적인 UI 상태를 명시적인 상태 머신으로 표현합니다.
//!
//! ## 상태 전이
//!
//! ```text
//!            begin_submit            finish(success)
//!   Idle ───────────────▶ Submitting ───────────────▶ Succeeded
//!    ▲                        │
//!    └────────────────────────┘
//!         finish(failure) + error
//! ```
//!
//! - `Submitting` 동안에는 재제출이 거부됩니다.
//! - `Succeeded`에서 되돌아가는 경로는 없습니다.
//! - 에러 메시지는 상태와 직교하는 별도 필드이며 `begin_submit` 시 지워집니다.

use std::collections::HashMap;
use std::fmt::Display;

use log::error;
use thiserror::Error;

use crate::domain::dto::letters::{request::LetterForm, response::SubmissionResult};

/// 결과에 에러 문자열이 없을 때 표시하는 메시지
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// 처리기 호출 자체가 실패했을 때 표시하는 메시지
pub const SUBMIT_CALL_FAILED: &str = "An error occurred while sending the cease and desist letter";

/// 폼의 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Succeeded,
}

/// 입력 위젯 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    TextArea,
}

/// 폼 입력 필드 정의
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    /// 페이로드 키 (camelCase)
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

/// 폼 섹션 (제목 + 필드 목록)
#[derive(Debug, Clone, Copy)]
pub struct FormSection {
    pub title: &'static str,
    pub fields: &'static [FormField],
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind, placeholder: None }
}

/// 체크박스 필드 이름
pub const SEND_VIA_MAIL_FIELD: &str = "sendViaMail";

/// 화면에 표시되는 순서대로 정렬된 텍스트 필드 섹션
pub const FORM_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Your Information",
        fields: &[
            field("senderName", "Your Name", FieldKind::Text),
            field("senderEmail", "Your Email", FieldKind::Email),
        ],
    },
    FormSection {
        title: "Recipient Information",
        fields: &[
            field("recipientName", "Recipient's Name", FieldKind::Text),
            field("recipientEmail", "Recipient's Email", FieldKind::Email),
            field("recipientAddress", "Recipient's Mailing Address", FieldKind::TextArea),
        ],
    },
    FormSection {
        title: "Cease and Desist Details",
        fields: &[
            field("date", "Letter Date", FieldKind::Date),
            FormField {
                name: "reason",
                label: "What is the issue?",
                kind: FieldKind::TextArea,
                placeholder: Some(
                    "Describe what the recipient is doing that you want them to stop. Be specific.",
                ),
            },
            FormField {
                name: "specificActions",
                label: "What do you want them to do?",
                kind: FieldKind::TextArea,
                placeholder: Some(
                    "Explain what actions you want the recipient to take. For example, 'Stop using my copyrighted images' or 'Cease contact with me immediately'.",
                ),
            },
            field("deadline", "By when do you want them to comply?", FieldKind::Date),
            field("consequences", "What will happen if they do not comply?", FieldKind::TextArea),
            field("legalRights", "What legal rights support your demand?", FieldKind::TextArea),
        ],
    },
];

/// 상태 전이가 거부된 이유
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterError {
    #[error("a submission is already in flight")]
    InFlight,

    #[error("the letter has already been sent")]
    AlreadySucceeded,

    #[error("no submission is in flight")]
    NotSubmitting,
}

/// 내용증명 작성 폼의 프레젠터
///
/// 사용자 입력값, 우편 발송 체크박스, 진행 단계, 에러 메시지를 보관합니다.
/// 요청마다 새로 만들어지며 요청 간에 공유되지 않습니다.
#[derive(Debug, Clone)]
pub struct FormPresenter {
    phase: FormPhase,
    error: Option<String>,
    send_via_mail: bool,
    values: HashMap<String, String>,
}

impl Default for FormPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPresenter {
    /// 빈 폼으로 시작합니다.
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
            error: None,
            send_via_mail: false,
            values: HashMap::new(),
        }
    }

    /// 브라우저가 보낸 폼 필드로 프레젠터를 채웁니다.
    ///
    /// 체크박스는 체크된 경우에만 전송되므로 `sendViaMail` 키의 존재 여부로 토글을 결정합니다.
    pub fn from_submission(mut fields: HashMap<String, String>) -> Self {
        let checked = fields
            .remove(SEND_VIA_MAIL_FIELD)
            .is_some_and(|v| v == "true" || v == "on");

        let mut presenter = Self::new();
        presenter.set_send_via_mail(checked);
        for (name, value) in fields {
            presenter.set_value(&name, value);
        }
        presenter
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn send_via_mail(&self) -> bool {
        self.send_via_mail
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// 현재 입력값 (없으면 빈 문자열)
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// 폼에 정의된 필드만 저장하고 나머지는 무시합니다.
    pub fn set_value(&mut self, name: &str, value: String) {
        let known = FORM_SECTIONS
            .iter()
            .flat_map(|section| section.fields)
            .any(|field| field.name == name);
        if known {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn set_send_via_mail(&mut self, checked: bool) {
        self.send_via_mail = checked;
    }

    /// 제출을 시작하고 처리기에 넘길 페이로드를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `PresenterError::InFlight` - 이미 제출 중
    /// * `PresenterError::AlreadySucceeded` - 이미 발송 완료
    pub fn begin_submit(&mut self) -> Result<LetterForm, PresenterError> {
        match self.phase {
            FormPhase::Submitting => return Err(PresenterError::InFlight),
            FormPhase::Succeeded => return Err(PresenterError::AlreadySucceeded),
            FormPhase::Idle => {}
        }

        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(self.payload())
    }

    /// 처리기 호출 결과를 반영합니다.
    ///
    /// 결과의 에러 문자열은 그대로 표시되며, 호출 자체의 실패는 하나의 일반 메시지로 표시됩니다.
    pub fn finish<E: Display>(
        &mut self,
        outcome: Result<SubmissionResult, E>,
    ) -> Result<(), PresenterError> {
        if self.phase != FormPhase::Submitting {
            return Err(PresenterError::NotSubmitting);
        }

        match outcome {
            Ok(result) if result.success => {
                self.phase = FormPhase::Succeeded;
            }
            Ok(result) => {
                self.phase = FormPhase::Idle;
                self.error = Some(result.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()));
            }
            Err(e) => {
                error!("내용증명 제출 호출 실패: {}", e);
                self.phase = FormPhase::Idle;
                self.error = Some(SUBMIT_CALL_FAILED.to_string());
            }
        }
        Ok(())
    }

    /// 제출 전체 과정을 수행합니다: 시작 → 처리기 호출 대기 → 결과 반영.
    pub async fn submit<F, Fut, E>(&mut self, send: F) -> Result<(), PresenterError>
    where
        F: FnOnce(LetterForm) -> Fut,
        Fut: Future<Output = Result<SubmissionResult, E>>,
        E: Display,
    {
        let payload = self.begin_submit()?;
        let outcome = send(payload).await;
        self.finish(outcome)
    }

    fn payload(&self) -> LetterForm {
        let text = |name: &str| self.values.get(name).cloned();

        LetterForm {
            sender_name: text("senderName"),
            sender_email: text("senderEmail"),
            recipient_name: text("recipientName"),
            recipient_email: text("recipientEmail"),
            recipient_address: text("recipientAddress"),
            date: text("date"),
            reason: text("reason"),
            specific_actions: text("specificActions"),
            deadline: text("deadline"),
            consequences: text("consequences"),
            legal_rights: text("legalRights"),
            send_via_mail: Some(self.send_via_mail.to_string()),
        }
    }
}

#[cfg(test)]
pub(crate) fn filled_fields() -> HashMap<String, String> {
    [
        ("senderName", "Jane Doe"),
        ("senderEmail", "jane@example.com"),
        ("recipientName", "John Smith"),
        ("recipientEmail", "john@example.com"),
        ("recipientAddress", "1 Main St"),
        ("date", "2024-05-01"),
        ("reason", "Unauthorized use of trademark"),
        ("specificActions", "Stop"),
        ("deadline", "2024-05-15"),
        ("consequences", "Lawsuit"),
        ("legalRights", "Registered mark"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
