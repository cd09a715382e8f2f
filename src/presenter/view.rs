//! 폼 화면 렌더링
//!
//! [`FormPresenter`]의 상태를 askama 템플릿(`templates/`)으로 그립니다.
//! 사용자 입력값과 에러 메시지는 템플릿 엔진의 HTML 자동 이스케이프를 거칩니다.

use askama::Template;

use super::form_state::{FieldKind, FormPhase, FormPresenter, FORM_SECTIONS, SEND_VIA_MAIL_FIELD};

/// 입력 필드 하나의 렌더링 값
struct FieldView<'a> {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    multiline: bool,
    placeholder: Option<&'static str>,
    value: &'a str,
}

struct SectionView<'a> {
    title: &'static str,
    fields: Vec<FieldView<'a>>,
}

#[derive(Template)]
#[template(path = "letter_form.html")]
struct LetterFormPage<'a> {
    sections: Vec<SectionView<'a>>,
    send_via_mail_field: &'static str,
    send_via_mail: bool,
    submitting: bool,
    error: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "success.html")]
struct SuccessPage {
    message: String,
}

/// 성공 화면 문구
pub fn success_message(send_via_mail: bool) -> String {
    format!(
        "Your cease and desist letter has been sent successfully via email{}.",
        if send_via_mail { " and will be sent via certified mail" } else { "" }
    )
}

/// 프레젠터 상태에 맞는 전체 페이지를 렌더링합니다.
///
/// - `Succeeded`: 성공 안내
/// - `Idle` / `Submitting`: 입력 폼 (+ 에러 알림)
///
/// # Errors
///
/// * `askama::Error` - 템플릿 렌더링 실패
pub fn render_page(presenter: &FormPresenter) -> askama::Result<String> {
    match presenter.phase() {
        FormPhase::Succeeded => render_success_page(presenter.send_via_mail()),
        FormPhase::Idle | FormPhase::Submitting => form_page(presenter).render(),
    }
}

/// 성공 화면만 렌더링합니다.
pub fn render_success_page(send_via_mail: bool) -> askama::Result<String> {
    SuccessPage {
        message: success_message(send_via_mail),
    }
    .render()
}

fn form_page(presenter: &FormPresenter) -> LetterFormPage<'_> {
    let sections = FORM_SECTIONS
        .iter()
        .map(|section| SectionView {
            title: section.title,
            fields: section
                .fields
                .iter()
                .map(|field| FieldView {
                    name: field.name,
                    label: field.label,
                    input_type: match field.kind {
                        FieldKind::Email => "email",
                        FieldKind::Date => "date",
                        FieldKind::Text | FieldKind::TextArea => "text",
                    },
                    multiline: field.kind == FieldKind::TextArea,
                    placeholder: field.placeholder,
                    value: presenter.value(field.name),
                })
                .collect(),
        })
        .collect();

    LetterFormPage {
        sections,
        send_via_mail_field: SEND_VIA_MAIL_FIELD,
        send_via_mail: presenter.send_via_mail(),
        submitting: presenter.is_submitting(),
        error: presenter.error(),
    }
}
