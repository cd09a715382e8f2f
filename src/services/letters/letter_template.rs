//! 내용증명 본문 템플릿
//!
//! 검증된 필드를 고정된 순서의 평문 템플릿에 그대로 치환합니다.
//! 이스케이프나 인코딩은 하지 않습니다.

use crate::domain::models::LetterRequest;

/// 이메일 제목 (고정)
pub const LETTER_SUBJECT: &str = "Cease and Desist Notice";

/// 내용증명 본문을 생성합니다.
///
/// 순서: 날짜, 인사말, 통지 문장, 사유, 요구 행위, 기한, 불이행 결과, 법적 권리, 맺음말, 서명.
/// 본문은 발신자 이름으로 끝나며 마지막 개행이 없습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let text = render_letter(&request);
/// assert!(text.ends_with("Sincerely,\nJane Doe"));
/// ```
pub fn render_letter(request: &LetterRequest) -> String {
    format!(
        "{date}\n\
         \n\
         Dear {recipient_name},\n\
         \n\
         This letter serves as a formal cease and desist notice from {sender_name}.\n\
         \n\
         Reason for this notice:\n\
         {reason}\n\
         \n\
         You are hereby directed to cease and desist the following actions:\n\
         {specific_actions}\n\
         \n\
         Deadline for compliance: {deadline}\n\
         \n\
         Consequences of non-compliance:\n\
         {consequences}\n\
         \n\
         Statement of legal rights:\n\
         {legal_rights}\n\
         \n\
         Please comply with these demands by the specified deadline.\n\
         \n\
         Sincerely,\n\
         {sender_name}",
        date = request.date(),
        recipient_name = request.recipient_name(),
        sender_name = request.sender_name(),
        reason = request.reason(),
        specific_actions = request.specific_actions(),
        deadline = request.deadline(),
        consequences = request.consequences(),
        legal_rights = request.legal_rights(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::letters::request::letter_form::sample_form;

    fn sample_letter() -> String {
        render_letter(&sample_form("false").into_letter_request().unwrap())
    }

    #[test]
    fn test_salutation_and_signature() {
        let letter = sample_letter();

        assert!(letter.starts_with("May 1, 2024\n\nDear John Smith,\n"));
        assert!(letter.contains("Dear John Smith,"));
        assert!(letter.contains("Unauthorized use of trademark"));
        assert!(letter.ends_with("Sincerely,\nJane Doe"));
    }

    #[test]
    fn test_fields_appear_in_fixed_order() {
        let letter = sample_letter();
        let ordered = [
            "May 1, 2024",
            "Unauthorized use of trademark",
            "Stop selling goods bearing the ACME mark",
            "May 15, 2024",
            "We will file suit for infringement",
            "ACME is a registered trademark owned by Jane Doe",
            "Sincerely,\nJane Doe",
        ];

        let positions: Vec<usize> = ordered
            .iter()
            .map(|needle| letter.find(needle).unwrap_or_else(|| panic!("missing {:?}", needle)))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "positions: {:?}", positions);
    }

    #[test]
    fn test_values_are_interpolated_literally() {
        let mut form = sample_form("false");
        form.reason = Some("<b>copying</b> & {braces}".to_string());
        let letter = render_letter(&form.into_letter_request().unwrap());

        assert!(letter.contains("Reason for this notice:\n<b>copying</b> & {braces}\n"));
    }
}
