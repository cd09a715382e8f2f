//! # Form Presenter
//!
//! 내용증명 작성 폼의 화면 계층입니다.
//! 입력을 모으고, 우편 발송 체크박스를 `sendViaMail` 문자열 플래그로 옮기고,
//! 제출 처리기(`LetterService`)를 호출한 뒤 결과를 화면 상태로 반영합니다.
//!
//! - [`form_state`] - 진행 단계/에러/체크박스 상태 머신
//! - [`view`] - 상태별 HTML 렌더링
//!
//! 클라이언트 측 `required`, `type="email"` 제약은 서버 검증을 흉내낼 뿐이며
//! 최종 판단은 항상 처리기가 합니다.

pub mod form_state;
pub mod view;

pub use form_state::{FormPhase, FormPresenter, PresenterError};
