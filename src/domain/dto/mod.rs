//! # Data Transfer Objects
//!
//! HTTP 경계를 오가는 데이터 구조를 정의합니다.
//! 요청 DTO는 외부 입력을 있는 그대로 표현하고,
//! 응답 DTO는 클라이언트가 받는 JSON 형태를 고정합니다.
//!
//! ```text
//! LetterForm (request) ──validate──▶ LetterRequest (model) ──dispatch──▶ SubmissionResult (response)
//! ```

pub mod letters;
