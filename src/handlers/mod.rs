//! # HTTP Handlers
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 응답을 만드는 핸들러 모음입니다.
//!
//! - [`letters`] - JSON 제출 경계 (`POST /api/v1/letters`)
//! - [`form`] - 브라우저용 작성 폼 (`GET /`, `POST /`, `GET /success`)
//!
//! 핸들러는 `web::Data<LetterService>`로 주입된 서비스를 사용하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 자동으로 HTTP 응답이 됩니다.

pub mod letters;
pub mod form;
