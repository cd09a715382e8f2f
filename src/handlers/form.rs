//! # Letter Form HTTP Handlers
//!
//! 브라우저용 내용증명 작성 폼을 제공합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/` | 빈 작성 폼 |
//! | `POST` | `/` | 폼 제출 (`application/x-www-form-urlencoded`) |
//! | `GET` | `/success` | 발송 완료 안내 |
//!
//! 제출 성공 시 `303 See Other`로 `/success`에 리다이렉트하고,
//! 실패 시 입력값을 유지한 채 에러 알림과 함께 폼을 다시 보여줍니다.

use std::collections::HashMap;

use actix_web::{
    error::{ErrorInternalServerError, InternalError, UrlencodedError},
    get,
    http::header::{self, ContentType},
    post, web, HttpRequest, HttpResponse, HttpResponseBuilder,
};
use log::{error, warn};
use serde::Deserialize;

use crate::core::errors::AppError;
use crate::domain::dto::letters::response::SubmissionResult;
use crate::presenter::{view, FormPhase, FormPresenter};
use crate::services::letters::LetterService;

/// `/success` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    /// 내용증명 우편 발송 요청 여부
    #[serde(default)]
    pub mail: bool,
}

fn html(mut builder: HttpResponseBuilder, page: askama::Result<String>) -> actix_web::Result<HttpResponse> {
    let body = page.map_err(|e| {
        error!("페이지 렌더링 실패: {}", e);
        ErrorInternalServerError(e)
    })?;

    Ok(builder.content_type(ContentType::html()).body(body))
}

/// 빈 작성 폼을 보여줍니다.
#[get("/")]
pub async fn show_form() -> actix_web::Result<HttpResponse> {
    html(HttpResponse::Ok(), view::render_page(&FormPresenter::new()))
}

/// 폼 제출 핸들러
///
/// 제출 처리기는 별도 태스크에서 실행되며, 태스크가 패닉 등으로 결과를 돌려주지 못하면
/// 프레젠터는 이를 일반 실패 메시지로 표시합니다.
#[post("/")]
pub async fn submit_form(
    service: web::Data<LetterService>,
    fields: web::Form<HashMap<String, String>>,
) -> actix_web::Result<HttpResponse> {
    let mut presenter = FormPresenter::from_submission(fields.into_inner());
    let service = service.into_inner();

    let submitted = presenter
        .submit(move |payload| {
            actix_web::rt::spawn(async move { service.submit(payload).await })
        })
        .await;
    if let Err(e) = submitted {
        warn!("폼 제출 거부: {}", e);
    }

    if presenter.phase() == FormPhase::Succeeded {
        let location = if presenter.send_via_mail() {
            "/success?mail=true"
        } else {
            "/success"
        };
        return Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish());
    }

    html(HttpResponse::Ok(), view::render_page(&presenter))
}

/// 발송 완료 안내를 보여줍니다.
#[get("/success")]
pub async fn show_success(query: web::Query<SuccessQuery>) -> actix_web::Result<HttpResponse> {
    html(HttpResponse::Ok(), view::render_success_page(query.mail))
}

/// 폼 본문을 읽지 못한 제출(잘못된 Content-Type, 크기 초과 등)을 처리합니다.
///
/// 검증 실패와 같은 경로로 프레젠터에 반영해 `Invalid form data` 알림과 함께
/// 빈 폼을 `400 Bad Request`로 다시 보여줍니다.
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!("폼 본문 파싱 실패 - 경로: {}, 에러: {}", req.path(), err);

    let rejected = SubmissionResult::from(&AppError::ValidationError(err.to_string()));
    let mut presenter = FormPresenter::new();
    let shown = presenter
        .begin_submit()
        .and_then(|_| presenter.finish(Ok::<_, AppError>(rejected)));
    if let Err(e) = shown {
        warn!("폼 상태 전이 거부: {}", e);
    }

    match html(HttpResponse::BadRequest(), view::render_page(&presenter)) {
        Ok(response) => InternalError::from_response(err, response).into(),
        Err(e) => e,
    }
}
