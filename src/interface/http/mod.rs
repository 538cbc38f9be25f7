//! HTTP 인터페이스.
//! `POST /generate-reading` 하나를 제공하며, 실패는 `{ "error": ... }`와 분류별 상태 코드로 응답한다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, post, web};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::application::ports::CompletionGateway;
use crate::application::usecases::generate_reading::GenerateReadingUseCase;
use crate::domain::passage::PassageRequest;
use crate::interface::cli::command::EMPTY_TOPIC_MESSAGE;

/// 요청 간 공유되는 읽기 전용 상태.
pub struct AppState {
    pub gateway: Arc<dyn CompletionGateway>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReadingBody {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "N5".to_string()
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: message.into(),
        })
    }
}

#[post("/generate-reading")]
async fn generate_reading(
    state: web::Data<AppState>,
    body: web::Json<GenerateReadingBody>,
) -> HttpResponse {
    let body = body.into_inner();
    if body.topic.trim().is_empty() {
        return ErrorBody::response(StatusCode::BAD_REQUEST, EMPTY_TOPIC_MESSAGE);
    }

    let request = PassageRequest::new(body.topic, body.level);
    let use_case = GenerateReadingUseCase {
        gateway: state.gateway.as_ref(),
    };

    match use_case.execute(&request).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => {
            let category = err.category();
            tracing::error!(category = category.code(), error = %err, "generate-reading failed");
            let status = StatusCode::from_u16(category.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            ErrorBody::response(status, err.to_string())
        }
    }
}

/// 파싱할 수 없는 본문도 `{ "error": ... }` 형태로 응답한다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = ErrorBody::response(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// 라우트/본문 설정을 등록한다.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(generate_reading);
}

/// 게이트웨이를 한 번 만들어 모든 워커가 공유하도록 서버를 실행한다.
pub async fn serve(bind: &str, gateway: Arc<dyn CompletionGateway>) -> Result<()> {
    let state = web::Data::new(AppState { gateway });

    tracing::info!(bind, "listening");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind)
    .with_context(|| format!("failed to bind {bind}"))?
    .run()
    .await
    .context("http server terminated with an error")
}
