//! Completion API 호출 공용 유틸리티.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

use crate::domain::error::GenerationError;

/// 게이트웨이 호출용 HTTP 클라이언트를 생성한다.
/// 타임아웃이 없으면 transport 기본값(무제한)을 그대로 쓴다.
pub fn build_api_client(timeout: Option<Duration>) -> Client {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    builder.build().unwrap_or_else(|_| Client::new())
}

/// 비성공 상태 코드를 실패 카테고리로 변환한다.
pub fn classify_failure(status: StatusCode, body: String) -> GenerationError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => GenerationError::QuotaExhausted,
        other => GenerationError::Upstream {
            status: other.as_u16(),
            body,
        },
    }
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 표준화한다.
pub async fn send_json(request: RequestBuilder) -> Result<Value, GenerationError> {
    let response = request
        .send()
        .await
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    if !status.is_success() {
        tracing::error!(status = status.as_u16(), body = %body, "AI gateway error");
        return Err(classify_failure(status, body));
    }

    serde_json::from_str(&body).map_err(|err| GenerationError::InvalidEnvelope(err.to_string()))
}

/// 응답 envelope에서 completion 텍스트 필드만 읽는다.
pub fn extract_completion(response: &Value) -> Option<&str> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
}
