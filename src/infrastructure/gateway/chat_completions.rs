//! OpenAI 호환 chat completion 게이트웨이 어댑터.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::application::config::Config;
use crate::application::ports::CompletionGateway;
use crate::domain::error::GenerationError;
use crate::domain::prompt::PassagePrompt;
use crate::infrastructure::config::resolve_gateway_api_key;

use super::api_runner::{build_api_client, extract_completion, send_json};

pub struct ChatCompletionsGateway {
    client: Client,
    endpoint: Url,
    model: String,
    temperature: f64,
    credential: Option<String>,
    credential_env: String,
}

impl ChatCompletionsGateway {
    /// 설정에서 엔드포인트/모델/자격 증명을 읽어 게이트웨이를 구성한다.
    /// 자격 증명이 없어도 생성은 성공하고, 호출 시점에 설정 오류로 실패한다.
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = &config.gateway;
        let endpoint = gateway.endpoint();
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("invalid gateway endpoint URL: {endpoint}"))?;
        let resolution = resolve_gateway_api_key(gateway);

        Ok(Self {
            client: build_api_client(gateway.timeout_secs.map(Duration::from_secs)),
            endpoint,
            model: gateway.model(),
            temperature: gateway.temperature(),
            credential: resolution.credential,
            credential_env: resolution.env_name,
        })
    }
}

#[async_trait]
impl CompletionGateway for ChatCompletionsGateway {
    async fn complete(&self, prompt: &PassagePrompt) -> Result<String, GenerationError> {
        // 네트워크 호출 전에 자격 증명부터 확인한다.
        let Some(credential) = self.credential.as_deref() else {
            return Err(GenerationError::MissingCredential {
                env: self.credential_env.clone(),
            });
        };

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user }
            ],
            "temperature": self.temperature,
        });

        let response = send_json(
            self.client
                .post(self.endpoint.clone())
                .bearer_auth(credential)
                .json(&payload),
        )
        .await?;

        match extract_completion(&response) {
            Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
            _ => Err(GenerationError::EmptyCompletion),
        }
    }
}
