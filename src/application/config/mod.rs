//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_API_KEY_ENV: &str = "LOVABLE_API_KEY";
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// completion 게이트웨이 호출 설정
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// HTTP 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GatewayConfig {
    /// chat completion 엔드포인트 URL
    pub endpoint: Option<String>,
    /// 모델 식별자
    pub model: Option<String>,
    /// 샘플링 temperature
    pub temperature: Option<f64>,
    /// 요청 타임아웃(초). 미지정 시 타임아웃 없음
    pub timeout_secs: Option<u64>,
    /// 인증 키(직접값, 권장하지 않음)
    pub api_key: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// listen 주소(host:port)
    pub bind: Option<String>,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.gateway.merge_from(other.gateway);
        self.server.merge_from(other.server);
    }
}

impl GatewayConfig {
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn model(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn api_key_env(&self) -> String {
        self.api_key_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
            .to_string()
    }

    pub fn merge_from(&mut self, other: GatewayConfig) {
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
    }
}

impl ServerConfig {
    pub fn bind(&self) -> String {
        self.bind.clone().unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn merge_from(&mut self, other: ServerConfig) {
        if other.bind.is_some() {
            self.bind = other.bind;
        }
    }
}
