//! 설정 값(api_key/env)을 실제 런타임 자격 증명으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::GatewayConfig;

/// 게이트웨이 자격 증명 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
    /// 자격 증명이 기대되는 환경변수 이름(오류 메시지용)
    pub env_name: String,
}

/// inline `api_key` 우선, 없으면 `api_key_env` 환경변수를 조회한다.
pub fn resolve_gateway_api_key(cfg: &GatewayConfig) -> CredentialResolution {
    resolve_with(cfg, |name| env::var(name).ok())
}

fn resolve_with(
    cfg: &GatewayConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> CredentialResolution {
    let env_name = cfg.api_key_env();

    if let Some(key) = cfg.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return CredentialResolution {
            credential: Some(key.to_string()),
            source: Some("inline".to_string()),
            env_name,
        };
    }

    match lookup(&env_name).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => CredentialResolution {
            credential: Some(v),
            source: Some(format!("env:{env_name}")),
            env_name,
        },
        _ => CredentialResolution {
            credential: None,
            source: Some(format!("env:{env_name} (missing)")),
            env_name,
        },
    }
}
