//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_gateway_api_key;
use crate::application::config::{Config, GatewayConfig, ServerConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub gateway: GatewayInspection,
    pub server: ServerInspection,
}

/// 비밀 값은 포함하지 않고 출처/해석 여부만 노출한다.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayInspection {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: Option<u64>,
    pub api_key_env: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInspection {
    pub bind: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            ..Self::from_config(&loaded.config)
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            searched_paths: Vec::new(),
            loaded_paths: Vec::new(),
            gateway: GatewayInspection::from_config(&config.gateway),
            server: ServerInspection::from_config(&config.server),
        }
    }
}

impl GatewayInspection {
    fn from_config(cfg: &GatewayConfig) -> Self {
        let resolution = resolve_gateway_api_key(cfg);
        Self {
            endpoint: cfg.endpoint(),
            model: cfg.model(),
            temperature: cfg.temperature(),
            timeout_secs: cfg.timeout_secs,
            api_key_env: resolution.env_name,
            api_key_source: resolution.source,
            api_key_resolved: resolution.credential.is_some(),
        }
    }
}

impl ServerInspection {
    fn from_config(cfg: &ServerConfig) -> Self {
        Self { bind: cfg.bind() }
    }
}
