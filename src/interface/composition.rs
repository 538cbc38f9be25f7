//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{CompletionGateway, ConfigRepository, GatewayFactory};
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{ChatCompletionsGatewayFactory, JsonConfigRepository};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: ChatCompletionsGatewayFactory,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: ChatCompletionsGatewayFactory,
        }
    }
}

impl AppComposition {
    /// 병합된 설정을 로딩한다.
    pub fn load_config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    /// 설정 기반 completion 게이트웨이를 생성한다.
    pub fn build_gateway(&self, config: &Config) -> Result<Box<dyn CompletionGateway>> {
        self.gateway_factory.build(config)
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
