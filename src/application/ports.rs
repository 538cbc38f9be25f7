//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::error::GenerationError;
use crate::domain::prompt::PassagePrompt;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 chat completion 서비스 호출 포트.
/// 한 번의 왕복만 수행하며 재시도하지 않는다.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// 모델이 돌려준 원문 텍스트(비어 있지 않음)
    async fn complete(&self, prompt: &PassagePrompt) -> Result<String, GenerationError>;
}

/// 설정에 맞는 completion 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn CompletionGateway>>;
}
