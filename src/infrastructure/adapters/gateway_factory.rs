//! Completion 게이트웨이 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{CompletionGateway, GatewayFactory};
use crate::infrastructure::gateway::ChatCompletionsGateway;

/// chat completion 게이트웨이 팩토리 어댑터.
pub struct ChatCompletionsGatewayFactory;

impl GatewayFactory for ChatCompletionsGatewayFactory {
    fn build(&self, config: &Config) -> Result<Box<dyn CompletionGateway>> {
        Ok(Box::new(ChatCompletionsGateway::from_config(config)?))
    }
}
