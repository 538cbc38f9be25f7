//! 테스트 전용 포트 스텁.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::CompletionGateway;
use crate::domain::error::GenerationError;
use crate::domain::prompt::PassagePrompt;

/// 고정 응답(또는 고정 오류)을 돌려주고 받은 프롬프트를 기록한다.
pub struct StubGateway {
    reply: Result<String, fn() -> GenerationError>,
    pub seen: Mutex<Vec<PassagePrompt>>,
}

impl StubGateway {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(make: fn() -> GenerationError) -> Self {
        Self {
            reply: Err(make),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(&self, prompt: &PassagePrompt) -> Result<String, GenerationError> {
        self.seen.lock().unwrap().push(prompt.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}
