//! 주제/레벨 요청을 받아 읽기 지문을 생성하는 유스케이스.

mod package;

use crate::application::ports::CompletionGateway;
use crate::domain::decoder::decode_passage;
use crate::domain::error::GenerationError;
use crate::domain::level::JlptLevel;
use crate::domain::passage::{GenerationResult, PassageRequest};
use crate::domain::prompt::build_passage_prompt;

use package::package_result;

/// 프롬프트 구성 → completion 호출 → 디코딩 → 결과 조립을 한 번 수행한다.
pub struct GenerateReadingUseCase<'a> {
    pub gateway: &'a dyn CompletionGateway,
}

impl<'a> GenerateReadingUseCase<'a> {
    /// 실패는 모두 분류된 `GenerationError`로 반환하며 내부 재시도는 없다.
    pub async fn execute(
        &self,
        request: &PassageRequest,
    ) -> Result<GenerationResult, GenerationError> {
        if JlptLevel::parse(&request.level).is_none() {
            tracing::warn!(level = %request.level, "unrecognized level, using N5 guidelines");
        }
        tracing::info!("Generating {} passage about: {}", request.level, request.topic);

        let prompt = build_passage_prompt(request);
        let raw = self.gateway.complete(&prompt).await?;
        tracing::debug!(raw = %raw, "raw completion");

        let passage = decode_passage(&raw).inspect_err(|err| {
            tracing::error!(error = %err, "failed to decode passage");
        })?;

        Ok(package_result(request, passage))
    }
}
