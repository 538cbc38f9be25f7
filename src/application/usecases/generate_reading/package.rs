//! 디코딩된 지문과 요청 값을 응답 계약으로 조립한다.

use crate::domain::passage::{GenerationResult, Passage, PassageRequest};

pub(super) fn package_result(request: &PassageRequest, passage: Passage) -> GenerationResult {
    let character_count = passage.character_count();
    GenerationResult {
        passage,
        character_count,
        level: request.level.clone(),
        topic: request.topic.clone(),
    }
}
