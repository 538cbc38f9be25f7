//! 모델 원문 응답을 지문 스키마로 디코딩한다.
//! 허용하는 관용은 코드 펜스 제거뿐이고, 나머지는 스키마 불일치 시 전부 거부한다.

use crate::domain::error::GenerationError;
use crate::domain::passage::Passage;

/// 앞뒤 공백과 선택적 ```json / ``` 펜스를 제거한 본문을 반환한다.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut content = raw.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    } else if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

/// 펜스를 벗긴 뒤 `Passage`로 엄격하게 파싱한다. 부분 복구는 하지 않는다.
pub fn decode_passage(raw: &str) -> Result<Passage, GenerationError> {
    Ok(serde_json::from_str(strip_code_fence(raw))?)
}
