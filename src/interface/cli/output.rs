//! CLI 출력 포맷.

use anyhow::Result;

use crate::domain::level::JlptLevel;
use crate::domain::passage::{GenerationResult, PassageRecord};

use super::command::GenerateOptions;

/// 응답 계약(또는 `--user` 지정 시 저장 레코드)을 JSON 문자열로 만든다.
pub fn render_generation(options: &GenerateOptions, result: GenerationResult) -> Result<String> {
    let value = match &options.user_id {
        Some(user_id) => serde_json::to_value(PassageRecord::from_result(user_id, result))?,
        None => serde_json::to_value(result)?,
    };

    if options.compact {
        Ok(serde_json::to_string(&value)?)
    } else {
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

pub fn render_levels() -> String {
    JlptLevel::ALL
        .iter()
        .map(|level| format!("[{}]\n{}", level.code(), level.guideline()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
