//! 지문 생성 프롬프트 구성(순수 문자열 조합).

use crate::domain::level::JlptLevel;
use crate::domain::passage::PassageRequest;

const SYSTEM_PREAMBLE: &str = "You are an expert Japanese language teacher and content creator specializing in JLPT preparation materials.
Your task is to generate engaging Japanese reading passages with proper tokenization for learning.";

const OUTPUT_CONTRACT: &str = r#"IMPORTANT OUTPUT FORMAT:
You must return a valid JSON object with this EXACT structure:
{
  "title": "Japanese title in target level",
  "title_reading": "Hiragana reading of the title",
  "sentences": [
    {
      "text": "Full sentence in Japanese",
      "tokens": [
        {
          "word": "Japanese word/phrase",
          "reading": "Hiragana reading (only if contains kanji, null otherwise)",
          "meaning": "English meaning",
          "type": "noun|verb|adjective|adverb|particle|conjunction|expression"
        }
      ]
    }
  ]
}

Rules:
1. Generate 3-5 sentences appropriate for the level
2. Every word must be tokenized, including particles
3. Only provide "reading" for words containing kanji
4. Make the content engaging and related to the given topic
5. Ensure grammatical accuracy and natural Japanese flow
6. Return ONLY the JSON, no markdown, no explanation"#;

/// system/user 두 턴으로 구성된 프롬프트.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassagePrompt {
    pub system: String,
    pub user: String,
}

/// 레벨 지침과 출력 형식 계약을 담은 프롬프트를 만든다.
/// 알 수 없는 레벨은 N5 지침을 쓰되, user 프롬프트에는 요청 문자열을 그대로 넣는다.
pub fn build_passage_prompt(request: &PassageRequest) -> PassagePrompt {
    let guideline = JlptLevel::resolve(&request.level).guideline();

    let system = format!("{SYSTEM_PREAMBLE}\n\n{guideline}\n\n{OUTPUT_CONTRACT}");
    let user = format!(
        "Generate a {} level Japanese reading passage about: \"{}\"\n\nRemember to return ONLY valid JSON with the exact structure specified.",
        request.level, request.topic
    );

    PassagePrompt { system, user }
}
