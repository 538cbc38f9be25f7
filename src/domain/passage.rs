//! 읽기 지문 엔티티/값 객체.
//! 모델 출력 JSON 스키마와 호출자에게 돌려주는 응답 계약을 함께 정의한다.

use serde::{Deserialize, Serialize};

/// 호출자가 보낸 생성 요청.
/// `level`은 임의 문자열을 그대로 보존한다(응답에 그대로 echo).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PassageRequest {
    pub topic: String,
    pub level: String,
}

impl PassageRequest {
    pub fn new(topic: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            level: level.into(),
        }
    }
}

/// 토큰 품사 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Conjunction,
    Expression,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Token {
    pub word: String,
    /// 한자를 포함한 단어에만 존재하는 히라가나 읽기
    #[serde(default)]
    pub reading: Option<String>,
    pub meaning: String,
    #[serde(rename = "type")]
    pub kind: TokenType,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sentence {
    /// 문장 전체 표시 텍스트(없으면 글자 수 0으로 취급)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// UTF-16 code unit 기준 길이(보조 평면 문자는 2로 센다).
    pub fn char_len(&self) -> usize {
        self.text
            .as_deref()
            .map_or(0, |text| text.encode_utf16().count())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Passage {
    pub title: String,
    #[serde(default)]
    pub title_reading: Option<String>,
    pub sentences: Vec<Sentence>,
}

impl Passage {
    /// 모든 문장 `text` 길이의 합.
    pub fn character_count(&self) -> usize {
        self.sentences.iter().map(Sentence::char_len).sum()
    }
}

/// 생성 성공 시 호출자에게 돌려주는 응답 계약.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub passage: Passage,
    pub character_count: usize,
    pub level: String,
    pub topic: String,
}

/// 저장소 협력자가 영속화하는 지문 레코드.
/// 지문 식별자는 저장소가 부여한다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PassageRecord {
    pub user_id: String,
    pub topic: String,
    pub level: String,
    pub title: String,
    pub content: Passage,
    pub character_count: usize,
}

impl PassageRecord {
    pub fn from_result(user_id: impl Into<String>, result: GenerationResult) -> Self {
        Self {
            user_id: user_id.into(),
            topic: result.topic,
            level: result.level,
            title: result.passage.title.clone(),
            content: result.passage,
            character_count: result.character_count,
        }
    }
}
