//! JLPT 레벨과 레벨별 작성 지침 테이블.

/// JLPT 레벨(N5가 가장 쉬움).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

const N5_GUIDELINE: &str = "Level N5 Requirements:
- Use only basic grammar patterns: ~です/~ます form, basic particles (は、が、を、に、で、へ)
- Simple sentence structures, avoid complex clauses
- Use only N5 kanji (about 100 kanji) with furigana for all
- Topics: daily life, greetings, basic descriptions
- Vocabulary: numbers, time, family, common objects, basic verbs/adjectives";

const N4_GUIDELINE: &str = "Level N4 Requirements:
- Introduce て-form, ない-form, past tense
- Can use conditional (たら), potential form, giving/receiving verbs
- Use N4 kanji (about 300 total) 
- Topics: travel, shopping, simple stories, experiences
- Vocabulary: emotions, weather, transportation, hobbies";

const N3_GUIDELINE: &str = "Level N3 Requirements:
- Use complex grammar: passive, causative, よう/ために, という
- Compound sentences with conjunctions
- Use N3 kanji (about 650 total)
- Topics: opinions, explanations, social issues at basic level
- More abstract vocabulary, idiomatic expressions";

const N2_GUIDELINE: &str = "Level N2 Requirements:
- Advanced grammar: ものの、からといって、にもかかわらず
- Formal and written Japanese styles
- Use N2 kanji (about 1000 total)
- Topics: news articles, essays, complex narratives
- Technical and specialized vocabulary";

const N1_GUIDELINE: &str = "Level N1 Requirements:
- Most complex grammar: 〜ずにはいられない、〜かねない、古文/文語 expressions
- All forms of keigo (尊敬語、謙譲語、丁寧語)
- Use N1 kanji (about 2000 total)
- Topics: academic papers, literature, philosophy, abstract concepts
- Rare vocabulary, classical expressions, nuanced language";

impl JlptLevel {
    /// 쉬운 레벨부터 어려운 레벨 순서.
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    /// 레벨 코드 문자열을 해석한다.
    /// 대소문자/공백을 보정하지 않는다("n5"는 인식하지 않음).
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "N5" => Some(Self::N5),
            "N4" => Some(Self::N4),
            "N3" => Some(Self::N3),
            "N2" => Some(Self::N2),
            "N1" => Some(Self::N1),
            _ => None,
        }
    }

    /// 인식할 수 없는 레벨은 오류 대신 N5 지침으로 폴백한다.
    pub fn resolve(code: &str) -> Self {
        Self::parse(code).unwrap_or(Self::N5)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::N5 => "N5",
            Self::N4 => "N4",
            Self::N3 => "N3",
            Self::N2 => "N2",
            Self::N1 => "N1",
        }
    }

    /// 시스템 프롬프트에 삽입할 레벨 지침.
    pub fn guideline(self) -> &'static str {
        match self {
            Self::N5 => N5_GUIDELINE,
            Self::N4 => N4_GUIDELINE,
            Self::N3 => N3_GUIDELINE,
            Self::N2 => N2_GUIDELINE,
            Self::N1 => N1_GUIDELINE,
        }
    }
}
