//! Domain layer
//! 지문 스키마/레벨 지침/프롬프트·디코딩 규칙을 외부 I/O 없이 표현한다.

pub mod decoder;
pub mod error;
pub mod level;
pub mod passage;
pub mod prompt;
