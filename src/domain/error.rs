//! 지문 생성 실패 분류.
//! 호출자가 재시도/결제 안내/일반 실패를 구분할 수 있도록 카테고리와 상태 코드를 고정한다.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// 자격 증명이 없어 네트워크 호출 전에 중단됨
    #[error("{env} is not configured")]
    MissingCredential { env: String },
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,
    #[error("AI credits exhausted. Please add credits to continue.")]
    QuotaExhausted,
    #[error("AI Gateway error: {status}")]
    Upstream { status: u16, body: String },
    #[error("failed to reach AI gateway: {0}")]
    Transport(String),
    #[error("invalid AI gateway response: {0}")]
    InvalidEnvelope(String),
    #[error("No content in AI response")]
    EmptyCompletion,
    #[error("model returned a malformed passage: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// 외부에 노출하는 안정적인 실패 카테고리.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    RateLimited,
    QuotaExhausted,
    Upstream,
    EmptyOutput,
    MalformedOutput,
}

impl ErrorCategory {
    pub fn code(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::RateLimited => "rate_limited",
            Self::QuotaExhausted => "quota_exhausted",
            Self::Upstream => "upstream",
            Self::EmptyOutput => "empty_output",
            Self::MalformedOutput => "malformed_output",
        }
    }

    /// HTTP 응답 상태 코드(429/402 외에는 모두 500).
    pub fn status_code(self) -> u16 {
        match self {
            Self::RateLimited => 429,
            Self::QuotaExhausted => 402,
            _ => 500,
        }
    }
}

impl GenerationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. } => ErrorCategory::Configuration,
            Self::RateLimited => ErrorCategory::RateLimited,
            Self::QuotaExhausted => ErrorCategory::QuotaExhausted,
            Self::Upstream { .. } | Self::Transport(_) | Self::InvalidEnvelope(_) => {
                ErrorCategory::Upstream
            }
            Self::EmptyCompletion => ErrorCategory::EmptyOutput,
            Self::MalformedOutput(_) => ErrorCategory::MalformedOutput,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.category().status_code()
    }

    /// 일시적 실패인지 여부(호출자가 잠시 후 새 요청으로 재시도 가능).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
