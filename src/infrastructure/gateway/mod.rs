//! 외부 completion 서비스 연동 계층.

mod api_runner;
mod chat_completions;

pub use api_runner::{build_api_client, classify_failure, extract_completion};
pub use chat_completions::ChatCompletionsGateway;
