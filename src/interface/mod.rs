//! Interface layer
//! CLI/HTTP 입력을 유스케이스 호출로 연결한다.

pub mod cli;
pub mod composition;
pub mod http;
