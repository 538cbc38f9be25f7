//! CLI 인터페이스 모듈 묶음.

pub mod command;
pub mod output;

pub use command::{Cli, CliAction, GenerateOptions};
pub use output::{render_generation, render_levels};
