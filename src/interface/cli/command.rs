//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::passage::PassageRequest;

pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic for your reading passage";

#[derive(Debug, Parser)]
#[command(name = "jlpt-reader")]
#[command(about = "Generate JLPT-level Japanese reading passages with an AI model")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one passage and print it as JSON
    Generate {
        /// Passage topic
        #[arg(long)]
        topic: String,

        /// JLPT level (N5..N1); unknown values use N5 guidelines
        #[arg(long, default_value = "N5")]
        level: String,

        /// Print the storage record for this user instead of the response
        #[arg(long)]
        user: Option<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Serve POST /generate-reading over HTTP
    Serve {
        /// Listen address (defaults to server.bind from config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// List JLPT levels and their writing guidelines
    Levels,
    /// Show effective merged config and credential status
    Config,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub request: PassageRequest,
    pub user_id: Option<String>,
    pub compact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Generate(GenerateOptions),
    Serve { bind: Option<String> },
    Levels,
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    /// 빈 주제는 게이트웨이 호출 전에 거부한다.
    pub fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            Commands::Generate {
                topic,
                level,
                user,
                compact,
            } => {
                if topic.trim().is_empty() {
                    return Err(EMPTY_TOPIC_MESSAGE.to_string());
                }
                Ok(CliAction::Generate(GenerateOptions {
                    request: PassageRequest::new(topic, level),
                    user_id: user.filter(|u| !u.trim().is_empty()),
                    compact,
                }))
            }
            Commands::Serve { bind } => Ok(CliAction::Serve { bind }),
            Commands::Levels => Ok(CliAction::Levels),
            Commands::Config => Ok(CliAction::InspectConfig),
        }
    }
}
