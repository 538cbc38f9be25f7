//! `jlpt-reader` 바이너리 진입점.

use std::sync::Arc;

use jlpt_reader::application::usecases::generate_reading::GenerateReadingUseCase;
use jlpt_reader::interface::cli::{Cli, CliAction, GenerateOptions, render_generation, render_levels};
use jlpt_reader::interface::composition::AppComposition;
use jlpt_reader::interface::http;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::Levels => println!("{}", render_levels()),
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Generate(options) => run_generate(&composition, options).await,
        CliAction::Serve { bind } => {
            if let Err(err) = run_serve(&composition, bind).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run_generate(composition: &AppComposition, options: GenerateOptions) {
    let gateway = match composition
        .load_config()
        .and_then(|config| composition.build_gateway(&config))
    {
        Ok(gateway) => gateway,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let use_case = GenerateReadingUseCase {
        gateway: gateway.as_ref(),
    };
    let result = match use_case.execute(&options.request).await {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error[{}]: {err}", err.category().code());
            std::process::exit(1);
        }
    };

    match render_generation(&options, result) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run_serve(composition: &AppComposition, bind: Option<String>) -> anyhow::Result<()> {
    let config = composition.load_config()?;
    let gateway: Arc<_> = composition.build_gateway(&config)?.into();
    let bind = bind.unwrap_or_else(|| config.server.bind());
    http::serve(&bind, gateway).await
}
