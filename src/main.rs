use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stac_api_validator::{
    Validator,
    config::{ConfigOverrides, ValidatorConfig},
};

#[derive(Parser, Debug)]
#[command(name = "stac-api-validator", version)]
struct Cli {
    /// Landing page URL of the STAC API to validate.
    #[arg(long)]
    root_url: Option<String>,

    /// Also exercise search parameters with POST request bodies.
    #[arg(long)]
    post: bool,

    /// Config file (TOML, YAML or JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stac_api_validator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ValidatorConfig::load(
        cli.config.as_deref(),
        ConfigOverrides {
            root_url: cli.root_url,
            post: cli.post.then_some(true),
        },
    )?;
    tracing::info!(?config, "Starting validation");

    let validator = Validator::new(&config)?;
    let (warnings, errors) = validator.run(&config.root_url, config.post).await.into_parts();

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }
    for error in &errors {
        println!("ERROR: {}", error);
    }

    if errors.is_empty() {
        println!("Validation passed with {} warning(s).", warnings.len());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Validation failed with {} error(s).", errors.len());
        Ok(ExitCode::FAILURE)
    }
}
