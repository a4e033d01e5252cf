use clap::Parser;
use qa_api::config::ApiConfig;
use qa_api::logging::init_logging;
use qa_api::server;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "qa-api")]
#[command(about = "Questions and answers REST API", long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_path) = ApiConfig::load(args.config)?;
    let _log_guard = init_logging(&config.logging)?;

    info!(config = %config_path.display(), "Loaded configuration");

    server::run(config).await
}
