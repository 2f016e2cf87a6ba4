use clap::Parser;
use request_body_api::cli::{execute_command, Cli};
use request_body_api::config::{init_logging, ServerSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = ServerSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    execute_command(cli, &settings).await
}
