// CLI entry points for running the server and exporting the API document

use clap::{Parser, Subcommand};
use poem::{listener::TcpListener, Server};

use crate::api::{api_service, build_app};
use crate::config::ServerSettings;

/// Item request-body API
#[derive(Parser, Debug)]
#[command(name = "request-body-api")]
#[command(about = "Item request-body, path and query parameter API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the OpenAPI document as JSON
    Openapi,
}

/// Execute CLI command
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Server listener settings
pub async fn execute_command(
    cli: Cli,
    settings: &ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings).await?,
        Commands::Openapi => {
            println!("{}", api_service(&settings.public_url()).spec());
        }
    }

    Ok(())
}

async fn serve(settings: &ServerSettings) -> Result<(), std::io::Error> {
    let app = build_app(settings.public_url());

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!("Swagger UI available at {}/docs", settings.public_url());

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await
}
