//! API Gateway - HTTP REST API for customer management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "Customer management REST API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides GATEWAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GATEWAY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GatewayConfig::from_env();

    // Initialize tracing; the guard flushes buffered lines when main returns
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            gateway_lib::run_server(config.with_addr(host, port)).await?;
        }
    }

    Ok(())
}
