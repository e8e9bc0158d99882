// CLI for the token launchpad
//
// Presents the launch form on a terminal: connects a keypair wallet to a
// fixed devnet endpoint, collects the four form fields and submits them.

mod commands;
mod config;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::LaunchpadConfig;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Launch a Token-2022 token with metadata on Solana devnet", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to launchpad configuration file
    #[arg(short, long, default_value = "launchpad.toml")]
    config: String,

    /// RPC URL, overriding the configured cluster
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to wallet keypair file
    #[arg(long)]
    wallet: Option<String>,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the launch form and create the token
    Launch(commands::launch::LaunchCmd),

    /// Print the form's field descriptors as JSON
    Fields(commands::fields::FieldsCmd),

    /// Write an example configuration file
    InitConfig {
        /// Output path
        #[arg(default_value = "launchpad.toml")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LaunchpadConfig::load_or_default(&cli.config)?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = Some(rpc_url);
    }
    if let Some(wallet) = cli.wallet {
        config.wallet = Some(wallet);
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    init_logging(&config);

    match cli.command {
        Commands::Launch(cmd) => commands::launch::execute(cmd, config).await,
        Commands::Fields(cmd) => commands::fields::execute(cmd),
        Commands::InitConfig { path } => {
            config::create_example_config(&path)?;
            info!("Example configuration written to {}", path);
            commands::utils::success(&format!("Configuration saved to: {}", path));
            Ok(())
        }
    }
}

fn init_logging(config: &LaunchpadConfig) {
    let log_level = config
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("launchpad_cli={},launchpad_sdk={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
