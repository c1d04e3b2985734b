//! localcart - persistent local storage with a shopping cart
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use localcart::cli::{Cli, Commands};
use localcart::config::{Config, ConfigManager};
use localcart::error::LocalcartResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> LocalcartResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Loaded config from {}", config_manager.path().display());

    // Flags and environment take precedence over the config file
    if let Some(origin) = cli.origin {
        config.storage.origin = origin;
    }
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }

    match cli.command {
        Commands::Add(args) => localcart::cli::commands::add(args, &config).await,
        Commands::List(args) => localcart::cli::commands::list(args, &config).await,
        Commands::Store(args) => localcart::cli::commands::store(args, &config).await,
        Commands::Config(args) => {
            localcart::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("localcart=warn"),
        1 => EnvFilter::new("localcart=info"),
        _ => EnvFilter::new("localcart=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
