#![deny(missing_docs)]

//! # API Navigation CLI
//!
//! Command Line Interface over `apinav-core`.
//!
//! Supported Commands:
//! - `tags`: Operations grouped by tag.
//! - `webhooks`: Webhook operations in document order.
//! - `urls`: Resolved base URLs of one operation.
//! - `nav`: Sidebar navigation tree.

use apinav_core::{AppError, AppResult};
use clap::{Parser, Subcommand};
use tracing::Level;

mod inspect;
mod nav;
mod output;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI navigation toolchain")]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace).
    #[clap(long, global = true, env = "APINAV_LOG", default_value = "warn")]
    log_level: Level,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print path operations grouped by tag.
    Tags(inspect::InspectArgs),
    /// Print webhook operations.
    Webhooks(inspect::InspectArgs),
    /// Print the resolved URLs of one operation.
    Urls(inspect::UrlsArgs),
    /// Print the sidebar navigation tree.
    Nav(nav::NavArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::General(format!("Failed to initialize logging: {}", e)))?;

    match &cli.command {
        Commands::Tags(args) => inspect::execute_tags(args)?,
        Commands::Webhooks(args) => inspect::execute_webhooks(args)?,
        Commands::Urls(args) => inspect::execute_urls(args)?,
        Commands::Nav(args) => nav::execute(args)?,
    }

    Ok(())
}
