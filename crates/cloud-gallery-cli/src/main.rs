//! Cloud Gallery CLI - manage bucket files from the terminal
//!
//! Drives the same gallery view-model as the desktop app, with notices
//! printed to stderr.

mod cli;
mod commands;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::download::run_download;
use crate::commands::list::run_list;
use crate::commands::open::run_open;
use crate::commands::upload::run_upload;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        if !error.is_reported() {
            eprintln!("Error: {error}");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloud_gallery=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::List { json } => run_list(json, api_url).await?,
        Commands::Upload { path } => run_upload(&path, api_url).await?,
        Commands::Delete { key, yes } => run_delete(&key, yes, api_url).await?,
        Commands::Download { key, output } => {
            run_download(&key, output.as_deref(), api_url).await?;
        }
        Commands::Open { key } => run_open(&key, api_url).await?,
        Commands::Config { command } => run_config(command, api_url)?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
