mod actions;
mod api;
mod cli;
mod config;
mod error;
mod models;
mod session;

use actions::ProjectActions;
use api::{NpmClient, RegistryClient};
use clap::error::ErrorKind;
use clap::Parser;
use cli::{normalize_args, App, Cli};
use colored::*;
use config::Config;
use error::Result;
use std::io::IsTerminal;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            },
        },
    };

    if let Err(reason) = run(cli).await {
        error!("Command failed: {:?}", reason);
        eprintln!();
        if reason.is_bug() {
            eprintln!("{}", "Unexpected error. Please report it as a bug:".red());
            eprintln!("{}", reason);
        } else {
            eprintln!("{}", reason.to_string().yellow());
        }
        eprintln!();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();
    debug!("Interactive terminal: {}", interactive);

    let registry = RegistryClient::new(config.registry_url.clone()).with_progress(interactive);
    let versions = NpmClient::new(&config)?;
    let actions = ProjectActions::new(std::env::current_dir()?).with_interactive(interactive);

    let mut app = App::new(registry, versions, actions);
    app.run(cli).await?;

    info!("Done.");
    Ok(())
}
