//! cb - Chatbot platform console
//!
//! Drives the admin and tenant dashboards of the chatbot backend from a
//! terminal. The session is kept under `.cb/session/` and renewed
//! transparently when the access token expires.
//!
//! # Examples
//!
//! ```bash
//! # Sign in to the tenant dashboard
//! cb auth login --email owner@acme.test --password 'hunter22'
//!
//! # List bots
//! cb bot list --pretty
//!
//! # Admin: list tenants on the plan "pro"
//! cb --dashboard admin tenant list --plan pro
//! ```

mod app;
mod auth_commands;
mod bot_commands;
mod cli;
mod commands;
mod console_navigator;
mod conversation_commands;
mod dashboard_commands;
mod dataset_commands;
mod document_commands;
mod error;
mod logger;
mod provider_commands;
mod settings_commands;
mod tenant_commands;

#[cfg(test)]
mod tests;

use crate::{
    app::App,
    cli::Cli,
    console_navigator::ConsoleNavigator,
    error::Result as CliResult,
};

use cb_client::{ApiClient, FileTokenStore, MemoryTokenStore, Route, TokenStore};
use cb_config::{Config, StorageBackend};

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;
    let navigator = Arc::new(ConsoleNavigator::default());

    let result = run(cli, Arc::clone(&navigator)).await;
    let sent_to_login = navigator.last_route() == Some(Route::Login);

    // Handle result
    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if e.needs_login() || sent_to_login {
                eprintln!();
                eprintln!("Sign in first:");
                eprintln!("  cb auth login --email <email> --password <password>");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, navigator: Arc<ConsoleNavigator>) -> CliResult<Value> {
    let config = load_config(&cli)?;

    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, config.log_file_path()?, colored)?;
    config.log_summary();

    let store = open_store(&config)?;
    let api = Arc::new(ApiClient::new(&config.api, store, navigator.clone())?);

    info!("Running against the {} dashboard", config.api.dashboard);
    App::new(api, navigator).run(cli.command).await
}

/// Config file and environment first, then command-line flags on top
fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    if let Some(dashboard) = cli.dashboard {
        config.api.dashboard = dashboard;
    }

    config.validate()?;
    Ok(config)
}

fn open_store(config: &Config) -> CliResult<Arc<dyn TokenStore>> {
    let store: Arc<dyn TokenStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileTokenStore::open(
            &config.storage_dir()?,
            config.api.dashboard,
        )?),
        StorageBackend::Memory => Arc::new(MemoryTokenStore::new()),
    };
    Ok(store)
}
