use crate::commands::Commands;

use cb_config::DashboardKind;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Chatbot platform console for the admin and tenant dashboards")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides config and CB_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Dashboard to act on: admin or tenant
    #[arg(long, global = true)]
    pub(crate) dashboard: Option<DashboardKind>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
