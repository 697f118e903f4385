use clap::Subcommand;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show system settings
    Get,
    /// List global AI providers
    Providers,
}
