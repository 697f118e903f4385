use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProviderCommands {
    /// List the tenant's AI provider credentials
    List,
    /// List providers the platform offers
    Available,
}
