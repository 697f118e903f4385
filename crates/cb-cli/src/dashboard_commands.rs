use clap::Subcommand;

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Headline numbers for the current dashboard
    Stats,
    /// System metrics (admin only)
    Metrics,
}
