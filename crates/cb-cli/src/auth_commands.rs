use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in and store the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },
    /// End the session (local tokens are always cleared)
    Logout,
    /// Show the signed-in identity
    Whoami {
        /// Ask the server instead of trusting the cached identity
        #[arg(long)]
        verify: bool,
    },
    /// Renew the access token
    Refresh,
    /// Show session state and the guard decision for a route
    Status {
        /// Route to check
        #[arg(long, default_value = "/dashboard")]
        route: String,
    },
}
