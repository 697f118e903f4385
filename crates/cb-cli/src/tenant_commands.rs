use clap::Subcommand;

#[derive(Subcommand)]
pub enum TenantCommands {
    /// List tenants, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Page size (1-100)
        #[arg(long, default_value_t = 10)]
        per_page: u32,

        /// Match against name, slug or email
        #[arg(long)]
        search: Option<String>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,

        /// Filter by plan
        #[arg(long)]
        plan: Option<String>,
    },
    /// Get a tenant by ID
    Get {
        /// Tenant ID
        id: String,

        /// Include users, bots and usage in one document
        #[arg(long)]
        full: bool,
    },
    /// Create a new tenant
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// URL-safe identifier
        #[arg(long)]
        slug: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Login email for the tenant dashboard
        #[arg(long)]
        email: Option<String>,

        /// Login password (at least 8 characters)
        #[arg(long)]
        password: Option<String>,

        /// Owner contact email
        #[arg(long)]
        owner_email: Option<String>,

        /// Subscription plan
        #[arg(long, default_value = "basic")]
        plan: String,

        /// Requests per minute across all bots
        #[arg(long)]
        rate_limit: Option<u32>,

        /// Create the tenant disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Update a tenant (only the given fields change)
    Update {
        /// Tenant ID
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New slug
        #[arg(long)]
        slug: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New login email
        #[arg(long)]
        email: Option<String>,

        /// New login password
        #[arg(long)]
        password: Option<String>,

        /// New plan
        #[arg(long)]
        plan: Option<String>,

        /// Enable or disable the tenant
        #[arg(long)]
        active: Option<bool>,

        /// New rate limit
        #[arg(long)]
        rate_limit: Option<u32>,
    },
    /// Delete a tenant
    Delete {
        /// Tenant ID
        id: String,
    },
    /// Usage statistics for a tenant
    Stats {
        /// Tenant ID
        id: String,
    },
}
