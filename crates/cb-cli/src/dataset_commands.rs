use clap::Subcommand;

#[derive(Subcommand)]
pub enum DatasetCommands {
    /// List datasets
    List {
        /// Match against name and description
        #[arg(long)]
        search: Option<String>,

        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Get a dataset by ID
    Get {
        /// Dataset ID
        id: String,
    },
    /// Create a new dataset
    Create {
        /// Dataset name
        #[arg(long)]
        name: String,

        /// Dataset description
        #[arg(long)]
        description: Option<String>,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a dataset
    Delete {
        /// Dataset ID
        id: String,

        /// Delete even when bots still use it
        #[arg(long)]
        force: bool,
    },
    /// Statistics for one dataset, or the overview when no ID is given
    Stats {
        /// Dataset ID
        id: Option<String>,
    },
}
