use clap::Subcommand;

#[derive(Subcommand)]
pub enum DocumentCommands {
    /// List documents
    List {
        /// Restrict to one dataset
        #[arg(long)]
        dataset_id: Option<String>,

        /// Filter by status: pending, processing, completed, failed
        #[arg(long)]
        status: Option<String>,

        /// Match against title
        #[arg(long)]
        search: Option<String>,
    },
    /// Get a document by ID
    Get {
        /// Document ID
        id: String,

        /// Fetch the full text instead of the metadata
        #[arg(long)]
        content: bool,
    },
    /// Create a text document in a dataset
    Create {
        /// Dataset ID
        #[arg(long)]
        dataset_id: String,

        /// Document title
        #[arg(long)]
        title: String,

        /// Document text
        #[arg(long)]
        content: String,
    },
    /// Delete a document
    Delete {
        /// Document ID
        id: String,
    },
    /// Show the chunks a document was split into
    Chunks {
        /// Document ID
        id: String,
    },
    /// Queue a document for processing again
    Reprocess {
        /// Document ID
        id: String,
    },
}
