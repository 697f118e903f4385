use clap::Subcommand;

#[derive(Subcommand)]
pub enum BotCommands {
    /// List bots
    List {
        /// Filter by active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Get a bot by ID
    Get {
        /// Bot ID
        id: String,
    },
    /// Create a new bot
    Create {
        /// Bot name
        #[arg(long)]
        name: String,

        /// Tenant AI provider ID the bot answers with
        #[arg(long)]
        provider_id: String,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Sampling temperature (0.0-2.0)
        #[arg(long)]
        temperature: Option<f64>,

        /// Upper bound on reply tokens
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Bot description
        #[arg(long)]
        description: Option<String>,

        /// System prompt
        #[arg(long)]
        system_prompt: Option<String>,

        /// Dataset to attach (repeatable)
        #[arg(long = "dataset")]
        datasets: Vec<String>,

        /// Make the bot reachable without a tenant session
        #[arg(long)]
        public: bool,
    },
    /// Delete a bot
    Delete {
        /// Bot ID
        id: String,
    },
    /// List datasets attached to a bot
    Datasets {
        /// Bot ID
        bot_id: String,
    },
    /// Attach a dataset to a bot
    AttachDataset {
        /// Bot ID
        bot_id: String,

        /// Dataset ID
        dataset_id: String,
    },
    /// Detach a dataset from a bot
    DetachDataset {
        /// Bot ID
        bot_id: String,

        /// Dataset ID
        dataset_id: String,
    },
    /// Statistics across all bots
    Stats,
}
