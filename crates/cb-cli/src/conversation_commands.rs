use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConversationCommands {
    /// List conversations of a bot
    List {
        /// Bot ID
        bot_id: String,
    },
    /// Start a conversation with a first message
    Start {
        /// Bot ID
        bot_id: String,

        /// First message
        #[arg(long)]
        message: String,
    },
    /// List messages of a conversation
    Messages {
        /// Conversation ID
        conversation_id: String,
    },
    /// Send a message and print the reply
    Send {
        /// Conversation ID
        conversation_id: String,

        /// Message text
        #[arg(long)]
        message: String,
    },
    /// Delete a conversation
    Delete {
        /// Conversation ID
        conversation_id: String,
    },
}
