use crate::{
    auth_commands::AuthCommands, bot_commands::BotCommands,
    conversation_commands::ConversationCommands, dashboard_commands::DashboardCommands,
    dataset_commands::DatasetCommands, document_commands::DocumentCommands,
    provider_commands::ProviderCommands, settings_commands::SettingsCommands,
    tenant_commands::TenantCommands,
};

use cb_client::{DASHBOARD_PATH, Route};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Session operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Tenant management (admin)
    Tenant {
        #[command(subcommand)]
        action: TenantCommands,
    },

    /// System settings (admin)
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Dashboard statistics
    Dashboard {
        #[command(subcommand)]
        action: DashboardCommands,
    },

    /// Bot operations (tenant)
    Bot {
        #[command(subcommand)]
        action: BotCommands,
    },

    /// Dataset operations (tenant)
    Dataset {
        #[command(subcommand)]
        action: DatasetCommands,
    },

    /// Document operations (tenant)
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },

    /// Conversation operations (tenant)
    Conversation {
        #[command(subcommand)]
        action: ConversationCommands,
    },

    /// AI provider credentials (tenant)
    Provider {
        #[command(subcommand)]
        action: ProviderCommands,
    },
}

impl Commands {
    /// Route the command stands in for; `None` for commands that manage the
    /// session themselves.
    pub(crate) fn route(&self) -> Option<Route> {
        let path = match self {
            Self::Auth { .. } => return None,
            Self::Tenant { .. } => "/tenants",
            Self::Settings { .. } => "/settings",
            Self::Dashboard { .. } => DASHBOARD_PATH,
            Self::Bot { .. } => "/bots",
            Self::Dataset { .. } => "/datasets",
            Self::Document { .. } => "/documents",
            Self::Conversation { .. } => "/conversations",
            Self::Provider { .. } => "/ai-providers",
        };
        Some(Route::from_path(path))
    }
}
