use crate::{
    auth_commands::AuthCommands,
    bot_commands::BotCommands,
    commands::Commands,
    console_navigator::ConsoleNavigator,
    conversation_commands::ConversationCommands,
    dashboard_commands::DashboardCommands,
    dataset_commands::DatasetCommands,
    document_commands::DocumentCommands,
    error::{CliError, Result as CliResult},
    provider_commands::ProviderCommands,
    settings_commands::SettingsCommands,
    tenant_commands::TenantCommands,
};

use cb_client::{
    AdminDashboardService, AiProviderService, ApiClient, AuthContext, AuthService, BotService,
    ClientError, ConversationService, DatasetService, DocumentService, GuardDecision, GuardState,
    Route, RouteGuard, SettingsService, TenantDashboardService, TenantService,
};
use cb_core::{
    DashboardKind, DocumentStatus, NewBot, NewDataset, NewDocument, NewTenant, TenantListQuery,
    TenantUpdate,
};

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// Everything a command needs, built once per process
pub struct App {
    api: Arc<ApiClient>,
    context: AuthContext,
    guard: RouteGuard,
}

impl App {
    pub fn new(api: Arc<ApiClient>, navigator: Arc<ConsoleNavigator>) -> Self {
        let context = AuthContext::new(AuthService::new(Arc::clone(&api)));
        let guard = RouteGuard::new(navigator);

        Self {
            api,
            context,
            guard,
        }
    }

    fn kind(&self) -> DashboardKind {
        self.api.kind()
    }

    pub(crate) async fn run(&self, command: Commands) -> CliResult<Value> {
        if let Some(route) = command.route() {
            self.require_session(&route).await?;
        }

        match command {
            Commands::Auth { action } => self.auth(action).await,
            Commands::Tenant { action } => self.tenant(action).await,
            Commands::Settings { action } => self.settings(action).await,
            Commands::Dashboard { action } => self.dashboard(action).await,
            Commands::Bot { action } => self.bot(action).await,
            Commands::Dataset { action } => self.dataset(action).await,
            Commands::Document { action } => self.document(action).await,
            Commands::Conversation { action } => self.conversation(action).await,
            Commands::Provider { action } => self.provider(action).await,
        }
    }

    /// Restore the session and let the guard decide whether the route may run
    async fn require_session(&self, route: &Route) -> CliResult<()> {
        let state = self.context.initialize().await;
        match self.guard.enforce(GuardState::from(&state), route) {
            GuardDecision::Render => Ok(()),
            decision => {
                debug!("Guard refused {route}: {}", decision_label(&decision));
                Err(CliError::NotSignedIn)
            }
        }
    }

    fn require_kind(&self, command: &'static str, expected: DashboardKind) -> CliResult<()> {
        if self.kind() == expected {
            return Ok(());
        }
        Err(CliError::WrongDashboard {
            command,
            expected,
            actual: self.kind(),
        })
    }

    // =========================================================================
    // Auth
    // =========================================================================

    async fn auth(&self, action: AuthCommands) -> CliResult<Value> {
        let auth = self.context.auth();

        match action {
            AuthCommands::Login { email, password } => {
                let session = self.context.login(&email, &password).await?;
                Ok(json!({
                    "dashboard": self.kind(),
                    "user": session.user,
                }))
            }
            AuthCommands::Logout => {
                self.context.logout().await?;
                Ok(json!({ "signed_out": true }))
            }
            AuthCommands::Whoami { verify } => {
                if verify {
                    return to_json(auth.get_profile().await?);
                }
                let state = self.context.initialize().await;
                match state.user {
                    Some(user) if state.is_authenticated => to_json(user),
                    _ => Err(CliError::NotSignedIn),
                }
            }
            AuthCommands::Refresh => {
                auth.refresh().await?;
                Ok(json!({ "refreshed": true }))
            }
            AuthCommands::Status { route } => {
                let route = Route::from_path(&route);
                let state = self.context.initialize().await;
                let decision = RouteGuard::decide(GuardState::from(&state), &route);
                Ok(json!({
                    "dashboard": self.kind(),
                    "has_token": auth.is_authenticated(),
                    "is_authenticated": state.is_authenticated,
                    "user": state.user,
                    "route": route.path(),
                    "decision": decision_label(&decision),
                }))
            }
        }
    }

    // =========================================================================
    // Admin
    // =========================================================================

    async fn tenant(&self, action: TenantCommands) -> CliResult<Value> {
        self.require_kind("tenant", DashboardKind::Admin)?;
        let tenants = TenantService::new(Arc::clone(&self.api));

        match action {
            TenantCommands::List {
                page,
                per_page,
                search,
                active,
                plan,
            } => {
                let query = TenantListQuery {
                    page,
                    per_page,
                    search,
                    is_active: active,
                    plan,
                };
                to_json(tenants.list(&query).await?)
            }
            TenantCommands::Get { id, full } => {
                if full {
                    to_json(tenants.full_details(&id).await?)
                } else {
                    to_json(tenants.get(&id).await?)
                }
            }
            TenantCommands::Create {
                name,
                slug,
                description,
                email,
                password,
                owner_email,
                plan,
                rate_limit,
                inactive,
            } => {
                let tenant = NewTenant {
                    name,
                    slug,
                    description,
                    email,
                    password,
                    owner_email,
                    plan,
                    is_active: !inactive,
                    global_rate_limit: rate_limit,
                };
                to_json(tenants.create(&tenant).await?)
            }
            TenantCommands::Update {
                id,
                name,
                slug,
                description,
                email,
                password,
                plan,
                active,
                rate_limit,
            } => {
                let update = TenantUpdate {
                    name,
                    slug,
                    description,
                    email,
                    password,
                    plan,
                    is_active: active,
                    global_rate_limit: rate_limit,
                };
                to_json(tenants.update(&id, &update).await?)
            }
            TenantCommands::Delete { id } => {
                tenants.delete(&id).await?;
                Ok(deleted(&id))
            }
            TenantCommands::Stats { id } => to_json(tenants.usage_stats(&id).await?),
        }
    }

    async fn settings(&self, action: SettingsCommands) -> CliResult<Value> {
        self.require_kind("settings", DashboardKind::Admin)?;
        let settings = SettingsService::new(Arc::clone(&self.api));

        match action {
            SettingsCommands::Get => to_json(settings.system().await?),
            SettingsCommands::Providers => to_json(settings.providers().await?),
        }
    }

    async fn dashboard(&self, action: DashboardCommands) -> CliResult<Value> {
        match (action, self.kind()) {
            (DashboardCommands::Stats, DashboardKind::Admin) => {
                to_json(AdminDashboardService::new(Arc::clone(&self.api)).stats().await?)
            }
            (DashboardCommands::Stats, DashboardKind::Tenant) => {
                to_json(TenantDashboardService::new(Arc::clone(&self.api)).stats().await?)
            }
            (DashboardCommands::Metrics, _) => {
                self.require_kind("dashboard metrics", DashboardKind::Admin)?;
                to_json(AdminDashboardService::new(Arc::clone(&self.api)).metrics().await?)
            }
        }
    }

    // =========================================================================
    // Tenant
    // =========================================================================

    async fn bot(&self, action: BotCommands) -> CliResult<Value> {
        self.require_kind("bot", DashboardKind::Tenant)?;
        let bots = BotService::new(Arc::clone(&self.api));

        match action {
            BotCommands::List { active } => to_json(bots.list(active).await?),
            BotCommands::Get { id } => to_json(bots.get(&id).await?),
            BotCommands::Create {
                name,
                provider_id,
                model,
                temperature,
                max_tokens,
                description,
                system_prompt,
                datasets,
                public,
            } => {
                let mut bot = NewBot::new(name, provider_id);
                if let Some(model) = model {
                    bot.model = model;
                }
                if let Some(temperature) = temperature {
                    bot.temperature = temperature;
                }
                bot.max_tokens = max_tokens;
                bot.description = description;
                bot.system_prompt = system_prompt;
                bot.dataset_ids = datasets;
                bot.is_public = public;
                to_json(bots.create(&bot).await?)
            }
            BotCommands::Delete { id } => {
                bots.delete(&id).await?;
                Ok(deleted(&id))
            }
            BotCommands::Datasets { bot_id } => to_json(bots.datasets(&bot_id).await?),
            BotCommands::AttachDataset { bot_id, dataset_id } => {
                to_json(bots.attach_dataset(&bot_id, &dataset_id).await?)
            }
            BotCommands::DetachDataset { bot_id, dataset_id } => {
                bots.detach_dataset(&bot_id, &dataset_id).await?;
                Ok(json!({ "bot_id": bot_id, "detached": dataset_id }))
            }
            BotCommands::Stats => to_json(bots.statistics().await?),
        }
    }

    async fn dataset(&self, action: DatasetCommands) -> CliResult<Value> {
        self.require_kind("dataset", DashboardKind::Tenant)?;
        let datasets = DatasetService::new(Arc::clone(&self.api));

        match action {
            DatasetCommands::List { search, active } => {
                to_json(datasets.list(search.as_deref(), active).await?)
            }
            DatasetCommands::Get { id } => to_json(datasets.get(&id).await?),
            DatasetCommands::Create {
                name,
                description,
                tags,
            } => {
                let mut dataset = NewDataset::new(name);
                dataset.description = description;
                dataset.tags = tags;
                to_json(datasets.create(&dataset).await?)
            }
            DatasetCommands::Delete { id, force } => {
                datasets.delete(&id, force).await?;
                Ok(deleted(&id))
            }
            DatasetCommands::Stats { id: Some(id) } => to_json(datasets.statistics(&id).await?),
            DatasetCommands::Stats { id: None } => to_json(datasets.overview().await?),
        }
    }

    async fn document(&self, action: DocumentCommands) -> CliResult<Value> {
        self.require_kind("document", DashboardKind::Tenant)?;
        let documents = DocumentService::new(Arc::clone(&self.api));

        match action {
            DocumentCommands::List {
                dataset_id,
                status,
                search,
            } => {
                let status = parse_status(status.as_deref())?;
                let listed = match dataset_id {
                    Some(ref dataset_id) => {
                        documents
                            .list_for_dataset(dataset_id, status, search.as_deref())
                            .await?
                    }
                    None => documents.list_all(None, status, search.as_deref()).await?,
                };
                to_json(listed)
            }
            DocumentCommands::Get { id, content } => {
                if content {
                    to_json(documents.content(&id).await?)
                } else {
                    to_json(documents.get(&id).await?)
                }
            }
            DocumentCommands::Create {
                dataset_id,
                title,
                content,
            } => {
                let document = NewDocument::text(title, content);
                to_json(documents.create_text(&dataset_id, &document).await?)
            }
            DocumentCommands::Delete { id } => {
                documents.delete(&id).await?;
                Ok(deleted(&id))
            }
            DocumentCommands::Chunks { id } => to_json(documents.chunks(&id).await?),
            DocumentCommands::Reprocess { id } => to_json(documents.reprocess(&id).await?),
        }
    }

    async fn conversation(&self, action: ConversationCommands) -> CliResult<Value> {
        self.require_kind("conversation", DashboardKind::Tenant)?;
        let conversations = ConversationService::new(Arc::clone(&self.api));

        match action {
            ConversationCommands::List { bot_id } => to_json(conversations.list(&bot_id).await?),
            ConversationCommands::Start { bot_id, message } => {
                to_json(conversations.start(&bot_id, &message).await?)
            }
            ConversationCommands::Messages { conversation_id } => {
                to_json(conversations.messages(&conversation_id).await?)
            }
            ConversationCommands::Send {
                conversation_id,
                message,
            } => to_json(conversations.send(&conversation_id, &message).await?),
            ConversationCommands::Delete { conversation_id } => {
                conversations.delete(&conversation_id).await?;
                Ok(deleted(&conversation_id))
            }
        }
    }

    async fn provider(&self, action: ProviderCommands) -> CliResult<Value> {
        self.require_kind("provider", DashboardKind::Tenant)?;
        let providers = AiProviderService::new(Arc::clone(&self.api));

        match action {
            ProviderCommands::List => to_json(providers.list().await?),
            ProviderCommands::Available => to_json(providers.available().await?),
        }
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn to_json<T: Serialize>(value: T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn deleted(id: &str) -> Value {
    json!({ "deleted": id })
}

fn parse_status(status: Option<&str>) -> CliResult<Option<DocumentStatus>> {
    status
        .map(|s| s.parse::<DocumentStatus>().map_err(ClientError::from))
        .transpose()
        .map_err(CliError::from)
}

pub(crate) fn decision_label(decision: &GuardDecision) -> String {
    match decision {
        GuardDecision::Loading => "loading".to_string(),
        GuardDecision::Redirect(route) => format!("redirect {route}"),
        GuardDecision::Render => "render".to_string(),
    }
}
