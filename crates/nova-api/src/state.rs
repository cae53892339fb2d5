//! Application state wiring all services together.
//!
//! Services are generic over repository and credential traits; AppState
//! pins them to the concrete infra implementations.

use std::sync::Arc;

use secrecy::ExposeSecret;

use nova_core::llm::dispatcher::AssistantDispatcher;
use nova_core::service::analytics::AnalyticsService;
use nova_core::service::auth::AuthService;
use nova_core::service::chat::ChatService;
use nova_core::service::event::EventService;
use nova_core::service::note::NoteService;
use nova_core::service::notification::NotificationService;
use nova_core::service::preferences::PreferencesService;
use nova_core::service::profile::ProfileService;
use nova_core::service::tag::TagService;
use nova_core::service::task::TaskService;
use nova_infra::crypto::jwt::JwtCodec;
use nova_infra::crypto::password::BcryptHasher;
use nova_infra::llm::build_dispatcher;
use nova_infra::sqlite::analytics::SqliteAnalyticsRepository;
use nova_infra::sqlite::chat::SqliteChatRepository;
use nova_infra::sqlite::event::SqliteEventRepository;
use nova_infra::sqlite::note::SqliteNoteRepository;
use nova_infra::sqlite::notification::SqliteNotificationRepository;
use nova_infra::sqlite::pool::DatabasePool;
use nova_infra::sqlite::preferences::SqlitePreferencesRepository;
use nova_infra::sqlite::tag::SqliteTagRepository;
use nova_infra::sqlite::task::SqliteTaskRepository;
use nova_infra::sqlite::user::SqliteUserRepository;

use crate::config::ServerConfig;

pub type ConcreteAuthService = AuthService<SqliteUserRepository, BcryptHasher, JwtCodec>;
pub type ConcreteProfileService = ProfileService<SqliteUserRepository>;
pub type ConcreteAnalyticsService = AnalyticsService<SqliteAnalyticsRepository>;
pub type ConcreteChatService = ChatService<SqliteChatRepository, SqliteAnalyticsRepository>;
pub type ConcreteTaskService = TaskService<SqliteTaskRepository, SqliteAnalyticsRepository>;
pub type ConcreteNoteService = NoteService<SqliteNoteRepository, SqliteAnalyticsRepository>;
pub type ConcreteEventService = EventService<SqliteEventRepository, SqliteAnalyticsRepository>;
pub type ConcreteTagService = TagService<SqliteTagRepository>;
pub type ConcreteNotificationService = NotificationService<SqliteNotificationRepository>;
pub type ConcretePreferencesService = PreferencesService<SqlitePreferencesRepository>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub profile_service: Arc<ConcreteProfileService>,
    pub analytics_service: Arc<ConcreteAnalyticsService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub task_service: Arc<ConcreteTaskService>,
    pub note_service: Arc<ConcreteNoteService>,
    pub event_service: Arc<ConcreteEventService>,
    pub tag_service: Arc<ConcreteTagService>,
    pub notification_service: Arc<ConcreteNotificationService>,
    pub preferences_service: Arc<ConcretePreferencesService>,
    /// Verifies bearer credentials for the auth extractor.
    pub credentials: Arc<JwtCodec>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database, build the provider chain and wire services.
    pub async fn init(config: &ServerConfig) -> anyhow::Result<Self> {
        if config.jwt_secret.expose_secret().trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        let db_pool = DatabasePool::new(&config.database_url).await?;
        tracing::info!(url = %config.database_url, "Database ready");

        let credentials = Arc::new(JwtCodec::new(&config.jwt_secret, config.jwt_expiry));
        let dispatcher = build_dispatcher(&config.provider_settings());

        Ok(Self::assemble(
            db_pool,
            credentials,
            Arc::new(BcryptHasher::default()),
            dispatcher,
        ))
    }

    pub fn assemble(
        db_pool: DatabasePool,
        credentials: Arc<JwtCodec>,
        hasher: Arc<BcryptHasher>,
        dispatcher: AssistantDispatcher,
    ) -> Self {
        let analytics_service = Arc::new(AnalyticsService::new(SqliteAnalyticsRepository::new(
            db_pool.clone(),
        )));

        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool.clone()),
            hasher,
            credentials.clone(),
        );
        let profile_service = ProfileService::new(SqliteUserRepository::new(db_pool.clone()));
        let chat_service = ChatService::new(
            SqliteChatRepository::new(db_pool.clone()),
            Arc::new(dispatcher),
            analytics_service.clone(),
        );
        let task_service = TaskService::new(
            SqliteTaskRepository::new(db_pool.clone()),
            analytics_service.clone(),
        );
        let note_service = NoteService::new(
            SqliteNoteRepository::new(db_pool.clone()),
            analytics_service.clone(),
        );
        let event_service = EventService::new(
            SqliteEventRepository::new(db_pool.clone()),
            analytics_service.clone(),
        );
        let tag_service = TagService::new(SqliteTagRepository::new(db_pool.clone()));
        let notification_service =
            NotificationService::new(SqliteNotificationRepository::new(db_pool.clone()));
        let preferences_service =
            PreferencesService::new(SqlitePreferencesRepository::new(db_pool.clone()));

        Self {
            auth_service: Arc::new(auth_service),
            profile_service: Arc::new(profile_service),
            analytics_service,
            chat_service: Arc::new(chat_service),
            task_service: Arc::new(task_service),
            note_service: Arc::new(note_service),
            event_service: Arc::new(event_service),
            tag_service: Arc::new(tag_service),
            notification_service: Arc::new(notification_service),
            preferences_service: Arc::new(preferences_service),
            credentials,
            db_pool,
        }
    }
}
