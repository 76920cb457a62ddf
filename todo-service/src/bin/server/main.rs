use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::config::SecretProviderKind;
use todo_service::config::StoreBackend;
use todo_service::domain::session::models::SessionSettings;
use todo_service::domain::session::ports::SecretProvider;
use todo_service::domain::session::service::SessionService;
use todo_service::domain::todo::ports::TodoRepository;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::ports::NotificationPublisher;
use todo_service::domain::user::ports::UserRepository;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::events::KafkaNotificationProducer;
use todo_service::outbound::events::LoggingNotificationPublisher;
use todo_service::outbound::repositories::InMemoryItemStore;
use todo_service::outbound::repositories::PostgresItemStore;
use todo_service::outbound::secrets::CachedSecretProvider;
use todo_service::outbound::secrets::EnvSecretProvider;
use todo_service::outbound::secrets::StaticSecretProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "todo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store = ?config.store.backend,
        secrets = ?config.secrets.provider,
        notifications_enabled = config.notifications.enabled,
        "Configuration loaded"
    );

    let (user_repository, todo_repository) = build_store(&config).await?;
    let secret_provider = build_secret_provider(&config);
    let notification_publisher = build_notification_publisher(&config)?;

    let authenticator = Arc::new(Authenticator::new());

    let user_service = Arc::new(UserService::new(
        user_repository,
        notification_publisher,
        Arc::clone(&authenticator),
    ));
    let session_service = Arc::new(SessionService::new(
        secret_provider,
        Arc::clone(&authenticator),
        SessionSettings {
            secret_name: config.jwt.secret_name.clone(),
            token_ttl_seconds: config.jwt.expiration_seconds,
        },
    ));
    let todo_service = Arc::new(TodoService::new(todo_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, session_service, todo_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

async fn build_store(
    config: &Config,
) -> Result<(Arc<dyn UserRepository>, Arc<dyn TodoRepository>), anyhow::Error> {
    match config.store.backend {
        StoreBackend::Postgres => {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            let store = Arc::new(PostgresItemStore::new(pg_pool));
            let user_repository: Arc<dyn UserRepository> = store.clone();
            let todo_repository: Arc<dyn TodoRepository> = store;
            Ok((user_repository, todo_repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            let store = Arc::new(InMemoryItemStore::new());
            let user_repository: Arc<dyn UserRepository> = store.clone();
            let todo_repository: Arc<dyn TodoRepository> = store;
            Ok((user_repository, todo_repository))
        }
    }
}

fn build_secret_provider(config: &Config) -> Arc<dyn SecretProvider> {
    let ttl = Duration::from_secs(config.secrets.cache_ttl_seconds);

    match config.secrets.provider {
        SecretProviderKind::Env => Arc::new(CachedSecretProvider::new(EnvSecretProvider, ttl)),
        SecretProviderKind::Static => Arc::new(CachedSecretProvider::new(
            StaticSecretProvider::new(config.secrets.values.clone()),
            ttl,
        )),
    }
}

fn build_notification_publisher(
    config: &Config,
) -> Result<Arc<dyn NotificationPublisher>, anyhow::Error> {
    let publisher: Arc<dyn NotificationPublisher> = if config.notifications.enabled {
        Arc::new(KafkaNotificationProducer::new(&config.kafka)?)
    } else {
        tracing::info!("Notification dispatch disabled");
        Arc::new(LoggingNotificationPublisher)
    };
    Ok(publisher)
}
