use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use todo_service::domain::session::models::SessionSettings;
use todo_service::domain::session::service::SessionService;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::events::WelcomeNotification;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::repositories::InMemoryItemStore;
use todo_service::outbound::secrets::StaticSecretProvider;
use todo_service::user::errors::NotificationError;
use todo_service::user::ports::NotificationPublisher;

pub const SECRET_NAME: &str = "jwt-secret";
pub const SECRET_VALUE: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Notification publisher that keeps every welcome it is handed.
#[derive(Default)]
pub struct RecordingNotificationPublisher {
    pub sent: Mutex<Vec<WelcomeNotification>>,
    pub fail: bool,
}

#[async_trait]
impl NotificationPublisher for RecordingNotificationPublisher {
    async fn publish_welcome(
        &self,
        notification: &WelcomeNotification,
    ) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::PublishFailed(
                "queue unavailable".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub notifications: Arc<RecordingNotificationPublisher>,
}

impl TestApp {
    /// Spawn the application with a working notification channel
    pub async fn spawn() -> Self {
        Self::spawn_with_publisher(RecordingNotificationPublisher::default()).await
    }

    /// Spawn the application with a notification channel that always fails
    pub async fn spawn_with_failing_notifications() -> Self {
        Self::spawn_with_publisher(RecordingNotificationPublisher {
            fail: true,
            ..Default::default()
        })
        .await
    }

    async fn spawn_with_publisher(publisher: RecordingNotificationPublisher) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryItemStore::new());
        let notifications = Arc::new(publisher);
        let secrets =
            Arc::new(StaticSecretProvider::default().with_secret(SECRET_NAME, SECRET_VALUE));
        let authenticator = Arc::new(Authenticator::new());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&store),
            Arc::clone(&notifications),
            Arc::clone(&authenticator),
        ));
        let session_service = Arc::new(SessionService::new(
            secrets,
            Arc::clone(&authenticator),
            SessionSettings {
                secret_name: SECRET_NAME.to_string(),
                token_ttl_seconds: 43_200,
            },
        ));
        let todo_service = Arc::new(TodoService::new(store));

        let router = create_router(user_service, session_service, todo_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            notifications,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .json(&serde_json::json!({
                "username": username,
                "password": password,
                "fullname": "Abc Def",
                "email": "a@b.com"
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register, log in and return the issued token
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        self.register(username, password).await;
        let body: serde_json::Value = self
            .login(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }
}
