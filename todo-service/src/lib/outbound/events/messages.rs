use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::events::WelcomeNotification;

const WELCOME_SUBJECT: &str = "Welcome to Todo";

/// Serializable envelope for notification messages.
///
/// Infrastructure representation consumed by the mail worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum NotificationMessage {
    Welcome(WelcomeNotificationMessage),
}

/// Serializable message for a welcome notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeNotificationMessage {
    pub event_id: String,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<&WelcomeNotification> for WelcomeNotificationMessage {
    fn from(notification: &WelcomeNotification) -> Self {
        Self {
            event_id: notification.event_id.clone(),
            username: notification.username.clone(),
            fullname: notification.fullname.clone(),
            email: notification.email.clone(),
            subject: WELCOME_SUBJECT.to_string(),
            body: format!(
                "Hello {}, your account '{}' is ready.",
                notification.fullname, notification.username
            ),
            created_at: notification.created_at,
        }
    }
}

impl From<&WelcomeNotification> for NotificationMessage {
    fn from(notification: &WelcomeNotification) -> Self {
        NotificationMessage::Welcome(WelcomeNotificationMessage::from(notification))
    }
}
