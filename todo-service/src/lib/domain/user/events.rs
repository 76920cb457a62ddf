use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::User;

/// Welcome notification raised when a user registers.
///
/// Contains a snapshot of the contact details needed by the mail side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeNotification {
    pub event_id: String,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl WelcomeNotification {
    /// Create a welcome notification for a freshly registered user.
    ///
    /// Generates a unique event ID for downstream deduplication.
    pub fn new(user: &User) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            username: user.username.as_str().to_string(),
            fullname: user.fullname.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
