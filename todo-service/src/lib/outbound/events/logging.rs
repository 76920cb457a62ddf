use async_trait::async_trait;

use crate::domain::user::events::WelcomeNotification;
use crate::user::errors::NotificationError;
use crate::user::ports::NotificationPublisher;

/// Publisher used when notifications are disabled: records the event in
/// the log and acknowledges it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotificationPublisher;

#[async_trait]
impl NotificationPublisher for LoggingNotificationPublisher {
    async fn publish_welcome(
        &self,
        notification: &WelcomeNotification,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            event_id = %notification.event_id,
            username = %notification.username,
            "Welcome notification (dispatch disabled)"
        );
        Ok(())
    }
}
