use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::FutureProducer;
use rdkafka::producer::FutureRecord;
use rdkafka::util::Timeout;
use thiserror::Error;

use crate::config::KafkaConfig;
use crate::domain::user::events::WelcomeNotification;
use crate::outbound::events::messages::NotificationMessage;
use crate::user::errors::NotificationError;
use crate::user::ports::NotificationPublisher;

#[derive(Debug, Error)]
pub enum KafkaProducerError {
    #[error("Failed to send message to Kafka: {0}")]
    SendError(String),

    #[error("Failed to serialize message: {0}")]
    SerializationError(String),
}

impl From<KafkaProducerError> for NotificationError {
    fn from(err: KafkaProducerError) -> Self {
        match err {
            KafkaProducerError::SerializationError(msg) => {
                NotificationError::SerializationFailed(msg)
            }
            KafkaProducerError::SendError(msg) => NotificationError::PublishFailed(msg),
        }
    }
}

pub struct KafkaNotificationProducer {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaNotificationProducer {
    /// Create a Kafka producer for the notification topic.
    ///
    /// # Notes:
    /// - `acks=all`: Wait for all in-sync replicas to acknowledge
    /// - No retries configured; a failed send is reported once and dropped
    pub fn new(config: &KafkaConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Initializing Kafka producer for notifications"
        );

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "10000")
            .set("acks", "all")
            .set("retries", "0")
            .create()?;

        tracing::info!("Kafka producer initialized successfully");

        Ok(Self {
            producer,
            topic: config.topic.to_string(),
            timeout: Duration::from_secs(10),
        })
    }

    async fn publish(
        &self,
        key: &str,
        message: &NotificationMessage,
    ) -> Result<(), KafkaProducerError> {
        let payload = serde_json::to_string(message)
            .map_err(|e| KafkaProducerError::SerializationError(e.to_string()))?;

        let record = FutureRecord::to(&self.topic).key(key).payload(&payload);

        self.producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map(|_| {
                tracing::debug!(topic = %self.topic, key = %key, "Notification published");
            })
            .map_err(|(err, _)| KafkaProducerError::SendError(err.to_string()))
    }
}

#[async_trait]
impl NotificationPublisher for KafkaNotificationProducer {
    async fn publish_welcome(
        &self,
        notification: &WelcomeNotification,
    ) -> Result<(), NotificationError> {
        let message = NotificationMessage::from(notification);

        self.publish(&notification.username, &message)
            .await
            .map_err(NotificationError::from)
    }
}
