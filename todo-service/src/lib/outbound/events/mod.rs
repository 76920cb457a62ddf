pub mod logging;
pub mod messages;
pub mod producer;

pub use logging::LoggingNotificationPublisher;
pub use producer::KafkaNotificationProducer;
