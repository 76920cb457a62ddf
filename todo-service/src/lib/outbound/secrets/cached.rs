use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::session::errors::SecretError;
use crate::domain::session::ports::SecretProvider;

/// Holds fetched secrets for a bounded time before asking the inner
/// provider again. A zero TTL disables caching entirely.
pub struct CachedSecretProvider<P> {
    inner: P,
    ttl: Duration,
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl<P: SecretProvider> CachedSecretProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<P: SecretProvider> SecretProvider for CachedSecretProvider<P> {
    async fn fetch_secret(&self, name: &str) -> Result<String, SecretError> {
        if self.ttl.is_zero() {
            return self.inner.fetch_secret(name).await;
        }

        if let Some((value, fetched_at)) = self.entries.read().await.get(name) {
            if fetched_at.elapsed() < self.ttl {
                return Ok(value.clone());
            }
        }

        // Failures are not cached.
        let value = self.inner.fetch_secret(name).await?;
        self.entries
            .write()
            .await
            .insert(name.to_string(), (value.clone(), Instant::now()));
        tracing::debug!(secret = %name, "Secret refreshed");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SecretProvider for CountingProvider {
        async fn fetch_secret(&self, _name: &str) -> Result<String, SecretError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("secret-{}", call))
        }
    }

    #[tokio::test]
    async fn test_zero_ttl_passes_through() {
        let cached = CachedSecretProvider::new(CountingProvider::default(), Duration::ZERO);

        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-0");
        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-1");
    }

    #[tokio::test]
    async fn test_value_reused_within_ttl() {
        let cached =
            CachedSecretProvider::new(CountingProvider::default(), Duration::from_secs(60));

        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-0");
        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-0");
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_value_refreshed_after_ttl() {
        let cached =
            CachedSecretProvider::new(CountingProvider::default(), Duration::from_millis(10));

        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-0");
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cached.fetch_secret("jwt").await.unwrap(), "secret-1");
    }
}
