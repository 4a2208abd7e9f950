//! In-memory secret cache with per-entry TTL.
//!
//! A TTL of 0 disables the cache entirely, preserving per-request fetch
//! semantics. A positive TTL trades key-rotation latency for one fewer
//! network round trip per validation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{SecretError, SecretProvider, SecretValue};

/// Internal cache entry wrapping a `SecretValue` with TTL metadata.
#[derive(Debug, Clone)]
struct CachedSecret {
    secret: SecretValue,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL cache for secrets.
#[derive(Debug)]
pub struct SecretCache {
    entries: RwLock<HashMap<String, CachedSecret>>,
    ttl_seconds: u64,
}

impl SecretCache {
    /// Create a new cache with the given TTL in seconds.
    #[must_use]
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_seconds,
        }
    }

    /// Get a cached secret by name, if it exists and is not expired.
    pub async fn get(&self, name: &str) -> Option<SecretValue> {
        let entries = self.entries.read().await;
        entries.get(name).and_then(|cached| {
            if Utc::now() < cached.expires_at {
                Some(cached.secret.clone())
            } else {
                None
            }
        })
    }

    /// Get a cached secret even if expired (for degraded mode).
    pub async fn get_even_expired(&self, name: &str) -> Option<SecretValue> {
        let entries = self.entries.read().await;
        entries.get(name).map(|cached| cached.secret.clone())
    }

    /// Store a secret in the cache.
    pub async fn set(&self, secret: SecretValue) {
        let expires_at = Utc::now() + chrono::Duration::seconds(self.ttl_seconds as i64);
        let name = secret.name.clone();
        let cached = CachedSecret { secret, expires_at };
        let mut entries = self.entries.write().await;
        entries.insert(name, cached);
    }

    /// Invalidate a cache entry by name.
    pub async fn invalidate(&self, name: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(name);
    }
}

/// A `SecretProvider` wrapper that adds TTL-based caching to any inner provider.
///
/// With a TTL of 0 the wrapper is pass-through: no values are stored and
/// every `get_secret` hits the inner provider, so a provider failure is
/// surfaced to the caller unmasked.
pub struct CachedSecretProvider {
    inner: Arc<dyn SecretProvider>,
    cache: Option<SecretCache>,
}

impl CachedSecretProvider {
    /// Create a new cached provider wrapping the given inner provider.
    pub fn new(inner: Arc<dyn SecretProvider>, cache_ttl_seconds: u64) -> Self {
        let cache = if cache_ttl_seconds > 0 {
            Some(SecretCache::new(cache_ttl_seconds))
        } else {
            None
        };
        Self { inner, cache }
    }

    /// Get a reference to the inner provider.
    pub fn inner(&self) -> &Arc<dyn SecretProvider> {
        &self.inner
    }

    /// Invalidate a cached entry, forcing the next get to go to the provider.
    pub async fn invalidate(&self, name: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate(name).await;
        }
    }
}

impl std::fmt::Debug for CachedSecretProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSecretProvider")
            .field("provider_type", &self.inner.provider_type())
            .field("caching", &self.cache.is_some())
            .finish()
    }
}

#[async_trait]
impl SecretProvider for CachedSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError> {
        let Some(cache) = &self.cache else {
            return self.inner.get_secret(name).await;
        };

        if let Some(cached) = cache.get(name).await {
            tracing::debug!(secret_name = name, "Secret cache hit");
            return Ok(cached);
        }

        tracing::debug!(
            secret_name = name,
            "Secret cache miss, fetching from provider"
        );

        match self.inner.get_secret(name).await {
            Ok(secret) => {
                tracing::info!(
                    secret_name = name,
                    provider = self.inner.provider_type(),
                    "Secret loaded from provider"
                );
                cache.set(secret.clone()).await;
                Ok(secret)
            }
            Err(e) => {
                // On provider failure, fall back to an expired cached value
                if let Some(stale) = cache.get_even_expired(name).await {
                    tracing::warn!(
                        secret_name = name,
                        provider = self.inner.provider_type(),
                        error = %e,
                        "Provider unavailable, using stale cached secret"
                    );
                    return Ok(stale);
                }
                Err(e)
            }
        }
    }

    async fn health_check(&self) -> Result<bool, SecretError> {
        self.inner.health_check().await
    }

    fn provider_type(&self) -> &'static str {
        self.inner.provider_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double that counts fetches and can be switched to failing mode.
    struct CountingProvider {
        fetches: AtomicUsize,
        fail: std::sync::atomic::AtomicBool,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                fail: std::sync::atomic::AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl SecretProvider for CountingProvider {
        async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(SecretError::ProviderUnavailable {
                    provider: "counting".to_string(),
                    detail: "forced failure".to_string(),
                });
            }
            Ok(SecretValue::new(name, b"key-material".to_vec()))
        }

        async fn health_check(&self) -> Result<bool, SecretError> {
            Ok(true)
        }

        fn provider_type(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_cache_set_and_get() {
        let cache = SecretCache::new(300);
        let secret = SecretValue::new("test_key", b"test_value".to_vec());
        cache.set(secret).await;

        let result = cache.get("test_key").await;
        assert!(result.is_some());
        assert_eq!(result.unwrap().as_str().unwrap(), "test_value");
    }

    #[tokio::test]
    async fn test_cache_miss() {
        let cache = SecretCache::new(300);
        let result = cache.get("nonexistent").await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_cache_expired() {
        // TTL of 0 seconds means immediate expiry
        let cache = SecretCache::new(0);
        let secret = SecretValue::new("test_key", b"test_value".to_vec());
        cache.set(secret).await;

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let result = cache.get("test_key").await;
        assert!(result.is_none());

        let result = cache.get_even_expired("test_key").await;
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_cache_invalidate() {
        let cache = SecretCache::new(300);
        let secret = SecretValue::new("test_key", b"test_value".to_vec());
        cache.set(secret).await;

        assert!(cache.get("test_key").await.is_some());
        cache.invalidate("test_key").await;
        assert!(cache.get("test_key").await.is_none());
    }

    #[tokio::test]
    async fn test_zero_ttl_refetches_every_call() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedSecretProvider::new(inner.clone(), 0);

        cached.get_secret("token_signing_key").await.unwrap();
        cached.get_secret("token_signing_key").await.unwrap();
        cached.get_secret("token_signing_key").await.unwrap();

        assert_eq!(inner.fetches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_ttl_propagates_failure() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedSecretProvider::new(inner.clone(), 0);

        cached.get_secret("token_signing_key").await.unwrap();
        inner.fail.store(true, Ordering::SeqCst);

        // No stale fallback without a cache
        let result = cached.get_secret("token_signing_key").await;
        assert!(matches!(
            result,
            Err(SecretError::ProviderUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_positive_ttl_serves_from_cache() {
        let inner = Arc::new(CountingProvider::new());
        let cached = CachedSecretProvider::new(inner.clone(), 300);

        cached.get_secret("token_signing_key").await.unwrap();
        cached.get_secret("token_signing_key").await.unwrap();

        assert_eq!(inner.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_positive_ttl_serves_stale_on_failure() {
        let inner = Arc::new(CountingProvider::new());
        // TTL 1 second so the entry stays resolvable via get_even_expired
        let cached = CachedSecretProvider::new(inner.clone(), 1);

        cached.get_secret("token_signing_key").await.unwrap();
        cached.invalidate("missing").await;
        inner.fail.store(true, Ordering::SeqCst);

        // Expire the entry, then fail the provider: stale value is served
        tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
        let result = cached.get_secret("token_signing_key").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str().unwrap(), "key-material");
    }
}
