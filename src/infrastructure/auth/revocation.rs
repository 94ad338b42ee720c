use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use redis::{AsyncCommands, Client as RedisClient};

use crate::errors::AuthError;

const REVOKED_PREFIX: &str = "session_revoked";

/// Records session ids that were logged out before their token expired.
#[async_trait]
pub trait SessionRevocations: Send + Sync {
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> Result<(), AuthError>;
    async fn is_revoked(&self, session_id: &str) -> Result<bool, AuthError>;
    async fn ping(&self) -> Result<(), AuthError>;

    /// Drops entries whose token would have expired anyway. Backends with
    /// native expiry have nothing to do.
    async fn purge_expired(&self) -> usize {
        0
    }

    fn backend(&self) -> &'static str;
}

fn revoked_key(session_id: &str) -> String {
    format!("{REVOKED_PREFIX}:{session_id}")
}

pub struct RedisRevocations {
    client: RedisClient,
}

impl RedisRevocations {
    pub fn new(client: RedisClient) -> Self {
        RedisRevocations { client }
    }
}

#[async_trait]
impl SessionRevocations for RedisRevocations {
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> Result<(), AuthError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex::<_, _, ()>(revoked_key(session_id), 1u8, ttl_seconds.max(1)).await?;
        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> Result<bool, AuthError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let exists: bool = conn.exists(revoked_key(session_id)).await?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<(), AuthError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<String>(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

/// Process-local store used when no Redis URL is configured. Revocations do
/// not survive a restart and are not shared between instances.
#[derive(Default)]
pub struct MemoryRevocations {
    entries: DashMap<String, DateTime<Utc>>,
}

impl MemoryRevocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SessionRevocations for MemoryRevocations {
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> Result<(), AuthError> {
        let until = Utc::now() + Duration::seconds(ttl_seconds.max(1) as i64);
        self.entries.insert(revoked_key(session_id), until);
        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> Result<bool, AuthError> {
        let now = Utc::now();
        Ok(self
            .entries
            .get(&revoked_key(session_id))
            .is_some_and(|until| *until > now))
    }

    async fn ping(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, until| *until > now);
        before.saturating_sub(self.entries.len())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn memory_store_remembers_until_expiry() {
        let store = MemoryRevocations::new();
        assert!(!store.is_revoked("abc").await.unwrap());

        store.revoke("abc", 60).await.unwrap();
        assert!(store.is_revoked("abc").await.unwrap());
        assert!(!store.is_revoked("other").await.unwrap());
        assert_eq!(store.purge_expired().await, 0);
    }

    #[actix_rt::test]
    async fn purge_drops_expired_entries() {
        let store = MemoryRevocations::new();
        store
            .entries
            .insert(revoked_key("old"), Utc::now() - Duration::seconds(1));
        store.revoke("fresh", 60).await.unwrap();

        assert!(!store.is_revoked("old").await.unwrap());
        assert_eq!(store.purge_expired().await, 1);
        assert_eq!(store.len(), 1);
    }
}
