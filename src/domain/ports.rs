use crate::domain::model::{CachedFeed, FeedItem, LocalFeedItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<FeedItem>>;
}

/// Persistence port for the local feed cache. Implementations only move bytes;
/// delete-then-insert ordering and staleness rules live in the cache layer.
#[async_trait]
pub trait FeedStore: Send + Sync {
    async fn delete_cached_feed(&self) -> Result<()>;
    async fn insert(&self, items: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<()>;
    /// `Ok(None)` means the cache is empty, which is not an error.
    async fn retrieve(&self) -> Result<Option<CachedFeed>>;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn cache_path(&self) -> &str;
    fn max_cache_age_days(&self) -> i64;
    fn timeout_seconds(&self) -> u64;
}
